use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use probe_experiment::cs::hashing::RawHash;
use probe_experiment::experiment::{
    describe_insert, dump_to_file, DataSource, Experiment, RandomIntegers, Timestamps, WordList,
    DEFAULT_CAPACITY_RANGE,
};
use probe_experiment::{Error, Result};

/// Compare linear probing and double hashing on a fixed-size hash table
#[derive(Parser, Debug)]
#[command(name = "hashtable-experiment", version, about)]
struct Args {
    /// Key source: 1 = random numbers, 2 = dates one second apart, 3 = word list
    data_source: u8,

    /// Ratio of stored keys to table capacity at which inserts stop
    load_factor: f64,

    /// 0 = summary, 1 = also save both tables to files, 2 = also print every insert
    #[arg(default_value_t = 0)]
    debug_level: u8,

    /// Word list read for data source 3, one word per line
    #[arg(long, default_value = "word-list.txt")]
    words: PathBuf,

    /// Seed for the random number source
    #[arg(long)]
    seed: Option<u64>,

    /// Lower bound of the twin prime search for the table capacity
    #[arg(long, default_value_t = DEFAULT_CAPACITY_RANGE.0)]
    min: usize,

    /// Upper bound of the twin prime search for the table capacity
    #[arg(long, default_value_t = DEFAULT_CAPACITY_RANGE.1)]
    max: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebugLevel {
    Summary,
    Dump,
    Trace,
}

impl DebugLevel {
    fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(DebugLevel::Summary),
            1 => Ok(DebugLevel::Dump),
            2 => Ok(DebugLevel::Trace),
            other => Err(Error::InvalidDebugLevel(other)),
        }
    }
}

fn run<K, I>(args: &Args, source: DataSource, level: DebugLevel, keys: I) -> Result<()>
where
    K: RawHash + Eq + Clone + Display,
    I: IntoIterator<Item = K>,
{
    let mut experiment = Experiment::with_twin_prime(args.min, args.max, args.load_factor)?;

    if level == DebugLevel::Trace {
        experiment.run_with(keys, |strategy, key, outcome| {
            println!("{}", describe_insert(strategy, key, outcome));
        });
    } else {
        experiment.run(keys);
    }

    print!("{}", experiment.summary(source));

    if level == DebugLevel::Dump {
        dump_to_file(experiment.linear(), "linear-dump.txt")?;
        println!("HashtableExperiment: Saved dump of linear probing table to linear-dump.txt");
        dump_to_file(experiment.double(), "double-dump.txt")?;
        println!("HashtableExperiment: Saved dump of double hashing table to double-dump.txt");
    }
    Ok(())
}

fn try_main(args: &Args) -> Result<()> {
    let source = DataSource::from_code(args.data_source)?;
    let level = DebugLevel::from_code(args.debug_level)?;

    match source {
        DataSource::RandomIntegers => {
            let keys = match args.seed {
                Some(seed) => RandomIntegers::with_seed(seed),
                None => RandomIntegers::from_entropy(),
            };
            run(args, source, level, keys)
        }
        DataSource::Dates => run(args, source, level, Timestamps::from_now()),
        DataSource::WordList => run(args, source, level, WordList::open(&args.words)?),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hashtable-experiment: {}", err);
            ExitCode::FAILURE
        }
    }
}
