//! Key sources for the experiment: random integers, timestamps one second apart and
//! words read line by line.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::hashing::raw_hash::{fold64, RawHash};
use crate::error::{Error, Result};

/// Which kind of keys to feed the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    RandomIntegers,
    Dates,
    WordList,
}

impl DataSource {
    /// Maps the command-line codes 1, 2 and 3.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(DataSource::RandomIntegers),
            2 => Ok(DataSource::Dates),
            3 => Ok(DataSource::WordList),
            other => Err(Error::InvalidDataSource(other)),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::RandomIntegers => "Random Numbers",
            DataSource::Dates => "Dates",
            DataSource::WordList => "Word-List",
        };
        f.write_str(name)
    }
}

/// Endless stream of uniformly random `i32` keys.
#[derive(Debug, Clone)]
pub struct RandomIntegers {
    rng: ChaCha20Rng,
}

impl RandomIntegers {
    /// Reproducible stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }
}

impl Iterator for RandomIntegers {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        Some(self.rng.gen())
    }
}

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);
        Timestamp(millis)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }
}

impl RawHash for Timestamp {
    fn raw_hash(&self) -> i64 {
        fold64(self.0 as u64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Endless stream of timestamps, each one second after the previous.
#[derive(Debug, Clone)]
pub struct Timestamps {
    next: Timestamp,
}

impl Timestamps {
    pub const STEP_MILLIS: i64 = 1000;

    pub fn starting_at(start: Timestamp) -> Self {
        Self { next: start }
    }

    pub fn from_now() -> Self {
        Self::starting_at(Timestamp::now())
    }
}

impl Iterator for Timestamps {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        let current = self.next;
        self.next = Timestamp(current.0.wrapping_add(Self::STEP_MILLIS));
        Some(current)
    }
}

/// Lines of a word list. Ends at end of input or at the first read error.
pub struct WordList<R> {
    lines: std::io::Lines<R>,
}

impl WordList<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> WordList<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for WordList<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(err) => {
                log::warn!("word list read failed, stopping: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn data_source_codes() {
        assert_eq!(DataSource::from_code(1).unwrap(), DataSource::RandomIntegers);
        assert_eq!(DataSource::from_code(2).unwrap(), DataSource::Dates);
        assert_eq!(DataSource::from_code(3).unwrap(), DataSource::WordList);
        assert!(matches!(
            DataSource::from_code(4),
            Err(Error::InvalidDataSource(4))
        ));
        assert_eq!(DataSource::WordList.to_string(), "Word-List");
    }

    #[test]
    fn seeded_integers_repeat() {
        let first: Vec<i32> = RandomIntegers::with_seed(3).take(16).collect();
        let second: Vec<i32> = RandomIntegers::with_seed(3).take(16).collect();
        let other: Vec<i32> = RandomIntegers::with_seed(4).take(16).collect();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn timestamps_step_one_second() {
        let keys: Vec<i64> = Timestamps::starting_at(Timestamp(5_000))
            .take(3)
            .map(|t| t.millis())
            .collect();
        assert_eq!(keys, vec![5_000, 6_000, 7_000]);
    }

    #[test]
    fn timestamp_hash_folds_like_a_long() {
        assert_eq!(Timestamp(42).raw_hash(), 42);
        assert_eq!(Timestamp(1 << 32).raw_hash(), 1);
        assert!(Timestamp::now().millis() > 0);
    }

    #[test]
    fn word_list_lines() {
        let words: Vec<String> = WordList::new(Cursor::new("alpha\nbeta\n\ngamma")).collect();
        assert_eq!(words, vec!["alpha", "beta", "", "gamma"]);
    }

    #[test]
    fn missing_word_list() {
        assert!(matches!(
            WordList::open("/definitely/not/here/word-list.txt"),
            Err(Error::Io(_))
        ));
    }
}
