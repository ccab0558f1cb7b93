//! Text reporting: the end-of-run summary, per-insert trace lines and table dumps.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cs::hashing::{HashTable, InsertOutcome, ProbeSequence};
use crate::error::Result;

pub use crate::cs::hashing::TableStats;

use super::source::DataSource;

/// Everything printed at the end of an experiment.
#[derive(Debug, Clone)]
pub struct Summary {
    pub capacity: usize,
    pub source: DataSource,
    pub load_factor: f64,
    pub tables: Vec<TableStats>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "HashtableExperiment: Found a twin prime table capacity: {}",
            self.capacity
        )?;
        writeln!(
            f,
            "HashtableExperiment: Input: {}   Loadfactor:{}",
            self.source, self.load_factor
        )?;

        for stats in &self.tables {
            writeln!(f)?;
            writeln!(f, "        Using {}", stats.strategy)?;
            writeln!(
                f,
                "HashtableExperiment: size of hash table is {}",
                stats.size
            )?;
            writeln!(
                f,
                "        Inserted {} elements, of which {} were duplicates",
                stats.inserted(),
                stats.num_duplicates
            )?;
            writeln!(
                f,
                "        Avg. no. of probes = {:.2}",
                stats.average_probes()
            )?;
        }
        Ok(())
    }
}

/// One line describing an insert, for verbose runs.
pub fn describe_insert<K: fmt::Display>(strategy: &str, key: &K, outcome: InsertOutcome) -> String {
    match outcome {
        InsertOutcome::Placed { index, probes } => {
            format!("{}: inserted {} at table[{}] after {} probe(s)", strategy, key, index, probes)
        }
        InsertOutcome::Duplicate { index, frequency } => {
            format!(
                "{}: duplicate {} at table[{}], frequency {}",
                strategy, key, index, frequency
            )
        }
        InsertOutcome::AtLoadFactor => {
            format!("{}: {} refused, table at load factor", strategy, key)
        }
        InsertOutcome::Exhausted => {
            format!("{}: {} refused, no free slot on its probe sequence", strategy, key)
        }
    }
}

/// Writes `table[i]: <key> <frequency> <probes>` for every live entry.
pub fn dump_table<K, P, W>(table: &HashTable<K, P>, mut out: W) -> std::io::Result<()>
where
    K: fmt::Display,
    P: ProbeSequence,
    W: Write,
{
    for (index, entry) in table.entries() {
        writeln!(out, "table[{}]: {}", index, entry)?;
    }
    out.flush()
}

/// [`dump_table`] into a newly created file.
pub fn dump_to_file<K, P>(table: &HashTable<K, P>, path: impl AsRef<Path>) -> Result<()>
where
    K: fmt::Display,
    P: ProbeSequence,
{
    let file = File::create(path.as_ref())?;
    dump_table(table, BufWriter::new(file))?;
    log::info!(
        "saved dump of {} table to {}",
        table.probe_sequence().name(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::hashing::{DoubleHashing, LinearProbing};
    use approx::assert_relative_eq;

    #[test]
    fn summary_text() {
        let summary = Summary {
            capacity: 95791,
            source: DataSource::RandomIntegers,
            load_factor: 0.5,
            tables: vec![TableStats {
                strategy: "Linear Probing",
                capacity: 95791,
                size: 4,
                num_duplicates: 2,
                num_probes: 7,
            }],
        };
        let text = summary.to_string();
        assert!(
            text.starts_with("HashtableExperiment: Found a twin prime table capacity: 95791\n")
        );
        assert!(text.contains("Input: Random Numbers   Loadfactor:0.5\n"));
        assert!(text.contains("        Using Linear Probing\n"));
        assert!(text.contains("size of hash table is 4\n"));
        assert!(text.contains("Inserted 6 elements, of which 2 were duplicates"));
        assert!(text.contains("Avg. no. of probes = 1.75"));
    }

    #[test]
    fn average_probes() {
        let stats = TableStats {
            strategy: "Double Hashing",
            capacity: 7,
            size: 3,
            num_duplicates: 0,
            num_probes: 4,
        };
        assert_relative_eq!(stats.average_probes(), 4.0 / 3.0);
    }

    #[test]
    fn insert_lines() {
        let line = describe_insert(
            "Linear Probing",
            &17,
            InsertOutcome::Placed { index: 5, probes: 3 },
        );
        assert_eq!(line, "Linear Probing: inserted 17 at table[5] after 3 probe(s)");
        let line = describe_insert(
            "Double Hashing",
            &"kiwi",
            InsertOutcome::Duplicate { index: 2, frequency: 4 },
        );
        assert_eq!(line, "Double Hashing: duplicate kiwi at table[2], frequency 4");
        assert!(describe_insert("x", &1, InsertOutcome::AtLoadFactor).contains("load factor"));
    }

    #[test]
    fn dump_lists_live_entries_only() {
        let mut table = HashTable::new(7, 1.0, LinearProbing).unwrap();
        for key in [3, 10, 3, 5] {
            table.insert(key);
        }
        table.delete(&5);

        let mut out = Vec::new();
        dump_table(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "table[3]: 3 2 1\ntable[4]: 10 1 2\n"
        );
    }

    #[test]
    fn dump_empty_table() {
        let table = HashTable::<i32, _>::new(7, 1.0, DoubleHashing).unwrap();
        let mut out = Vec::new();
        dump_table(&table, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
