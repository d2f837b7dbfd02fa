use tracing::{debug, warn};

use crate::error::Result;
use crate::host::{ConfigSource, VarStore};
use crate::report::Report;
use crate::total::{get_total, store_total};
use crate::vowels::{count, get_vowels};
use crate::Runnable;

/// Counts the vowels in `input` and folds them into the stored total.
///
/// The total is written back even when nothing matched. The read and the
/// write are not atomic; two calls racing on one store can lose an update.
pub fn count_vowels(
    input: &str,
    config: &impl ConfigSource,
    store: &mut impl VarStore,
) -> Result<Report> {
    let vowels = get_vowels(config)?;
    let found = count(input, &vowels);

    let previous = get_total(&*store);
    let total = match previous.checked_add(found) {
        Some(total) => total,
        None => {
            warn!(previous, count = found, "running total saturated");
            u32::MAX
        }
    };
    store_total(store, total)?;

    debug!(count = found, total, "counted vowels");
    Ok(Report {
        count: found,
        total,
        vowels,
    })
}

/// The plugin entry point bound to a config source and a variable store.
pub struct CountVowels<C, S> {
    config: C,
    store: S,
}

impl<C: ConfigSource, S: VarStore> CountVowels<C, S> {
    pub fn new(config: C, store: S) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<C: ConfigSource, S: VarStore> Runnable for CountVowels<C, S> {
    fn run(&mut self, input: Vec<u8>) -> Result<Vec<u8>> {
        let input = String::from_utf8(input)?;
        count_vowels(&input, &self.config, &mut self.store)?.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::memory::{MemoryConfig, MemoryVars};
    use crate::total::TOTAL_KEY;
    use crate::vowels::{DEFAULT_VOWELS, VOWELS_KEY};

    /// Reads fail, writes reach the inner store.
    struct WriteOnlyStore(MemoryVars);

    impl VarStore for WriteOnlyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Err(Error::Store {
                key: key.to_string(),
                message: "read failed".to_string(),
            })
        }

        fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
            self.0.set(key, value)
        }
    }

    struct BrokenStore;

    impl VarStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Err(Error::Store {
                key: key.to_string(),
                message: "host unavailable".to_string(),
            })
        }

        fn set(&mut self, key: &str, _value: Vec<u8>) -> Result<()> {
            Err(Error::Store {
                key: key.to_string(),
                message: "host unavailable".to_string(),
            })
        }
    }

    #[test]
    fn accumulates_across_calls() {
        let config = MemoryConfig::new();
        let mut vars = MemoryVars::new();

        let first = count_vowels("cat", &config, &mut vars).unwrap();
        assert_eq!((first.count, first.total), (1, 1));

        let second = count_vowels("dog", &config, &mut vars).unwrap();
        assert_eq!((second.count, second.total), (1, 2));
        assert_eq!(second.vowels, DEFAULT_VOWELS);
    }

    #[test]
    fn empty_input_still_writes_total() {
        let config = MemoryConfig::new();
        let mut vars = MemoryVars::new();

        let report = count_vowels("", &config, &mut vars).unwrap();
        assert_eq!((report.count, report.total), (0, 0));
        assert_eq!(vars.get(TOTAL_KEY).unwrap(), Some(vec![0, 0, 0, 0]));
    }

    #[test]
    fn custom_alphabet_is_reported() {
        let config = MemoryConfig::new().with(VOWELS_KEY, "aeiou");
        let mut vars = MemoryVars::new();

        let report = count_vowels("AEIOU", &config, &mut vars).unwrap();
        assert_eq!(report.count, 0);
        assert_eq!(report.vowels, "aeiou");
    }

    #[test]
    fn total_saturates_at_max() {
        let config = MemoryConfig::new();
        let mut vars = MemoryVars::new();
        store_total(&mut vars, u32::MAX - 1).unwrap();

        let report = count_vowels("aeiou", &config, &mut vars).unwrap();
        assert_eq!((report.count, report.total), (5, u32::MAX));
        assert_eq!(get_total(&vars), u32::MAX);
    }

    #[test]
    fn unreadable_total_starts_from_zero() {
        let config = MemoryConfig::new();
        let mut store = WriteOnlyStore(MemoryVars::new());

        let report = count_vowels("cat", &config, &mut store).unwrap();
        assert_eq!((report.count, report.total), (1, 1));
        assert_eq!(get_total(&store.0), 1);
    }

    #[test]
    fn wide_stored_total_is_read_from_low_bytes() {
        let config = MemoryConfig::new();
        let mut vars = MemoryVars::new();
        vars.set(TOTAL_KEY, vec![3, 0, 0, 0, 0, 0, 0, 0]).unwrap();

        let report = count_vowels("dog", &config, &mut vars).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(vars.get(TOTAL_KEY).unwrap(), Some(vec![4, 0, 0, 0]));
    }

    #[test]
    fn write_failure_propagates() {
        let err = count_vowels("abc", &MemoryConfig::new(), &mut BrokenStore).unwrap_err();
        assert!(matches!(err, Error::Store { .. }));
    }

    #[test]
    fn run_rejects_invalid_utf8() {
        let mut runnable = CountVowels::new(MemoryConfig::new(), MemoryVars::new());
        assert!(matches!(
            runnable.run(vec![0xff, 0xfe]),
            Err(Error::InvalidInput(_))
        ));
        assert!(runnable.store().is_empty());
    }
}
