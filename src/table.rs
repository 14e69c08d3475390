//! The final word to count mapping produced by a MapReduce run.

use fnv::FnvHashMap;
use itertools::Itertools;

use crate::KeyValue;

/// Total occurrence count per distinct word.
///
/// Entries iterate in the order their keys were first seen. The table has
/// no mutating methods; it is built once from the reduce output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: FnvHashMap<String, usize>,
}

impl FrequencyTable {
    /// Builds a table from reduced pairs.
    ///
    /// A key that appears more than once has its values added together,
    /// so a table built from raw map output is also a valid count.
    pub fn from_pairs(pairs: impl IntoIterator<Item = KeyValue>) -> Self {
        let mut table = Self::default();
        for KeyValue { key, value } in pairs {
            match table.index.get(&key) {
                Some(&slot) => table.entries[slot].1 += value,
                None => {
                    table.index.insert(key.clone(), table.entries.len());
                    table.entries.push((key, value));
                }
            }
        }
        table
    }

    /// Count recorded for `word`, if it occurred at all.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count, i.e. the number of tokens that were counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates `(word, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// The sort is stable, so words with equal counts keep first-occurrence
    /// order. Asking for more words than the table holds returns them all.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        self.iter()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[(&str, u64)]) -> FrequencyTable {
        FrequencyTable::from_pairs(words.iter().map(|&(k, v)| KeyValue::new(k, v)))
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let t = table(&[("b", 1), ("a", 1), ("b", 1), ("c", 3)]);
        let words: Vec<_> = t.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
        assert_eq!(t.get("b"), Some(2));
        assert_eq!(t.get("zzz"), None);
        assert_eq!(t.total(), 6);
    }

    #[test]
    fn top_breaks_ties_by_first_occurrence() {
        let t = table(&[("sat", 1), ("the", 2), ("cat", 2), ("ran", 1)]);
        assert_eq!(t.top(3), vec![("the", 2), ("cat", 2), ("sat", 1)]);
    }

    #[test]
    fn top_larger_than_table_returns_everything() {
        let t = table(&[("x", 4), ("y", 9)]);
        assert_eq!(t.top(10), vec![("y", 9), ("x", 4)]);
        assert!(FrequencyTable::default().top(5).is_empty());
    }
}
