//! A MapReduce-compatible implementation of word count.
//!

use crate::*;

pub fn map(token: &str) -> KeyValue {
    KeyValue::new(token.to_lowercase(), 1)
}

pub fn reduce(entry: GroupEntry) -> KeyValue {
    let count = entry.values.iter().sum();
    KeyValue::new(entry.key, count)
}
