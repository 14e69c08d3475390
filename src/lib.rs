//! A small MapReduce word counter.
//!
//! A document is fetched over HTTP, split into tokens, and counted by
//! running a [`Workload`] through the standalone engine: a parallel map
//! stage, a sequential shuffle, and a parallel reduce stage. The resulting
//! [`FrequencyTable`] feeds a terminal bar chart of the most frequent words.

pub mod fetch;
pub mod report;
pub mod standalone;
pub mod table;
pub mod utils;
pub mod workload;

pub use table::FrequencyTable;

/////////////////////////////////////////////////////////////////////////////
// MapReduce application types
/////////////////////////////////////////////////////////////////////////////

/// A map function takes a single token and emits one key-value pair.
pub type MapFn = fn(token: &str) -> KeyValue;

/// A reduce function takes every value grouped under one key and
/// folds them into a single key-value pair.
pub type ReduceFn = fn(entry: GroupEntry) -> KeyValue;

/// A map reduce application.
#[derive(Copy, Clone)]
pub struct Workload {
    pub map_fn: MapFn,
    pub reduce_fn: ReduceFn,
}

/////////////////////////////////////////////////////////////////////////////
// Key-value pairs
/////////////////////////////////////////////////////////////////////////////

/// A single key-value pair.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct KeyValue {
    /// The key.
    pub key: String,
    /// The value.
    pub value: u64,
}

impl KeyValue {
    /// Construct a new key-value pair from the given key and value.
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Get the key of this key-value pair.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value of this key-value pair.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Every value emitted under one key, in the order the shuffle saw them.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GroupEntry {
    pub key: String,
    pub values: Vec<u64>,
}

impl GroupEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: Vec::new(),
        }
    }
}
