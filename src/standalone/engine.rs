use anyhow::{Context, Result};
use fnv::FnvHashMap;
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::*;

fn worker_pool(stage: &str, workers: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name({
            let stage = stage.to_string();
            move |i| format!("{stage}-{i}")
        })
        .build()
        .with_context(|| format!("failed to start {stage} worker pool"))
}

/// Runs the workload's map function over every token on a pool of
/// `workers` threads.
///
/// The pool is torn down before this returns, so nothing from the map
/// stage outlives it. Output position `i` always belongs to token `i`.
pub fn perform_map(tokens: &[String], engine: &Workload, workers: usize) -> Result<Vec<KeyValue>> {
    let map_func = engine.map_fn;
    let pool = worker_pool("map", workers)?;
    let pairs: Vec<KeyValue> = pool.install(|| tokens.par_iter().map(|t| map_func(t)).collect());
    debug!(tokens = tokens.len(), pairs = pairs.len(), "map stage done");
    Ok(pairs)
}

/// Groups mapped pairs by key on the calling thread.
///
/// Keys come out in first-seen order and each key's values keep the order
/// they had in `pairs`.
pub fn perform_shuffle(pairs: Vec<KeyValue>) -> Vec<GroupEntry> {
    let mut slots: FnvHashMap<String, usize> = FnvHashMap::default();
    let mut groups: Vec<GroupEntry> = Vec::new();
    for KeyValue { key, value } in pairs {
        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(GroupEntry::new(key));
                groups.len() - 1
            }
        };
        groups[slot].values.push(value);
    }
    debug!(groups = groups.len(), "shuffle stage done");
    groups
}

/// Reduces every group on a pool of `workers` threads and collects the
/// results into a [`FrequencyTable`] in group order.
pub fn perform_reduce(
    groups: Vec<GroupEntry>,
    engine: &Workload,
    workers: usize,
) -> Result<FrequencyTable> {
    let reduce_func = engine.reduce_fn;
    let pool = worker_pool("reduce", workers)?;
    let reduced: Vec<KeyValue> = pool.install(|| groups.into_par_iter().map(reduce_func).collect());
    debug!(keys = reduced.len(), "reduce stage done");
    Ok(FrequencyTable::from_pairs(reduced))
}

/// Map, shuffle and reduce `tokens` with a fresh pool per parallel stage.
pub fn count(tokens: &[String], engine: &Workload, workers: usize) -> Result<FrequencyTable> {
    let pairs = perform_map(tokens, engine, workers)?;
    // shuffle only starts once every map result is in hand
    let groups = perform_shuffle(pairs);
    perform_reduce(groups, engine, workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tokenize;

    fn wc() -> Workload {
        workload::named("wc").unwrap()
    }

    fn words(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn cat_scenario() {
        let table = count(&words("The cat sat. The cat ran!"), &wc(), 4).unwrap();
        let got: Vec<_> = table.iter().collect();
        assert_eq!(got, vec![("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]);
        assert_eq!(table.top(2), vec![("the", 2), ("cat", 2)]);
    }

    #[test]
    fn map_keeps_positions() {
        let tokens = words("B a C b");
        let pairs = perform_map(&tokens, &wc(), 3).unwrap();
        let keys: Vec<_> = pairs.iter().map(KeyValue::key).collect();
        assert_eq!(keys, vec!["b", "a", "c", "b"]);
        assert!(pairs.iter().all(|kv| kv.value() == 1));
    }

    #[test]
    fn shuffle_groups_in_first_seen_order() {
        let pairs = vec![
            KeyValue::new("a", 1),
            KeyValue::new("b", 2),
            KeyValue::new("a", 3),
        ];
        assert_eq!(
            perform_shuffle(pairs),
            vec![
                GroupEntry { key: "a".into(), values: vec![1, 3] },
                GroupEntry { key: "b".into(), values: vec![2] },
            ]
        );
    }

    #[test]
    fn empty_document_gives_empty_table() {
        let table = count(&[], &wc(), 2).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn single_worker_matches_many() {
        let tokens = words("one Two three two THREE three, four four four four");
        let serial = count(&tokens, &wc(), 1).unwrap();
        let parallel = count(&tokens, &wc(), 8).unwrap();
        assert_eq!(serial, parallel);
        assert_eq!(parallel.get("four"), Some(4));
    }

    #[test]
    fn zero_workers_falls_back_to_default_pool_size() {
        // rayon treats 0 threads as "pick for me"
        assert!(count(&words("a b"), &wc(), 0).is_ok());
    }
}
