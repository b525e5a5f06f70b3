//! Grouping and reduction over record variations.
//!
//! A bucket value of `None` means the group had no numeric contributions
//! ("no data"), which is kept distinct from a computed `0.0` all the way to
//! the renderers. Invalid or missing variations are excluded from the
//! values a group reduces over, never coerced to zero.

use ipca_core::record::IndexRecord;
use std::collections::{BTreeMap, BTreeSet};

/// How a group's variations collapse into one bucket value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduce {
    Mean,
    Sum,
}

impl Reduce {
    /// Reduce a slice of valid variations. Empty input yields `None` for
    /// both reductions, so an all-invalid group reads as "no data" rather
    /// than a zero.
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let total: f64 = values.iter().sum();
        match self {
            Reduce::Sum => Some(total),
            Reduce::Mean => Some(total / values.len() as f64),
        }
    }
}

/// Group records by `key_fn` and reduce each group's valid variations.
/// Output is sorted ascending by key; every key that appears in the input
/// gets a bucket, even if all its variations were invalid.
pub fn aggregate_by<K, F>(
    records: &[&IndexRecord],
    key_fn: F,
    reduce: Reduce,
) -> Vec<(K, Option<f64>)>
where
    K: Ord,
    F: Fn(&IndexRecord) -> K,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        let values = groups.entry(key_fn(record)).or_default();
        if let Some(v) = record.variacao {
            values.push(v);
        }
    }
    groups
        .into_iter()
        .map(|(key, values)| {
            let bucket = reduce.apply(&values);
            (key, bucket)
        })
        .collect()
}

/// Like `aggregate_by`, but with one bucket per caller-declared key, in
/// declared order. Used for fixed category lists such as the 12 calendar
/// months, where absent groups must still occupy their slot (as `None`).
pub fn aggregate_in_order<K, F>(
    records: &[&IndexRecord],
    keys: &[K],
    key_fn: F,
    reduce: Reduce,
) -> Vec<(K, Option<f64>)>
where
    K: Ord + Clone,
    F: Fn(&IndexRecord) -> K,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        let key = key_fn(record);
        let values = groups.entry(key).or_default();
        if let Some(v) = record.variacao {
            values.push(v);
        }
    }
    keys.iter()
        .map(|key| {
            let bucket = groups.get(key).and_then(|values| reduce.apply(values));
            (key.clone(), bucket)
        })
        .collect()
}

/// Distinct years present in the snapshot, sorted ascending.
pub fn available_years(records: &[IndexRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|r| r.ano)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct months present in the snapshot, sorted ascending.
pub fn available_months(records: &[IndexRecord]) -> Vec<u32> {
    records
        .iter()
        .map(|r| r.mes)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
