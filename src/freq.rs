// src/freq.rs

use crate::symbol::Symbol;
use std::collections::BTreeMap;

/// Occurrence count per distinct symbol, ordered by symbol.
pub type FrequencyTable<S> = BTreeMap<S, u64>;

pub fn build_frequency_map<S: Symbol>(data: &[S]) -> FrequencyTable<S> {
    let mut freq_map = BTreeMap::new();
    for &symbol in data {
        *freq_map.entry(symbol).or_insert(0) += 1;
    }
    freq_map
}
