//! Per-event weight bookkeeping and statistical combination.
#![allow(clippy::cast_precision_loss)]

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::{info, warn};

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Registry of scalar event weights keyed by integer identifier.
///
/// A store is scoped to one unit of work (typically one event): created
/// empty, filled incrementally, optionally rescaled or shifted, queried for
/// combined statistics, then cleared or dropped. It is single-writer and
/// carries no internal locking.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightStore {
    weights: BTreeMap<u32, f64>,
}

impl WeightStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a weight under a new identifier.
    ///
    /// A duplicate identifier keeps its first value: the call emits a
    /// warning through the log facade and returns
    /// [`Error::DuplicateWeight`] instead of overwriting.
    pub fn add(&mut self, id: u32, value: f64) -> Result<()> {
        match self.weights.entry(id) {
            Entry::Occupied(_) => {
                warn!("weight {id} is already defined, redundant value skipped");
                Err(Error::DuplicateWeight { id })
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Returns the weight stored under `id`.
    pub fn weight(&self, id: u32) -> Result<f64> {
        self.weights
            .get(&id)
            .copied()
            .ok_or(Error::WeightNotFound { id })
    }

    /// Multiplies every stored value by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for value in self.weights.values_mut() {
            *value *= factor;
        }
    }

    /// Adds `offset` to every stored value in place.
    ///
    /// `scale` and `shift` do not commute; compositions are applied exactly
    /// in the order the caller invokes them.
    pub fn shift(&mut self, offset: f64) {
        for value in self.weights.values_mut() {
            *value += offset;
        }
    }

    /// Combines all stored values into a `(mean, spread)` summary.
    ///
    /// `"gaussian"` yields the population mean and population standard
    /// deviation. An empty store or an unrecognized method returns the
    /// `(0.0, 0.0)` sentinel rather than an error.
    #[must_use]
    pub fn combine(&self, method: &str) -> (f64, f64) {
        if self.weights.is_empty() {
            return (0.0, 0.0);
        }
        match method {
            "gaussian" => {
                let n = self.weights.len() as f64;
                let mean = self.weights.values().sum::<f64>() / n;
                let squared_diff: f64 = self.weights.values().map(|v| (v - mean).powi(2)).sum();
                (mean, (squared_diff / n).sqrt())
            }
            _ => (0.0, 0.0),
        }
    }

    /// Returns the number of stored weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no weights are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Removes all stored weights.
    pub fn clear(&mut self) {
        self.weights.clear();
    }

    /// Iterates over `(id, value)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.weights.iter().map(|(&id, &value)| (id, value))
    }

    /// Writes every `(id, value)` pair to the log for diagnostics.
    pub fn report(&self) {
        for (id, value) in &self.weights {
            info!("weight id={id} value={value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_then_lookup() {
        let mut store = WeightStore::new();
        store.add(7, 1.25).unwrap();
        assert_relative_eq!(store.weight(7).unwrap(), 1.25);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_add_keeps_first_value() {
        let mut store = WeightStore::new();
        store.add(3, 0.5).unwrap();
        let err = store.add(3, 9.0).unwrap_err();
        assert!(matches!(err, Error::DuplicateWeight { id: 3 }));
        assert!(err.is_recoverable());
        assert_relative_eq!(store.weight(3).unwrap(), 0.5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_weight_is_an_error() {
        let store = WeightStore::new();
        let err = store.weight(42).unwrap_err();
        assert!(matches!(err, Error::WeightNotFound { id: 42 }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_scale_then_shift() {
        let mut store = WeightStore::new();
        store.add(0, 1.0).unwrap();
        store.add(1, 2.0).unwrap();
        store.scale(2.0);
        store.shift(1.0);
        assert_relative_eq!(store.weight(0).unwrap(), 3.0);
        assert_relative_eq!(store.weight(1).unwrap(), 5.0);
    }

    #[test]
    fn test_shift_then_scale_differs() {
        let mut store = WeightStore::new();
        store.add(0, 1.0).unwrap();
        store.add(1, 2.0).unwrap();
        store.shift(1.0);
        store.scale(2.0);
        assert_relative_eq!(store.weight(0).unwrap(), 4.0);
        assert_relative_eq!(store.weight(1).unwrap(), 6.0);
    }

    #[test]
    fn test_combine_gaussian() {
        let mut store = WeightStore::new();
        store.add(1, 1.0).unwrap();
        store.add(2, 2.0).unwrap();
        store.add(3, 3.0).unwrap();
        let (mean, std) = store.combine("gaussian");
        assert_relative_eq!(mean, 2.0);
        assert_relative_eq!(std, (2.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_combine_fallback_sentinel() {
        let mut store = WeightStore::new();
        assert_eq!(store.combine("gaussian"), (0.0, 0.0));
        store.add(1, 4.0).unwrap();
        assert_eq!(store.combine("poisson"), (0.0, 0.0));
    }

    #[test]
    fn test_clear_resets_the_store() {
        let mut store = WeightStore::new();
        store.add(1, 1.0).unwrap();
        store.add(2, 2.0).unwrap();
        store.clear();
        assert!(store.is_empty());
        store.add(1, 7.0).unwrap();
        assert_relative_eq!(store.weight(1).unwrap(), 7.0);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let mut store = WeightStore::new();
        store.add(20, 0.2).unwrap();
        store.add(10, 0.1).unwrap();
        store.add(30, 0.3).unwrap();
        let ids: Vec<u32> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
        let again: Vec<u32> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, again);
    }
}
