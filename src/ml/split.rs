//! Reproducible train/test partitioning.
//!
//! Row indices are shuffled with a [`StdRng`] seeded from the configured
//! seed and the first `ceil(n * test_fraction)` of them, clamped to
//! `[1, n - 1]`, are held out. Both lists are returned in ascending order so
//! rows keep their original relative order inside each partition.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Result, SentirError};

/// Row indices of a train/test partition, each list ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Partition `n` rows, holding out `test_fraction` of them.
    pub fn new(n: usize, test_fraction: f64, seed: u64) -> Result<Self> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(SentirError::invalid_config(format!(
                "test fraction must be in (0, 1), got {test_fraction}"
            )));
        }
        if n < 2 {
            return Err(SentirError::insufficient_data(format!(
                "need at least 2 rows to split, got {n}"
            )));
        }

        let n_test = ((n as f64 * test_fraction).ceil() as usize).clamp(1, n - 1);

        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let (test, train) = order.split_at_mut(n_test);
        test.sort_unstable();
        train.sort_unstable();
        let split = TrainTestSplit {
            train: train.to_vec(),
            test: test.to_vec(),
        };

        debug!(
            "split {n} rows: {} train, {} test (seed {seed})",
            split.train.len(),
            split.test.len()
        );
        Ok(split)
    }

    /// Copy the rows at `indices` out of `items`.
    pub fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
        indices.iter().map(|&i| items[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_complete(split: &TrainTestSplit, n: usize) {
        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_partition() {
        let a = TrainTestSplit::new(50, 0.3, 1234).unwrap();
        let b = TrainTestSplit::new(50, 0.3, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_partition() {
        let base = TrainTestSplit::new(20, 0.2, 42).unwrap();
        let differs = (0..16u64)
            .map(|seed| TrainTestSplit::new(20, 0.2, seed).unwrap())
            .any(|split| split != base);
        assert!(differs);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let split = TrainTestSplit::new(37, 0.2, 99).unwrap();
        assert_eq!(split.test.len(), 8); // ceil(7.4)
        assert_eq!(split.train.len(), 29);
        assert_complete(&split, 37);
    }

    #[test]
    fn test_partitions_are_sorted() {
        for seed in [0, 7, 42, u64::MAX] {
            let split = TrainTestSplit::new(25, 0.4, seed).unwrap();
            assert!(split.train.windows(2).all(|w| w[0] < w[1]));
            assert!(split.test.windows(2).all(|w| w[0] < w[1]));
            assert_complete(&split, 25);
        }
    }

    #[test]
    fn test_clamping() {
        // tiny fraction still holds out one row
        assert_eq!(TrainTestSplit::new(3, 0.01, 0).unwrap().test.len(), 1);
        // huge fraction still trains on one row
        assert_eq!(TrainTestSplit::new(3, 0.99, 0).unwrap().train.len(), 1);
        // four rows at the default fraction hold out one
        let split = TrainTestSplit::new(4, 0.2, 42).unwrap();
        assert_eq!((split.train.len(), split.test.len()), (3, 1));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            TrainTestSplit::new(1, 0.2, 0).unwrap_err(),
            SentirError::InsufficientData(_)
        ));
        assert!(matches!(
            TrainTestSplit::new(10, 0.0, 0).unwrap_err(),
            SentirError::InvalidConfig(_)
        ));
        assert!(matches!(
            TrainTestSplit::new(10, 1.0, 0).unwrap_err(),
            SentirError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_select() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(TrainTestSplit::select(&items, &[3, 0]), vec!["d", "a"]);
    }
}
