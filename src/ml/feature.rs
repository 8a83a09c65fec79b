//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

/// A sparse vector of `(index, weight)` entries with a fixed dimensionality.
///
/// Entries are kept sorted by index, with no duplicates and no explicit
/// zeros.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// An all-zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        FeatureVector {
            dim,
            entries: Vec::new(),
        }
    }

    /// Build a vector from arbitrary entries.
    ///
    /// Entries are sorted, duplicate indices summed, zeros and indices
    /// outside `0..dim` dropped.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(index, _)| index < dim);
        entries.sort_by_key(|&(index, _)| index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == index => *total += weight,
                _ => merged.push((index, weight)),
            }
        }
        merged.retain(|&(_, weight)| weight != 0.0);

        FeatureVector {
            dim,
            entries: merged,
        }
    }

    /// Dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// The non-zero entries, sorted by index.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Iterate over the non-zero entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Weight at `index`, zero if absent.
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Euclidean norm.
    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm; all-zero vectors stay zero.
    pub fn normalize_l2(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
    }

    /// Dot product with a dense row; indices past the row are ignored.
    pub fn dot_dense(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, w)| dense.get(i).map(|d| d * w))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_sorts_and_merges() {
        let v = FeatureVector::from_entries(5, vec![(3, 1.0), (1, 2.0), (3, 0.5), (9, 4.0), (2, 0.0)]);

        assert_eq!(v.dim(), 5);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.5)]);
        assert_eq!(v.get(3), 1.5);
        assert_eq!(v.get(0), 0.0);
    }

    #[test]
    fn test_norm_and_nnz() {
        let v = FeatureVector::from_entries(4, vec![(3, 4.0), (1, 3.0)]);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.l2_norm(), 5.0);
    }

    #[test]
    fn test_normalize_l2() {
        let mut v = FeatureVector::from_entries(2, vec![(0, 3.0), (1, 4.0)]);
        v.normalize_l2();
        assert!((v.get(0) - 0.6).abs() < 1e-12);
        assert!((v.get(1) - 0.8).abs() < 1e-12);

        let mut zero = FeatureVector::zeros(3);
        zero.normalize_l2();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_dot_dense() {
        let v = FeatureVector::from_entries(3, vec![(0, 1.0), (2, 2.0)]);
        assert_eq!(v.dot_dense(&[0.5, 10.0, 0.25]), 1.0);
        // shorter row: missing indices contribute nothing
        assert_eq!(v.dot_dense(&[0.5]), 0.5);
    }
}
