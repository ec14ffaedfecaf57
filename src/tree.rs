//! Trees of polynomial values.
//!
//! A tree is the ordered sequence of levels `0..=n`; level `L` holds the values
//! of every polynomial of total degree `L` at the evaluation points, one array
//! of the batch shape per polynomial.
//!
//! Construction is append-only. Each new level is computed from a
//! `RecurrenceWindow` over the two most recent levels; earlier levels are
//! never read or written again.

use ndarray::{ArrayD, ArrayViewD, Axis};

use crate::scalar::Scalar;

/// All polynomial values of one total degree.
pub type Level<T> = Vec<ArrayD<T>>;

/// The two most recent levels, the only data a recurrence step reads.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecurrenceWindow<'a, T> {
    /// Level `L - 2`, absent while building level 1
    pub(crate) older: Option<&'a [ArrayD<T>]>,
    /// Level `L - 1`
    pub(crate) newer: &'a [ArrayD<T>],
}

impl<'a, T> RecurrenceWindow<'a, T> {
    /// Window whose newest level is `newer`.
    pub(crate) fn new(older: Option<&'a [ArrayD<T>]>, newer: &'a [ArrayD<T>]) -> Self {
        Self { older, newer }
    }
}

/// Fully materialized tree of polynomial values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    levels: Vec<Level<T>>,
    batch_shape: Vec<usize>,
}

impl<T> Tree<T> {
    /// Start a tree from its degree-0 level.
    pub(crate) fn with_root(root: Level<T>, batch_shape: &[usize]) -> Self {
        Self {
            levels: vec![root],
            batch_shape: batch_shape.to_vec(),
        }
    }

    /// Window over the two most recent levels.
    pub(crate) fn window(&self) -> RecurrenceWindow<'_, T> {
        let n = self.levels.len();
        RecurrenceWindow {
            older: n.checked_sub(2).map(|k| self.levels[k].as_slice()),
            newer: &self.levels[n - 1],
        }
    }

    pub(crate) fn push(&mut self, level: Level<T>) {
        debug_assert!(level.iter().all(|a| a.shape() == self.batch_shape.as_slice()));
        self.levels.push(level);
    }

    /// Highest degree in the tree.
    pub fn degree(&self) -> usize {
        self.levels.len() - 1
    }

    /// Number of levels, `degree + 1`.
    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }

    /// Total number of polynomials over all levels.
    pub fn n_modes(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Values of degree `degree`, if present.
    pub fn level(&self, degree: usize) -> Option<&[ArrayD<T>]> {
        self.levels.get(degree).map(Vec::as_slice)
    }

    /// All levels in degree order.
    pub fn levels(&self) -> &[Level<T>] {
        &self.levels
    }

    /// Shape of every value array.
    pub fn batch_shape(&self) -> &[usize] {
        &self.batch_shape
    }

    /// Iterate over levels in degree order.
    pub fn iter(&self) -> std::slice::Iter<'_, Level<T>> {
        self.levels.iter()
    }

    /// Take ownership of the levels.
    pub fn into_levels(self) -> Vec<Level<T>> {
        self.levels
    }

    /// Apply `f` to every value.
    pub fn map<U, F>(&self, mut f: F) -> Tree<U>
    where
        F: FnMut(&T) -> U,
    {
        Tree {
            levels: self
                .levels
                .iter()
                .map(|level| level.iter().map(|a| a.map(&mut f)).collect())
                .collect(),
            batch_shape: self.batch_shape.clone(),
        }
    }
}

impl<T: Clone> Tree<T> {
    /// One level as a single array of shape `[entries, ...batch]`.
    pub fn stacked_level(&self, degree: usize) -> Option<ArrayD<T>> {
        let level = self.levels.get(degree)?;
        let views: Vec<ArrayViewD<'_, T>> = level.iter().map(|a| a.view()).collect();
        ndarray::stack(Axis(0), &views).ok()
    }
}

impl<T: Scalar> Tree<T> {
    /// Floating-point copy of the tree.
    pub fn to_f64(&self) -> Tree<f64> {
        self.map(|x| x.to_f64())
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = Level<T>;
    type IntoIter = std::vec::IntoIter<Level<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a Level<T>;
    type IntoIter = std::slice::Iter<'a, Level<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
