//! Evaluation point sets.
//!
//! A point set holds one coordinate array per spatial axis. All axes share the
//! same *batch shape*: a single point (`[]`), a 1-D sample (`[m]`), a 2-D grid
//! (`[m, k]`), and so on. Every level entry of a tree has this batch shape.

use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn};

use crate::error::{OrthoError, Result};

/// Coordinates of the points a tree is evaluated at.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationPoints<T> {
    axes: Vec<ArrayD<T>>,
    batch_shape: Vec<usize>,
}

impl<T: Clone> EvaluationPoints<T> {
    /// Build from a stacked array of shape `[n_axes, ...batch]`.
    pub fn from_stacked(stacked: ArrayViewD<'_, T>) -> Result<Self> {
        if stacked.ndim() == 0 || stacked.shape()[0] == 0 {
            return Err(OrthoError::EmptyPoints);
        }

        let batch_shape = stacked.shape()[1..].to_vec();
        let axes = stacked
            .axis_iter(Axis(0))
            .map(|axis| axis.to_owned())
            .collect();

        Ok(Self { axes, batch_shape })
    }

    /// Build from separate per-axis arrays, broadcasting them together.
    ///
    /// Shapes follow the usual broadcasting rule: aligned from the trailing
    /// dimension, each pair of extents must agree or one of them must be 1.
    pub fn from_axes(axes: Vec<ArrayD<T>>) -> Result<Self> {
        if axes.is_empty() {
            return Err(OrthoError::EmptyPoints);
        }

        let shapes: Vec<Vec<usize>> = axes.iter().map(|a| a.shape().to_vec()).collect();
        let batch_shape =
            broadcast_shape(&shapes).ok_or_else(|| OrthoError::ShapeMismatch(shapes.clone()))?;

        let axes = axes
            .iter()
            .map(|axis| {
                axis.broadcast(IxDyn(&batch_shape))
                    .map(|view| view.to_owned())
                    .ok_or_else(|| OrthoError::ShapeMismatch(shapes.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { axes, batch_shape })
    }
}

impl<T> EvaluationPoints<T> {
    /// Number of coordinate axes.
    pub fn n_axes(&self) -> usize {
        self.axes.len()
    }

    /// Coordinate array of one axis.
    pub fn axis(&self, i: usize) -> &ArrayD<T> {
        &self.axes[i]
    }

    /// Shape shared by all coordinate arrays.
    pub fn batch_shape(&self) -> &[usize] {
        &self.batch_shape
    }

    /// Number of points in the batch.
    pub fn n_points(&self) -> usize {
        self.batch_shape.iter().product()
    }

    /// Fail unless the point set has exactly `expected` axes.
    pub fn expect_axes(&self, expected: usize) -> Result<()> {
        if self.axes.len() != expected {
            return Err(OrthoError::AxisCount {
                expected,
                found: self.axes.len(),
            });
        }
        Ok(())
    }
}

/// Common broadcast shape of several array shapes, if one exists.
pub fn broadcast_shape(shapes: &[Vec<usize>]) -> Option<Vec<usize>> {
    let ndim = shapes.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (k, &extent) in shape.iter().enumerate() {
            let slot = &mut out[offset + k];
            if *slot == 1 {
                *slot = extent;
            } else if extent != 1 && extent != *slot {
                return None;
            }
        }
    }

    Some(out)
}
