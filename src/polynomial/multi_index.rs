//! Multi-index bookkeeping for product-domain levels.
//!
//! A level of total degree `D` in `d` variables holds one polynomial per
//! multi-index `α ∈ ℕ^d` with `|α| = D`, stored flat in descending
//! lexicographic order of the exponents:
//!
//! ```text
//! d = 3, D = 2:  (2,0,0) (1,1,0) (1,0,1) (0,2,0) (0,1,1) (0,0,2)
//! ```
//!
//! Counting multi-indices gives every offset needed by the recurrence:
//!
//! - `count(D, v) = C(D + v - 1, v - 1)` multi-indices of degree `D` in `v`
//!   variables.
//! - The entries whose first `i` exponents are zero form the *tail* of the
//!   level: the last `count(D, d - i)` entries.
//! - Inside that tail the exponent of axis `i` descends from `D` to `0`. The
//!   block where it equals `D - k` (the remaining `v = d - i - 1` axes carry
//!   degree `k`) starts at `Σ_{j<k} count(j, v) = C(k + v - 1, v)` and has
//!   length `count(k, v)`.
//!
//! The block offset depends only on `k` and `v`, not on `D`, which is why the
//! same block offset addresses matching entries in two consecutive levels.

use std::ops::Range;

/// Binomial coefficient `C(n, k)`, zero for `k > n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Exact at every step: the running value is C(n - k + i + 1, i + 1).
    (0..k).fold(1, |acc, i| acc * (n - k + i + 1) / (i + 1))
}

/// Number of multi-indices of total degree `degree` in `vars` variables.
pub fn count_multi_indices(degree: usize, vars: usize) -> usize {
    match vars {
        0 => usize::from(degree == 0),
        _ => binomial(degree + vars - 1, vars - 1),
    }
}

/// Contiguous range of a flat level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: usize,
    pub len: usize,
}

impl Window {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Window shifted by `base`.
    pub fn shifted(&self, base: usize) -> Window {
        Window {
            offset: base + self.offset,
            len: self.len,
        }
    }
}

/// Entries of a degree-`degree` level whose first `axis` exponents vanish.
pub fn tail_window(degree: usize, axis: usize, dim: usize) -> Window {
    debug_assert!(axis < dim);
    let len = count_multi_indices(degree, dim - axis);
    Window {
        offset: count_multi_indices(degree, dim) - len,
        len,
    }
}

/// Block of a tail (see [`tail_window`]) whose axes after `axis` carry degree `k`.
///
/// Relative to the start of the tail; valid for `axis <= dim - 2`.
pub fn block_window(k: usize, axis: usize, dim: usize) -> Window {
    debug_assert!(axis + 2 <= dim);
    let vars = dim - axis - 1;
    Window {
        offset: binomial(k + vars - 1, vars),
        len: count_multi_indices(k, vars),
    }
}

/// Multi-indices of total degree `degree` in `dim` variables, in level order.
pub fn multi_indices(degree: usize, dim: usize) -> Vec<Vec<usize>> {
    match dim {
        0 => {
            if degree == 0 {
                vec![Vec::new()]
            } else {
                Vec::new()
            }
        }
        1 => vec![vec![degree]],
        _ => (0..=degree)
            .rev()
            .flat_map(|first| {
                multi_indices(degree - first, dim - 1)
                    .into_iter()
                    .map(move |mut rest| {
                        rest.insert(0, first);
                        rest
                    })
            })
            .collect(),
    }
}
