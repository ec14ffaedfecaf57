//! Quadrature rules shared by the integration tests.
#![allow(dead_code)]

use ndarray::{Array, ArrayD, IxDyn};

/// Gauss-Legendre nodes and weights on `[0, 1]`.
///
/// Nodes come from Newton iteration on the Legendre three-term recurrence.
pub fn gauss_legendre_unit(m: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = Vec::with_capacity(m);
    let mut weights = Vec::with_capacity(m);

    for i in 0..m {
        let mut x = (std::f64::consts::PI * (i as f64 + 0.75) / (m as f64 + 0.5)).cos();
        for _ in 0..100 {
            let (p, d) = legendre_and_derivative(m, x);
            let dx = p / d;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }
        let (_, d) = legendre_and_derivative(m, x);
        nodes.push(0.5 * (1.0 + x));
        weights.push(1.0 / ((1.0 - x * x) * d * d));
    }

    (nodes, weights)
}

fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let (mut p_prev, mut p) = (1.0, x);
    for k in 1..n {
        let k = k as f64;
        let next = ((2.0 * k + 1.0) * x * p - k * p_prev) / (k + 1.0);
        p_prev = p;
        p = next;
    }
    let d = n as f64 * (x * p - p_prev) / (x * x - 1.0);
    (p, d)
}

/// Collapsed (Duffy) Gauss rule on the reference triangle
/// `{x, y >= 0, x + y <= 1}`, returned as stacked barycentric coordinates
/// `[3, m*m]` with `u = x`, `v = y`, `w = 1 - x - y`. Weights sum to the area 1/2.
pub fn triangle_rule(m: usize) -> (ArrayD<f64>, Vec<f64>) {
    let (nodes, weights) = gauss_legendre_unit(m);
    let mut u = Vec::with_capacity(m * m);
    let mut v = Vec::with_capacity(m * m);
    let mut w = Vec::with_capacity(m * m);
    let mut quad = Vec::with_capacity(m * m);

    for (&s, &ws) in nodes.iter().zip(&weights) {
        for (&t, &wt) in nodes.iter().zip(&weights) {
            let x = s;
            let y = (1.0 - s) * t;
            u.push(x);
            v.push(y);
            w.push(1.0 - x - y);
            quad.push(ws * wt * (1.0 - s));
        }
    }

    let mut data = u;
    data.extend(v);
    data.extend(w);
    let bary = Array::from_shape_vec(IxDyn(&[3, m * m]), data).unwrap();
    (bary, quad)
}

/// Tensor trapezoid rule on `[-L, L]^d` with the Gaussian weight folded into
/// the weights: `exp(-|x|²)` (physicists) or `exp(-|x|²/2)` (probabilists).
///
/// Returns stacked coordinates `[d, k^d]` and the weights.
pub fn gaussian_grid(dim: usize, half_width: f64, h: f64, physicists: bool) -> (ArrayD<f64>, Vec<f64>) {
    let k = (2.0 * half_width / h).round() as usize + 1;
    let line: Vec<f64> = (0..k).map(|i| -half_width + i as f64 * h).collect();
    let n_points = k.pow(dim as u32);

    let mut coords = vec![0.0; dim * n_points];
    let mut weights = Vec::with_capacity(n_points);
    for p in 0..n_points {
        let mut rest = p;
        let mut r2 = 0.0;
        for axis in (0..dim).rev() {
            let x = line[rest % k];
            rest /= k;
            coords[axis * n_points + p] = x;
            r2 += x * x;
        }
        let density = if physicists { (-r2).exp() } else { (-r2 / 2.0).exp() };
        weights.push(h.powi(dim as i32) * density);
    }

    let stacked = Array::from_shape_vec(IxDyn(&[dim, n_points]), coords).unwrap();
    (stacked, weights)
}
