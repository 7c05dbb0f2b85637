// src/boundary.rs
//! Boundary vectors for a finite-difference grid
//!
//! # Layout
//!
//! The solver owns the grid. It hands over its asset nodes `S_0..S_M` and time
//! nodes `t_0..t_N`, and gets back the three edges of the value surface:
//! ```text
//! lower[j]    = payoff(0, t_j)
//! upper[j]    = payoff(L, t_j)
//! terminal[i] = payoff(S_i, T)
//! ```
//! The endpoints of `terminal` follow the payoff's own priority order, so a
//! node sitting exactly on `S = 0` or `S = L` carries the asset-boundary value.
//!
//! # Parallelism
//!
//! Grids with at least [`PARALLEL_THRESHOLD`] nodes are evaluated through
//! Rayon. Every node is independent, so the result is identical to the serial
//! evaluation.

use crate::options::BoundaryPayoff;
use ndarray::{Array1, ArrayView1, Zip};
use tracing::debug;

/// Node count from which bulk evaluation switches to the Rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

fn evaluate_nodes<F>(nodes: ArrayView1<f64>, f: F) -> Array1<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if nodes.len() >= PARALLEL_THRESHOLD {
        debug!(
            nodes = nodes.len(),
            threads = rayon::current_num_threads(),
            "evaluating boundary nodes in parallel"
        );
        Zip::from(nodes).par_map_collect(|&x| f(x))
    } else {
        nodes.mapv(f)
    }
}

/// `payoff(0, t_j)` for every time node
pub fn lower_boundary<P>(option: &P, times: ArrayView1<f64>) -> Array1<f64>
where
    P: BoundaryPayoff + ?Sized,
{
    evaluate_nodes(times, |t| option.payoff(0.0, t))
}

/// `payoff(L, t_j)` for every time node
pub fn upper_boundary<P>(option: &P, times: ArrayView1<f64>) -> Array1<f64>
where
    P: BoundaryPayoff + ?Sized,
{
    let l = option.params().truncation();
    evaluate_nodes(times, |t| option.payoff(l, t))
}

/// `payoff(S_i, T)` for every asset node
pub fn terminal_condition<P>(option: &P, spots: ArrayView1<f64>) -> Array1<f64>
where
    P: BoundaryPayoff + ?Sized,
{
    let maturity = option.params().maturity();
    evaluate_nodes(spots, |s| option.payoff(s, maturity))
}

/// All three edges of the value surface for one contract
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryConditions {
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
    pub terminal: Array1<f64>,
}

impl BoundaryConditions {
    pub fn evaluate<P>(option: &P, spots: ArrayView1<f64>, times: ArrayView1<f64>) -> Self
    where
        P: BoundaryPayoff + ?Sized,
    {
        debug!(
            asset_nodes = spots.len(),
            time_nodes = times.len(),
            "evaluating boundary conditions"
        );
        BoundaryConditions {
            lower: lower_boundary(option, times),
            upper: upper_boundary(option, times),
            terminal: terminal_condition(option, spots),
        }
    }
}
