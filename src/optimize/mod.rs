//! Stochastic optimization of model parameters.
//!
//! The optimizer is generic over a caller-defined [`AnnealingProblem`]: the
//! problem owns the solution representation, the energy function and the
//! neighbourhood move, while the optimizer owns the cooling schedule and the
//! acceptance rule. Random sources are passed in explicitly so that runs are
//! reproducible and parallel runs can use independent streams.

use ndarray::Array1;
use rand::{Rng, RngCore};

mod simulated_annealing;

pub use simulated_annealing::SimulatedAnnealer;

/// A problem solvable by simulated annealing.
///
/// The optimizer imposes no invariants on the solution type; ordering is
/// defined entirely by [`AnnealingProblem::energy`] (lower is better).
pub trait AnnealingProblem {
    /// The problem-defined solution representation.
    type Solution: Clone;

    /// Draw a fresh starting solution. Called once per restart.
    fn initial_solution(&self, rng: &mut dyn RngCore) -> Self::Solution;

    /// The quantity being minimized.
    fn energy(&self, solution: &Self::Solution) -> f64;

    /// Draw a random solution adjacent to `solution`.
    fn random_neighbour(&self, solution: &Self::Solution, rng: &mut dyn RngCore)
        -> Self::Solution;
}

/// Generate a random point within the given bounds.
///
/// Useful for building [`AnnealingProblem::initial_solution`] over a box
/// constraint; infinite bounds fall back to a window of width 10 next to the
/// finite one (or around the origin when both are infinite).
pub fn random_point(bounds: &[(f64, f64)], rng: &mut dyn RngCore) -> Array1<f64> {
    let point: Vec<f64> = bounds
        .iter()
        .map(|(min, max)| {
            if min.is_finite() && max.is_finite() {
                rng.gen_range(*min..*max)
            } else if min.is_finite() {
                min + rng.gen::<f64>() * 10.0
            } else if max.is_finite() {
                max - rng.gen::<f64>() * 10.0
            } else {
                rng.gen_range(-10.0..10.0)
            }
        })
        .collect();

    Array1::from_vec(point)
}

/// Clip a point to the given bounds, leaving coordinates beyond the bounds
/// slice untouched.
pub fn clip_to_bounds(point: &Array1<f64>, bounds: &[(f64, f64)]) -> Array1<f64> {
    let mut clipped = point.clone();

    for (i, (min, max)) in bounds.iter().enumerate() {
        if i < clipped.len() {
            if min.is_finite() && clipped[i] < *min {
                clipped[i] = *min;
            }
            if max.is_finite() && clipped[i] > *max {
                clipped[i] = *max;
            }
        }
    }

    clipped
}
