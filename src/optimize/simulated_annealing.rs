//! Simulated annealing with restarts.
//!
//! Each restart hill-climbs independently from a fresh initial solution
//! while the temperature decays geometrically; the globally best solution
//! seen across all restarts is returned. The temperature schedule and
//! acceptance probability follow the defaults used by MATLAB's
//! `simulannealbnd` (<https://www.mathworks.com/help/gads/how-simulated-annealing-works.html>).

use log::{debug, trace};
use rand::{Rng, RngCore};

use crate::error::{PeakFitError, Result};
use crate::optimize::AnnealingProblem;

/// Simulated annealing optimizer.
///
/// Generic over an [`AnnealingProblem`]; the optimizer only owns the cooling
/// schedule. Total work is exactly `num_iterations * steps` neighbour
/// evaluations plus `num_iterations` initial evaluations — there is no
/// convergence shortcut, so runs must be bounded by the caller's choice of
/// counts.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealer {
    /// Temperature at the first inner step of every restart.
    pub initial_temp: f64,

    /// Geometric decay factor applied per inner step.
    pub cooling_rate: f64,
}

impl Default for SimulatedAnnealer {
    fn default() -> Self {
        Self {
            initial_temp: 273.15,
            cooling_rate: 0.999,
        }
    }
}

impl SimulatedAnnealer {
    /// Create an annealer with the reference schedule
    /// (`T0 = 273.15`, cooling rate `0.999`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annealer with a custom schedule.
    pub fn with_schedule(initial_temp: f64, cooling_rate: f64) -> Self {
        Self {
            initial_temp,
            cooling_rate,
        }
    }

    /// Run the optimization and return the best solution found.
    ///
    /// # Arguments
    ///
    /// * `problem` - The problem to solve
    /// * `num_iterations` - Number of independent restarts
    /// * `steps` - Inner hill-climbing steps per restart
    /// * `rng` - Random source for initial draws, neighbours and acceptance
    ///
    /// # Errors
    ///
    /// [`PeakFitError::InvalidArgument`] if either count is zero.
    pub fn run<P: AnnealingProblem>(
        &self,
        problem: &P,
        num_iterations: usize,
        steps: usize,
        rng: &mut dyn RngCore,
    ) -> Result<P::Solution> {
        if num_iterations == 0 {
            return Err(PeakFitError::InvalidArgument(
                "num_iterations must be positive".to_string(),
            ));
        }
        if steps == 0 {
            return Err(PeakFitError::InvalidArgument(
                "steps must be positive".to_string(),
            ));
        }

        debug!(
            "simulated annealing: {} restarts of {} steps, T0 = {}, cooling rate = {}",
            num_iterations, steps, self.initial_temp, self.cooling_rate
        );

        let mut incumbent: Option<P::Solution> = None;
        let mut incumbent_energy = f64::INFINITY;

        for restart in 0..num_iterations {
            let mut current = problem.initial_solution(rng);
            let mut current_energy = problem.energy(&current);

            // the incumbent is never discarded when a restart ends, and the
            // restart's own starting draw competes for it too
            if current_energy < incumbent_energy {
                trace!(
                    "restart {}: initial solution improves incumbent, energy {}",
                    restart + 1,
                    current_energy
                );
                incumbent = Some(current.clone());
                incumbent_energy = current_energy;
            }

            for step in 0..steps {
                let temperature = self.temperature(step);

                let candidate = problem.random_neighbour(&current, rng);
                let candidate_energy = problem.energy(&candidate);

                if Self::acceptance(current_energy, candidate_energy, temperature)
                    >= rng.gen::<f64>()
                {
                    current = candidate;
                    current_energy = candidate_energy;

                    if current_energy < incumbent_energy {
                        trace!(
                            "restart {} step {}: new incumbent, energy {}",
                            restart + 1,
                            step + 1,
                            current_energy
                        );
                        incumbent = Some(current.clone());
                        incumbent_energy = current_energy;
                    }
                }
            }
        }

        debug!("simulated annealing finished, best energy {}", incumbent_energy);

        incumbent.ok_or_else(|| {
            PeakFitError::Other("simulated annealing failed to find a solution".to_string())
        })
    }

    /// Temperature at inner step `l`: `T0 * rate^l`.
    fn temperature(&self, step: usize) -> f64 {
        self.initial_temp * self.cooling_rate.powi(step as i32)
    }

    /// Probability of jumping from energy `e` to `ep` at temperature `t`.
    ///
    /// A strict improvement is always taken; a worsening move is taken with
    /// probability `1 / (1 + exp((ep - e) / t))`, which lies in `(0, 1/2]`
    /// and vanishes as the temperature cools.
    fn acceptance(e: f64, ep: f64, t: f64) -> f64 {
        if ep < e {
            return 1.0;
        }
        1.0 / (1.0 + ((ep - e) / t).exp())
    }
}
