//! SA execution loop.

use super::config::SaConfig;
use super::schedule::TemperatureSchedule;
use crate::error::SearchError;
use crate::node::SearchNode;
use crate::random::{create_rng, RandomSource};
use crate::termination::Termination;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<N> {
    /// The current node when the run stopped.
    pub node: N,

    /// Value of `node`.
    pub value: f64,

    /// The best node visited.
    pub best: N,

    /// Value of `best`.
    pub best_value: f64,

    /// Total number of iterations (neighbour proposals).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Temperature of the last iteration that ran, `None` if none did.
    pub final_temperature: Option<f64>,

    /// Why the run stopped.
    pub termination: Termination,
}

/// Executes the Simulated Annealing algorithm.
///
/// The objective is maximised: a neighbour with a higher value is always
/// accepted, a worse one with probability `exp(delta / T)`.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::node::{LineNode, LineSpace, SearchNode};
    /// use u_localsearch::sa::{CoolingSchedule, SaConfig, SaRunner};
    ///
    /// let space = LineSpace::new([-1, 1])
    ///     .with_bounds(0, 10)
    ///     .with_scorer(|&x: &i64| -((x - 7) * (x - 7)) as f64);
    /// let schedule = CoolingSchedule::Geometric { initial: 10.0, alpha: 0.95 };
    /// let config = SaConfig::default().with_max_iterations(500).with_seed(42);
    ///
    /// let result = SaRunner::run(LineNode::root(0, space), &schedule, &config).unwrap();
    /// assert_eq!(*result.best.state(), 7);
    /// ```
    pub fn run<N, S>(initial: N, schedule: &S, config: &SaConfig) -> Result<SaResult<N>, SearchError>
    where
        N: SearchNode + Clone,
        S: TemperatureSchedule + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(initial, schedule, config.max_iterations, &mut rng)
    }

    /// Runs SA for at most `max_iterations` iterations drawing from `rng`.
    ///
    /// Stops early when the current node has no neighbours.
    pub fn run_with_rng<N, S, R>(
        initial: N,
        schedule: &S,
        max_iterations: usize,
        rng: &mut R,
    ) -> Result<SaResult<N>, SearchError>
    where
        N: SearchNode + Clone,
        S: TemperatureSchedule + ?Sized,
        R: RandomSource + ?Sized,
    {
        initial.validate()?;
        schedule.validate()?;

        let mut current = initial;
        let mut current_value = current.try_value()?;
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut final_temperature = None;
        let mut termination = Termination::Budget;

        for t in 0..max_iterations {
            let temperature = schedule.temperature(t);

            let mut candidates = current.expand();
            if candidates.is_empty() {
                termination = Termination::Exhausted;
                break;
            }

            let next = candidates.swap_remove(rng.choose_index(candidates.len()));
            let next_value = next.try_value()?;
            let delta = next_value - current_value;

            // Metropolis acceptance criterion
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (delta / temperature).exp();
                rng.uniform() < probability
            };

            if accept {
                log::trace!("sa iteration {t}: T={temperature:.4}, {current_value} -> {next_value}");
                current = next;
                current_value = next_value;
                accepted_moves += 1;

                if current_value > best_value {
                    best = current.clone();
                    best_value = current_value;
                }
            }

            iterations += 1;
            final_temperature = Some(temperature);
        }

        log::debug!(
            "sa stopped ({termination:?}) after {iterations} iterations: \
             accepted={accepted_moves}, improving={improving_moves}, best={best_value}"
        );

        Ok(SaResult {
            node: current,
            value: current_value,
            best,
            best_value,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature,
            termination,
        })
    }
}
