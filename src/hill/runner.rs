//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Score the initial node
//! 2. At each iteration:
//!    a. Expand the current node; stop if it has no neighbours
//!    b. Pick the best-valued neighbour (first one on ties)
//!    c. Move there if it is strictly better, otherwise stop
//!
//! The objective is maximised.

use super::config::HillClimbConfig;
use crate::error::SearchError;
use crate::node::SearchNode;
use crate::termination::Termination;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult<N> {
    /// The node the climb stopped at.
    pub node: N,

    /// Value of `node`.
    pub value: f64,

    /// Number of accepted moves.
    pub iterations: usize,

    /// Why the climb stopped.
    pub termination: Termination,
}

/// Executes steepest-ascent hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Climbs from `initial` until no neighbour improves on the current node.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hill::HillClimbRunner;
    /// use u_localsearch::node::{LineNode, LineSpace, SearchNode};
    ///
    /// let space = LineSpace::new([-1, 1])
    ///     .with_bounds(0, 10)
    ///     .with_scorer(|&x: &i64| -((x - 7) * (x - 7)) as f64);
    ///
    /// let result = HillClimbRunner::run(LineNode::root(5, space)).unwrap();
    /// assert_eq!(*result.node.state(), 7);
    /// ```
    pub fn run<N: SearchNode>(initial: N) -> Result<HillClimbResult<N>, SearchError> {
        Self::run_with_config(initial, &HillClimbConfig::default())
    }

    /// Climbs from `initial`, stopping early once `config.max_iterations`
    /// moves have been accepted.
    pub fn run_with_config<N: SearchNode>(
        initial: N,
        config: &HillClimbConfig,
    ) -> Result<HillClimbResult<N>, SearchError> {
        initial.validate()?;

        let mut current = initial;
        let mut best_value = current.try_value()?;
        let mut iterations = 0usize;

        let termination = loop {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break Termination::Budget;
            }

            let mut candidates = current.expand();

            // Stable argmax: a later candidate must be strictly better to win.
            let mut best: Option<(usize, f64)> = None;
            for (index, candidate) in candidates.iter().enumerate() {
                let value = candidate.try_value()?;
                if best.is_none_or(|(_, incumbent)| value > incumbent) {
                    best = Some((index, value));
                }
            }

            let Some((index, value)) = best else {
                break Termination::Exhausted;
            };

            if value > best_value {
                log::trace!("hill climbing step {iterations}: {best_value} -> {value}");
                current = candidates.swap_remove(index);
                best_value = value;
                iterations += 1;
            } else {
                break Termination::LocalOptimum;
            }
        };

        log::debug!(
            "hill climbing stopped ({termination:?}) after {iterations} moves at value {best_value}"
        );

        Ok(HillClimbResult {
            node: current,
            value: best_value,
            iterations,
            termination,
        })
    }
}
