//! Hill Climbing.
//!
//! Greedy ascent: move to the best neighbour as long as it is strictly
//! better than the current node. Stops at a local maximum of the expansion
//! relation, or at a node without neighbours.

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::{HillClimbResult, HillClimbRunner};
