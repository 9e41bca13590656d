//! Local search over discrete state spaces.
//!
//! Provides two classical single-solution algorithms driven by a generic
//! search-tree node:
//!
//! - **Hill Climbing**: greedy ascent to the best strictly improving
//!   neighbour until a local maximum is reached.
//! - **Simulated Annealing (SA)**: random neighbour proposals with
//!   Metropolis acceptance under a pluggable temperature schedule.
//!
//! # Architecture
//!
//! The runners only see the [`node::SearchNode`] trait: a state, a parent
//! link, neighbour expansion and an objective value. [`node::Node`] wires
//! that trait to a shared, immutable [`node::Neighborhood`], of which two
//! ship with the crate ([`node::LineSpace`] and [`node::GridSpace`]).
//! Both algorithms maximise the objective.
//!
//! ```
//! use u_localsearch::hill::HillClimbRunner;
//! use u_localsearch::node::{GridNode, GridSpace, SearchNode};
//!
//! let space = GridSpace::new().with_scorer(|&[x, y]: &[i64; 2]| -((x * x + y * y) as f64));
//! let result = HillClimbRunner::run(GridNode::root([3, 3], space)).unwrap();
//! assert_eq!(*result.node.state(), [0, 0]);
//! ```

pub mod error;
pub mod hill;
pub mod node;
pub mod profile;
pub mod random;
pub mod sa;
pub mod termination;

pub use error::SearchError;
pub use termination::Termination;
