//! Simulated Annealing (SA) over search nodes.
//!
//! Walks a [`SearchNode`](crate::node::SearchNode) tree by proposing one
//! random child of the current node per iteration. Children with a higher
//! value replace the current node outright; lower-valued ones replace it
//! with probability `exp(delta / T)`, where `T` comes from a caller-supplied
//! [`TemperatureSchedule`] indexed by iteration. The run ends when the
//! iteration budget is spent or the current node has no children.
//!
//! Cooling follows Kirkpatrick, Gelatt & Vecchi (1983); the Lundy-Mees
//! schedule is from Lundy & Mees (1986).

mod config;
mod runner;
mod schedule;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use schedule::{CoolingSchedule, TemperatureSchedule};
