//! Two-dimensional grid neighbourhood.

use std::fmt;
use std::sync::Arc;

use super::{Neighborhood, Node, Scorer};

/// A node on the integer grid. See [`GridSpace`].
pub type GridNode = Node<GridSpace>;

/// Unit moves on an unbounded integer grid.
///
/// Every state has exactly four neighbours, generated in the order
/// `(x+1, y)`, `(x-1, y)`, `(x, y+1)`, `(x, y-1)`. Coordinates saturate at
/// the `i64` limits, so a move off the edge of the representable grid
/// yields the state itself.
#[derive(Default)]
pub struct GridSpace {
    scorer: Option<Scorer<[i64; 2]>>,
}

impl GridSpace {
    /// Creates a grid with no objective.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the objective maximised by the runners.
    pub fn with_scorer(
        mut self,
        scorer: impl Fn(&[i64; 2]) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.scorer = Some(Arc::new(scorer));
        self
    }
}

impl Neighborhood for GridSpace {
    type State = [i64; 2];

    fn neighbors(&self, &[x, y]: &[i64; 2]) -> Vec<[i64; 2]> {
        vec![
            [x.saturating_add(1), y],
            [x.saturating_sub(1), y],
            [x, y.saturating_add(1)],
            [x, y.saturating_sub(1)],
        ]
    }

    fn score(&self, state: &[i64; 2]) -> Option<f64> {
        self.scorer.as_ref().map(|f| f(state))
    }
}

impl fmt::Debug for GridSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSpace")
            .field("scored", &self.scorer.is_some())
            .finish()
    }
}
