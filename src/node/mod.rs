//! Search-tree nodes.
//!
//! A node is a point in the search space plus a link to the node it was
//! expanded from. The runners only talk to the [`SearchNode`] trait; the
//! concrete move relation and objective live in a [`Neighborhood`] that
//! every node of one search tree shares through an [`Arc`].
//!
//! Two neighbourhoods ship with the crate:
//!
//! - [`LineSpace`]: 1-D states, a fixed list of deltas, optional inclusive
//!   bounds.
//! - [`GridSpace`]: 2-D integer states, unit moves along both axes.

mod grid;
mod line;

pub use grid::{GridNode, GridSpace};
pub use line::{LineNode, LineSpace, Step};

use std::fmt;
use std::sync::Arc;

use crate::error::SearchError;

/// Shared objective over states of type `S`.
pub type Scorer<S> = Arc<dyn Fn(&S) -> f64 + Send + Sync>;

/// A node of a search tree.
///
/// Implementors provide the move relation ([`expand`](Self::expand)) and the
/// objective ([`value`](Self::value)); ancestry helpers come for free from
/// [`parent`](Self::parent).
pub trait SearchNode: Sized {
    /// The state wrapped by the node.
    type State;

    /// Returns the wrapped state.
    fn state(&self) -> &Self::State;

    /// Returns the node this one was expanded from, `None` for a root.
    fn parent(&self) -> Option<&Self>;

    /// Generates the neighbours of this node. Each child has `self` as parent.
    ///
    /// An empty vector means the search space is exhausted at this node.
    fn expand(&self) -> Vec<Self>;

    /// Objective value of the node, `None` when undefined.
    fn value(&self) -> Option<f64>;

    /// Objective value, or [`SearchError::Undefined`] when there is none.
    fn try_value(&self) -> Result<f64, SearchError> {
        self.value().ok_or_else(|| SearchError::Undefined {
            depth: self.depth(),
        })
    }

    /// Checks the configuration this node was built from.
    ///
    /// The runners call this once before their first expansion.
    fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }

    /// Iterates from this node up to the root, `self` first.
    fn ancestors(&self) -> Ancestors<'_, Self> {
        Ancestors { next: Some(self) }
    }

    /// Number of parent links between this node and its root.
    fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Nodes from the root to `self` inclusive, oldest first.
    fn path(&self) -> Vec<&Self> {
        let mut path: Vec<&Self> = self.ancestors().collect();
        path.reverse();
        path
    }
}

/// Iterator over a node and its ancestors. See [`SearchNode::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    next: Option<&'a T>,
}

impl<'a, T: SearchNode> Iterator for Ancestors<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// Move relation and objective shared by all nodes of a search tree.
pub trait Neighborhood: Send + Sync {
    /// The state type moved through by this neighbourhood.
    type State: Clone;

    /// States reachable from `state` in one move, in a deterministic order.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Objective value of `state`, `None` when no objective is configured.
    fn score(&self, state: &Self::State) -> Option<f64>;

    /// Checks the neighbourhood configuration before a search starts.
    fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }
}

/// A node whose moves and objective come from a shared [`Neighborhood`].
///
/// The parent link is an [`Arc`], and a child is always created after its
/// parent, so the ancestry chain cannot contain a cycle.
pub struct Node<N: Neighborhood> {
    state: N::State,
    parent: Option<Arc<Node<N>>>,
    depth: usize,
    space: Arc<N>,
}

impl<N: Neighborhood> Node<N> {
    /// Creates a parentless node in `space`.
    pub fn root(state: N::State, space: N) -> Self {
        Self::root_in(state, Arc::new(space))
    }

    /// Creates a parentless node in a space shared with other searches.
    pub fn root_in(state: N::State, space: Arc<N>) -> Self {
        Self {
            state,
            parent: None,
            depth: 0,
            space,
        }
    }

    /// The neighbourhood this node belongs to.
    pub fn space(&self) -> &Arc<N> {
        &self.space
    }
}

impl<N: Neighborhood> SearchNode for Node<N> {
    type State = N::State;

    fn state(&self) -> &N::State {
        &self.state
    }

    fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    fn expand(&self) -> Vec<Self> {
        let states = self.space.neighbors(&self.state);
        if states.is_empty() {
            return Vec::new();
        }

        let parent = Arc::new(self.clone());
        states
            .into_iter()
            .map(|state| Node {
                state,
                parent: Some(Arc::clone(&parent)),
                depth: self.depth + 1,
                space: Arc::clone(&self.space),
            })
            .collect()
    }

    fn value(&self) -> Option<f64> {
        self.space.score(&self.state)
    }

    fn validate(&self) -> Result<(), SearchError> {
        self.space.validate()
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

impl<N: Neighborhood> Clone for Node<N> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            parent: self.parent.clone(),
            depth: self.depth,
            space: Arc::clone(&self.space),
        }
    }
}

// Unlink the ancestry chain iteratively so that dropping the tip of a long
// annealing run does not recurse once per ancestor.
impl<N: Neighborhood> Drop for Node<N> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl<N: Neighborhood> fmt::Debug for Node<N>
where
    N::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<N: Neighborhood> fmt::Display for Node<N>
where
    N::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node: {:?}", self.state)
    }
}
