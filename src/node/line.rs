//! One-dimensional neighbourhood with a bounded action set.

use std::fmt;
use std::sync::Arc;

use super::{Neighborhood, Node, Scorer};
use crate::error::SearchError;

/// A node moving along a line. See [`LineSpace`].
pub type LineNode<T> = Node<LineSpace<T>>;

/// Scalar states that can be moved by a delta.
///
/// Integers return `None` when the move overflows; floats always move.
pub trait Step: Sized {
    /// `self + delta`, or `None` if it is not representable.
    fn step(self, delta: Self) -> Option<Self>;
}

macro_rules! impl_step_checked {
    ($($t:ty),*) => {
        $(impl Step for $t {
            fn step(self, delta: Self) -> Option<Self> {
                self.checked_add(delta)
            }
        })*
    };
}

macro_rules! impl_step_float {
    ($($t:ty),*) => {
        $(impl Step for $t {
            fn step(self, delta: Self) -> Option<Self> {
                Some(self + delta)
            }
        })*
    };
}

impl_step_checked!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_float!(f32, f64);

/// Moves a scalar state by each delta of a fixed action set.
///
/// A candidate `state + delta` is kept when no bounds are set or when it lies
/// within the inclusive `(lower, upper)` pair. A move that overflows the
/// state type is dropped like an out-of-bounds one. Candidates keep the
/// order of the action set.
///
/// # Examples
///
/// ```
/// use u_localsearch::node::{LineNode, LineSpace, SearchNode};
///
/// let space = LineSpace::new([-1, 1])
///     .with_bounds(0, 10)
///     .with_scorer(|&x: &i64| -((x - 7) * (x - 7)) as f64);
///
/// let root = LineNode::root(10, space);
/// let states: Vec<i64> = root.expand().iter().map(|n| *n.state()).collect();
/// assert_eq!(states, vec![9]);
/// assert_eq!(root.value(), Some(-9.0));
/// ```
pub struct LineSpace<T> {
    actions: Vec<T>,
    bounds: Option<(T, T)>,
    scorer: Option<Scorer<T>>,
}

impl<T> LineSpace<T> {
    /// Creates an unbounded space with the given deltas and no objective.
    pub fn new(actions: impl IntoIterator<Item = T>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            bounds: None,
            scorer: None,
        }
    }

    /// Restricts states to the inclusive range `lower..=upper`.
    pub fn with_bounds(mut self, lower: T, upper: T) -> Self {
        self.bounds = Some((lower, upper));
        self
    }

    /// Sets the objective maximised by the runners.
    pub fn with_scorer(mut self, scorer: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.scorer = Some(Arc::new(scorer));
        self
    }

    /// The configured deltas, in expansion order.
    pub fn actions(&self) -> &[T] {
        &self.actions
    }

    /// The inclusive bounds, if any.
    pub fn bounds(&self) -> Option<&(T, T)> {
        self.bounds.as_ref()
    }
}

impl<T> Neighborhood for LineSpace<T>
where
    T: Copy + PartialOrd + Step + fmt::Debug + Send + Sync,
{
    type State = T;

    fn neighbors(&self, state: &T) -> Vec<T> {
        self.actions
            .iter()
            .filter_map(|&delta| state.step(delta))
            .filter(|candidate| match self.bounds {
                Some((lower, upper)) => lower <= *candidate && *candidate <= upper,
                None => true,
            })
            .collect()
    }

    fn score(&self, state: &T) -> Option<f64> {
        self.scorer.as_ref().map(|f| f(state))
    }

    fn validate(&self) -> Result<(), SearchError> {
        if let Some((lower, upper)) = self.bounds {
            // Rejects NaN bounds too.
            if !(lower <= upper) {
                return Err(SearchError::InvalidConfig(format!(
                    "line bounds must satisfy lower <= upper, got ({lower:?}, {upper:?})"
                )));
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LineSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSpace")
            .field("actions", &self.actions)
            .field("bounds", &self.bounds)
            .field("scored", &self.scorer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SearchNode;

    fn states(node: &LineNode<i64>) -> Vec<i64> {
        node.expand().iter().map(|n| *n.state()).collect()
    }

    #[test]
    fn test_expand_follows_action_order() {
        let root = LineNode::root(0, LineSpace::new([3, -1, 2]));
        assert_eq!(states(&root), vec![3, -1, 2]);
    }

    #[test]
    fn test_expand_respects_inclusive_bounds() {
        let space = Arc::new(LineSpace::new([-1, 1]).with_bounds(0, 10));

        assert_eq!(states(&LineNode::root_in(0, Arc::clone(&space))), vec![1]);
        assert_eq!(states(&LineNode::root_in(10, Arc::clone(&space))), vec![9]);
        assert_eq!(states(&LineNode::root_in(5, space)), vec![4, 6]);
    }

    #[test]
    fn test_expand_empty_actions() {
        let root = LineNode::root(4, LineSpace::<i64>::new([]));
        assert!(root.expand().is_empty());
    }

    #[test]
    fn test_expand_all_out_of_bounds() {
        let root = LineNode::root(0, LineSpace::new([5, -5]).with_bounds(-1, 1));
        assert!(root.expand().is_empty());
    }

    #[test]
    fn test_value_without_scorer_is_undefined() {
        let root = LineNode::root(2, LineSpace::new([1]));
        assert_eq!(root.value(), None);
    }

    #[test]
    fn test_value_delegates_to_scorer() {
        let root = LineNode::root(3, LineSpace::new([1]).with_scorer(|&x: &i64| (x * x) as f64));
        assert_eq!(root.value(), Some(9.0));
        let children = root.expand();
        assert_eq!(children[0].value(), Some(16.0));
    }

    #[test]
    fn test_float_states() {
        let root = LineNode::root(0.5, LineSpace::new([0.25, -0.25]).with_bounds(0.0, 0.6));
        let got: Vec<f64> = root.expand().iter().map(|n| *n.state()).collect();
        assert_eq!(got, vec![0.25]);
    }

    #[test]
    fn test_expand_drops_overflowing_moves() {
        let space = LineSpace::new([-1i64, 1]).with_bounds(i64::MAX - 10, i64::MAX);
        let root = LineNode::root(i64::MAX, space);
        assert_eq!(states(&root), vec![i64::MAX - 1]);

        let unbounded = LineNode::root(i64::MIN, LineSpace::new([-1i64, 1]));
        assert_eq!(states(&unbounded), vec![i64::MIN + 1]);

        let unsigned = LineNode::root(0u8, LineSpace::new([1u8, 255]));
        let got: Vec<u8> = unsigned.expand().iter().map(|n| *n.state()).collect();
        assert_eq!(got, vec![1, 255]);
        let top = LineNode::root(255u8, LineSpace::new([1u8]));
        assert!(top.expand().is_empty());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        assert!(LineSpace::new([1]).with_bounds(5, 1).validate().is_err());
        assert!(LineSpace::new([1.0]).with_bounds(f64::NAN, 1.0).validate().is_err());
        assert!(LineSpace::new([1]).with_bounds(1, 1).validate().is_ok());
        assert!(LineSpace::<i64>::new([]).validate().is_ok());
    }
}
