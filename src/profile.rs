//! Sampled objective profiles.
//!
//! Evaluates a one-dimensional objective on an evenly spaced grid so the
//! series can be handed to any charting library. Nothing in the search
//! runners depends on this module.

use crate::error::SearchError;

/// Number of samples used by [`ObjectiveProfile::sample`].
pub const DEFAULT_POINTS: usize = 100;

/// `(x, f(x))` pairs over an inclusive range.
///
/// # Examples
///
/// ```
/// use u_localsearch::profile::ObjectiveProfile;
///
/// let profile = ObjectiveProfile::sample_with(|x| -(x - 1.0) * (x - 1.0), -1.0, 3.0, 5).unwrap();
/// assert_eq!(profile.xs(), vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(profile.argmax(), Some((1.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveProfile {
    /// Samples in increasing `x` order.
    pub points: Vec<(f64, f64)>,
}

impl ObjectiveProfile {
    /// Samples `f` at [`DEFAULT_POINTS`] points spanning `min_x..=max_x`.
    pub fn sample<F>(f: F, min_x: f64, max_x: f64) -> Result<Self, SearchError>
    where
        F: Fn(f64) -> f64,
    {
        Self::sample_with(f, min_x, max_x, DEFAULT_POINTS)
    }

    /// Samples `f` at `points` evenly spaced points spanning `min_x..=max_x`.
    pub fn sample_with<F>(f: F, min_x: f64, max_x: f64, points: usize) -> Result<Self, SearchError>
    where
        F: Fn(f64) -> f64,
    {
        if points < 2 {
            return Err(SearchError::InvalidConfig(format!(
                "a profile needs at least 2 points, got {points}"
            )));
        }
        if !(min_x <= max_x) || !min_x.is_finite() || !max_x.is_finite() {
            return Err(SearchError::InvalidConfig(format!(
                "profile range must be finite with min <= max, got [{min_x}, {max_x}]"
            )));
        }

        let step = (max_x - min_x) / (points - 1) as f64;
        let points = (0..points)
            .map(|i| {
                // Pin the last abscissa to max_x instead of accumulating error.
                let x = if i == points - 1 {
                    max_x
                } else {
                    min_x + i as f64 * step
                };
                (x, f(x))
            })
            .collect();

        Ok(Self { points })
    }

    /// The sampled abscissae.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// The sampled values.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }

    /// Smallest sampled value, ignoring NaN.
    pub fn min_y(&self) -> Option<f64> {
        self.ys().into_iter().filter(|y| !y.is_nan()).reduce(f64::min)
    }

    /// Largest sampled value, ignoring NaN.
    pub fn max_y(&self) -> Option<f64> {
        self.ys().into_iter().filter(|y| !y.is_nan()).reduce(f64::max)
    }

    /// First sample with the largest value.
    pub fn argmax(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|(_, y)| !y.is_nan())
            .fold(None, |best, (x, y)| match best {
                Some((_, b)) if b >= y => best,
                _ => Some((x, y)),
            })
    }

    /// Value range widened to include 0, for plots with axes through the origin.
    pub fn y_span_with_origin(&self) -> Option<(f64, f64)> {
        Some((self.min_y()?.min(0.0), self.max_y()?.max(0.0)))
    }
}
