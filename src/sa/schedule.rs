//! Temperature schedules.

use crate::error::SearchError;

/// Maps an iteration index to a temperature.
///
/// Implemented for any `Fn(usize) -> f64` and for [`CoolingSchedule`].
/// Temperatures should stay positive; a zero or negative temperature is
/// not rejected by the runner and follows IEEE-754 arithmetic in the
/// acceptance test.
pub trait TemperatureSchedule {
    /// Temperature at iteration `iteration` (0-based).
    fn temperature(&self, iteration: usize) -> f64;

    /// Checks the schedule parameters before a run.
    fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }
}

impl<F> TemperatureSchedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, iteration: usize) -> f64 {
        self(iteration)
    }
}

/// Closed-form cooling schedules.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
/// - Logarithmic: Geman & Geman (1984)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_t = T_0 * alpha^t`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Starting temperature.
        initial: f64,
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_t = T_0 - t * (T_0 - T_min) / steps`, floored at `T_min`.
    Linear {
        /// Starting temperature.
        initial: f64,
        /// Temperature reached after `steps` iterations.
        min: f64,
        /// Number of iterations to go from `initial` to `min`.
        steps: usize,
    },

    /// Lundy-Mees cooling: `T_{t+1} = T_t / (1 + beta * T_t)`, in closed
    /// form `T_t = T_0 / (1 + beta * t * T_0)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Starting temperature.
        initial: f64,
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },

    /// Logarithmic cooling: `T_t = T_0 / ln(t + e)`.
    ///
    /// Very slow; mostly of theoretical interest.
    Logarithmic {
        /// Starting temperature.
        initial: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric {
            initial: 100.0,
            alpha: 0.95,
        }
    }
}

impl CoolingSchedule {
    /// Temperature at iteration 0.
    pub fn initial_temperature(&self) -> f64 {
        match *self {
            CoolingSchedule::Geometric { initial, .. }
            | CoolingSchedule::Linear { initial, .. }
            | CoolingSchedule::LundyMees { initial, .. }
            | CoolingSchedule::Logarithmic { initial } => initial,
        }
    }
}

impl TemperatureSchedule for CoolingSchedule {
    fn temperature(&self, iteration: usize) -> f64 {
        let t = iteration as f64;
        match *self {
            CoolingSchedule::Geometric { initial, alpha } => initial * alpha.powf(t),

            CoolingSchedule::Linear {
                initial,
                min,
                steps,
            } => {
                if steps == 0 {
                    min
                } else {
                    (initial - t * (initial - min) / steps as f64).max(min)
                }
            }

            CoolingSchedule::LundyMees { initial, beta } => initial / (1.0 + beta * t * initial),

            CoolingSchedule::Logarithmic { initial } => initial / (t + std::f64::consts::E).ln(),
        }
    }

    fn validate(&self) -> Result<(), SearchError> {
        let initial = self.initial_temperature();
        if !(initial > 0.0) {
            return Err(SearchError::InvalidConfig(format!(
                "initial temperature must be positive, got {initial}"
            )));
        }
        match *self {
            CoolingSchedule::Geometric { alpha, .. } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(SearchError::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::Linear { min, .. } => {
                if !(min > 0.0 && min < initial) {
                    return Err(SearchError::InvalidConfig(format!(
                        "linear min temperature must be in (0, {initial}), got {min}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta, .. } => {
                if !(beta > 0.0) {
                    return Err(SearchError::InvalidConfig(format!(
                        "lundy-mees beta must be positive, got {beta}"
                    )));
                }
            }
            CoolingSchedule::Logarithmic { .. } => {}
        }
        Ok(())
    }
}
