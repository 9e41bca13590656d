//! Hill climbing configuration.

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::HillClimbConfig;
///
/// let config = HillClimbConfig::default().with_max_iterations(1000);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Maximum number of accepted moves. 0 = no limit.
    ///
    /// Bounded neighbourhoods always reach a local optimum; the limit is
    /// for unbounded spaces whose objective keeps improving.
    pub max_iterations: usize,
}

impl HillClimbConfig {
    /// Sets the maximum number of accepted moves.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}
