//! SA configuration.

/// Configuration for the Simulated Annealing runner.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_iterations(5_000)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 5_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Number of iterations (one neighbour proposal each).
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
