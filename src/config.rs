use crate::{Error, Result};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Knobs shared by both estimators.
#[derive(Debug, Clone)]
pub struct Config {
    /// Probability that the surfer follows a link instead of jumping to a
    /// uniformly random page.
    pub damping: f64,
    /// Number of random-walk steps taken by the sampling estimator.
    pub sample_count: usize,
    /// Seed for the sampling estimator. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Rounds after which the iterative estimator gives up.
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidConfig(format!(
                "damping={} is outside [0, 1]",
                self.damping
            )));
        }
        if self.sample_count == 0 {
            return Err(Error::InvalidConfig(
                "sample_count must be positive".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.sample_count, 10_000);
    }

    #[test]
    fn rejects_damping_out_of_range() {
        for damping in [-0.1, 1.5, f64::NAN] {
            let cfg = Config {
                damping,
                ..Config::default()
            };
            assert!(
                matches!(cfg.validate(), Err(Error::InvalidConfig(_))),
                "damping={damping}"
            );
        }
    }

    #[test]
    fn rejects_zero_samples() {
        let cfg = Config {
            sample_count: 0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_iterations() {
        let cfg = Config {
            max_iterations: 0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }
}
