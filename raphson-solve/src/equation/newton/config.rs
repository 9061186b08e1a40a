use thiserror::Error;

/// Configuration for the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("max_iters must be positive")]
    MaxIters,
}

impl Config {
    pub const DEFAULT_TOL: f64 = 1e-6;
    pub const DEFAULT_MAX_ITERS: usize = 20;

    /// Creates a new config with a validated tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { tol, max_iters })
    }

    /// Returns the convergence threshold on successive estimates.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: Self::DEFAULT_TOL,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

/// Unvalidated config fields, with defaults for anything missing.
#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawConfig {
    tol: f64,
    max_iters: usize,
}

#[cfg(feature = "serde-derive")]
impl Default for RawConfig {
    fn default() -> Self {
        Self {
            tol: Config::DEFAULT_TOL,
            max_iters: Config::DEFAULT_MAX_ITERS,
        }
    }
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.tol, raw.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_relative_eq!(config.tol(), 1e-6);
        assert_eq!(config.max_iters(), 20);
        assert_eq!(Config::new(1e-6, 20), Ok(config));
    }

    #[test]
    fn rejects_bad_tolerances() {
        for tol in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(tol, 20), Err(ConfigError::Tol), "tol = {tol}");
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::MaxIters));
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn deserializes_with_validation() {
        let config: Config = serde_json::from_str(r#"{"tol": 1e-8}"#)
            .expect("missing fields use defaults");
        assert_eq!(config, Config::new(1e-8, 20).expect("valid"));

        let err = serde_json::from_str::<Config>(r#"{"tol": -1.0, "max_iters": 5}"#);
        assert!(err.is_err());

        let json = serde_json::to_string(&Config::default()).expect("serializable");
        let restored: Config = serde_json::from_str(&json).expect("valid");
        assert_eq!(restored, Config::default());
    }
}
