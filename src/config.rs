use thiserror::Error;

/// Launch-time constants for a simulation run.
///
/// Defaults reproduce the reference run: a 1 m spring with stiffness
/// 60 N/m and a 1 kg bob released from rest 30 degrees off the
/// vertical, integrated at 1 ms steps for 15 s.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Natural (unstretched) spring length.
    pub l0: f64,
    /// Bob mass.
    pub m: f64,
    /// Spring stiffness.
    pub k: f64,
    /// Gravitational acceleration.
    pub g: f64,
    /// Release angle, radians from the downward vertical.
    pub theta0: f64,
    /// Static offset applied once to the initial position.
    pub dx: f64,
    /// Static offset applied once to the initial position.
    pub dy: f64,
    /// Integration timestep, seconds.
    pub dt: f64,
    /// Simulated duration, seconds. Zero is allowed and records only
    /// the initial condition.
    pub total: f64,
    /// Regularization length for the Cartesian force law's direction
    /// division. Zero keeps the raw division, which is NaN with the
    /// bob exactly on the pivot.
    pub softening: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            l0: 1.0,
            m: 1.0,
            k: 60.0,
            g: 9.81,
            theta0: 30f64.to_radians(),
            dx: 0.0,
            dy: 0.0,
            dt: 1e-3,
            total: 15.0,
            softening: 0.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.dt));
        }
        if self.total < 0.0 {
            return Err(ConfigError::NegativeDuration(self.total));
        }
        if self.l0 <= 0.0 {
            return Err(ConfigError::NonPositiveRestLength(self.l0));
        }
        if self.m <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.m));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f64),

    #[error("total simulated duration must be non-negative, got {0}")]
    NegativeDuration(f64),

    #[error("natural spring length must be positive, got {0}")]
    NonPositiveRestLength(f64),

    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_total_is_valid() {
        let config = Config {
            total: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_timestep() {
        let config = Config {
            dt: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveTimestep(_))
        ));
    }

    #[test]
    fn rejects_negative_duration() {
        let config = Config {
            total: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeDuration(_))
        ));
    }

    #[test]
    fn rejects_non_positive_rest_length() {
        let config = Config {
            l0: -0.5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRestLength(_))
        ));
    }

    #[test]
    fn rejects_non_positive_mass() {
        let config = Config {
            m: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMass(_))
        ));
    }
}
