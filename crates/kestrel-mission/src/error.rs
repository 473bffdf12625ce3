//! Mission-level error type.

use crate::config::ConfigError;
use kestrel_grid::GridError;
use kestrel_monitor::MonitorError;
use std::error::Error;
use std::fmt;

/// Errors from mission construction or execution.
///
/// All variants are fatal to the run: this is a closed-loop
/// deterministic simulation, not a fault-tolerant service, so errors
/// abort rather than degrade. Budget exhaustion is deliberately
/// absent; it is the `Aborted` status, never an error.
#[derive(Clone, Debug, PartialEq)]
pub enum MissionError {
    /// Configuration failed validation.
    Config(ConfigError),
    /// A map lookup failed during construction or a planning step.
    Grid(GridError),
    /// The safety monitor rejected a property or failed internally.
    Monitor(MonitorError),
}

impl fmt::Display for MissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Monitor(e) => write!(f, "monitor: {e}"),
        }
    }
}

impl Error for MissionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Monitor(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MissionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for MissionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<MonitorError> for MissionError {
    fn from(e: MonitorError) -> Self {
        Self::Monitor(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_core::Coord;

    #[test]
    fn display_chains_the_source() {
        let e = MissionError::from(GridError::OutOfBounds {
            coord: Coord::new(9, 9),
            width: 5,
            height: 5,
        });
        assert!(e.to_string().starts_with("grid:"));
        assert!(e.source().is_some());
    }
}
