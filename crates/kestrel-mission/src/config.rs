//! Mission configuration and validation.

use kestrel_core::Coord;
use kestrel_monitor::{boundary_properties, Property};
use std::error::Error;
use std::fmt;

/// Default number of committed steps a mission may execute.
pub const DEFAULT_STEP_BUDGET: usize = 30;

/// Default lookahead horizon, in ticks.
pub const DEFAULT_HORIZON: usize = 4;

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected during [`MissionConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A map dimension is zero.
    ZeroDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
    },
    /// An agent's start position lies outside the map.
    StartOutOfBounds {
        /// The agent's identifier.
        id: String,
        /// The offending coordinate.
        coord: Coord,
    },
    /// A waypoint lies outside the map.
    WaypointOutOfBounds {
        /// Position of the waypoint in the sequence.
        index: usize,
        /// The offending coordinate.
        coord: Coord,
    },
    /// The step budget is zero; the mission could never move.
    ZeroStepBudget,
    /// A custom property set was supplied but is empty.
    EmptyPropertySet,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { name } => write!(f, "map {name} must be positive"),
            Self::StartOutOfBounds { id, coord } => {
                write!(f, "start position {coord} for agent '{id}' is outside the map")
            }
            Self::WaypointOutOfBounds { index, coord } => {
                write!(f, "waypoint {index} at {coord} is outside the map")
            }
            Self::ZeroStepBudget => write!(f, "step budget must be at least 1"),
            Self::EmptyPropertySet => write!(f, "custom property set must not be empty"),
        }
    }
}

impl Error for ConfigError {}

// ── MissionConfig ───────────────────────────────────────────────

/// Construction parameters for a mission.
///
/// Built with [`new`](MissionConfig::new), which fills the defaults
/// (step budget 30, horizon 4, boundary-margin properties, plain agent
/// identifiers); fields are public for explicit overrides afterwards.
#[derive(Clone, Debug)]
pub struct MissionConfig {
    /// Map width in cells.
    pub width: u32,
    /// Map height in cells.
    pub height: u32,
    /// Pursuer start position.
    pub pursuer_start: Coord,
    /// Evader start position.
    pub evader_start: Coord,
    /// Ordered waypoint sequence, consumed strictly in order.
    pub waypoints: Vec<Coord>,
    /// Maximum number of committed steps before the run aborts.
    pub step_budget: usize,
    /// Lookahead horizon in ticks.
    pub horizon: usize,
    /// Identifier for the pursuer, used in diagnostic messages.
    pub pursuer_id: String,
    /// Identifier for the evader, used in diagnostic messages.
    pub evader_id: String,
    /// Safety properties evaluated against every predicted trajectory.
    /// `None` selects the four boundary-margin properties derived from
    /// the map dimensions and horizon.
    pub properties: Option<Vec<Property>>,
}

impl MissionConfig {
    /// Create a configuration with defaults for everything not named.
    pub fn new(
        width: u32,
        height: u32,
        pursuer_start: Coord,
        evader_start: Coord,
        waypoints: Vec<Coord>,
    ) -> Self {
        Self {
            width,
            height,
            pursuer_start,
            evader_start,
            waypoints,
            step_budget: DEFAULT_STEP_BUDGET,
            horizon: DEFAULT_HORIZON,
            pursuer_id: "pursuer".to_string(),
            evader_id: "evader".to_string(),
            properties: None,
        }
    }

    /// Check structural invariants.
    ///
    /// Dimensions must be positive, both start positions and every
    /// waypoint must lie inside the map, the step budget must be
    /// nonzero, and a custom property set must not be empty. A horizon
    /// of zero is legal: predictions degenerate to the current
    /// position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }

        let in_bounds = |c: Coord| {
            c.x >= 0 && c.x < self.width as i32 && c.y >= 0 && c.y < self.height as i32
        };
        if !in_bounds(self.pursuer_start) {
            return Err(ConfigError::StartOutOfBounds {
                id: self.pursuer_id.clone(),
                coord: self.pursuer_start,
            });
        }
        if !in_bounds(self.evader_start) {
            return Err(ConfigError::StartOutOfBounds {
                id: self.evader_id.clone(),
                coord: self.evader_start,
            });
        }
        for (index, &coord) in self.waypoints.iter().enumerate() {
            if !in_bounds(coord) {
                return Err(ConfigError::WaypointOutOfBounds { index, coord });
            }
        }

        if self.step_budget == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        if matches!(&self.properties, Some(set) if set.is_empty()) {
            return Err(ConfigError::EmptyPropertySet);
        }
        Ok(())
    }

    /// The property set this mission will monitor: the custom set when
    /// supplied, otherwise the four boundary-margin properties.
    pub fn resolved_properties(&self) -> Vec<Property> {
        match &self.properties {
            Some(set) => set.clone(),
            None => boundary_properties(self.width, self.height, self.horizon),
        }
    }
}
