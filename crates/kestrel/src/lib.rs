//! Kestrel: deterministic pursuit-mission simulation with predictive
//! safety monitoring.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Kestrel sub-crates. For most users, adding `kestrel` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kestrel::prelude::*;
//!
//! // A 20x20 mission: the pursuer flies two waypoints while the
//! // evader shadows it from (1,1). Defaults: step budget 30,
//! // lookahead horizon 4, boundary-margin safety properties.
//! let config = MissionConfig::new(
//!     20, 20,
//!     Coord::new(1, 10),
//!     Coord::new(1, 1),
//!     vec![Coord::new(10, 19), Coord::new(19, 1)],
//! );
//! let result = MissionExecutor::with_default_monitor(config)
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(result.status, MissionStatus::Completed);
//! // One lookahead recorded per committed tick, plus the terminal
//! // placeholder; a renderer can dereference any tick index.
//! assert_eq!(
//!     result.pursuer.executed.len(),
//!     result.pursuer.predictions.len(),
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kestrel-core` | `Coord` and `Signal` value types |
//! | [`grid`] | `kestrel-grid` | `GridMap`, `Cell`, neighbour enumeration |
//! | [`plan`] | `kestrel-plan` | Greedy joint advancement and lookahead prediction |
//! | [`monitor`] | `kestrel-monitor` | Safety properties and robustness evaluation |
//! | [`mission`] | `kestrel-mission` | Mission configuration, executor, traces |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`kestrel-core`): [`types::Coord`], [`types::Signal`].
pub use kestrel_core as types;

/// Grid map and cells (`kestrel-grid`).
///
/// [`grid::GridMap`] owns the dense cell storage and enumerates the
/// 8-connected neighbourhood in the planner's tie-break order.
pub use kestrel_grid as grid;

/// Planning services (`kestrel-plan`).
///
/// [`plan::advance`] computes one joint step; [`plan::predict`]
/// projects a bounded-horizon lookahead for both agents.
pub use kestrel_plan as plan;

/// Safety monitoring (`kestrel-monitor`).
///
/// Structured `G[a,b](predicate)` properties, the [`monitor::Monitor`]
/// evaluation boundary, and the built-in robustness evaluator.
pub use kestrel_monitor as monitor;

/// Mission execution (`kestrel-mission`).
///
/// [`mission::MissionExecutor`] drives the predict → monitor → advance
/// loop and assembles the result traces and diagnostics.
pub use kestrel_mission as mission;

/// Common imports for typical Kestrel usage.
///
/// ```rust
/// use kestrel::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use kestrel_core::{Coord, Signal};

    // Grid
    pub use kestrel_grid::{GridError, GridMap};

    // Planning
    pub use kestrel_plan::{advance, predict, JointStep};

    // Monitoring
    pub use kestrel_monitor::{
        boundary_properties, check_signal, Comparison, Evaluation, Monitor, MonitorError,
        Predicate, Property, RobustnessMonitor, SafetyVerdict, SignalVar,
    };

    // Mission
    pub use kestrel_mission::{
        AgentTrace, MissionConfig, MissionError, MissionExecutor, MissionMetrics, MissionResult,
        MissionState, MissionStatus, StepEvent,
    };
}
