//! Waypoint mission execution for Kestrel.
//!
//! [`MissionExecutor`] is the orchestrator: it owns the map and both
//! agents, and drives the per-tick cycle of lookahead prediction,
//! safety-property monitoring, and position commitment until every
//! waypoint is reached in order or the step budget runs out. The run
//! produces a [`MissionResult`]: per-agent execution traces and
//! prediction lists with renderer-safe shapes, a parallel diagnostic
//! message stream, and run metrics.
//!
//! # Single-writer discipline
//!
//! The map is immutable after construction. Agents are committed
//! exactly once per tick, by the executor alone, after prediction and
//! monitoring have both observed the pre-commit state; no phase ever
//! sees a half-updated position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod agent;
mod config;
mod egress;
mod error;
mod executor;
mod metrics;
mod trace;

pub use agent::Agent;
pub use config::{ConfigError, MissionConfig, DEFAULT_HORIZON, DEFAULT_STEP_BUDGET};
pub use egress::StepEvent;
pub use error::MissionError;
pub use executor::{MissionExecutor, MissionState};
pub use metrics::MissionMetrics;
pub use trace::{AgentTrace, MissionResult, MissionStatus};
