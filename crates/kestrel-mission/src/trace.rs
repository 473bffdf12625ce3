//! Mission output: traces, statuses, and the assembled result.

use crate::metrics::MissionMetrics;
use kestrel_core::Signal;

/// How a mission run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionStatus {
    /// Every waypoint was reached in order.
    Completed,
    /// The step budget ran out first. Not an error: a controlled
    /// early-termination outcome, visible only here and in the
    /// terminal message.
    Aborted,
}

/// One agent's share of a mission result.
///
/// Shape invariant: `executed.len() == predictions.len()`, so a
/// renderer may dereference any tick index of either list. The
/// executed signal starts with the initial position and gains one
/// sample per committed step; the prediction list holds one
/// `horizon + 1`-sample lookahead per tick plus a final single-sample
/// placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentTrace {
    /// The agent's identifier.
    pub id: String,
    /// Committed position history.
    pub executed: Signal,
    /// Per-tick lookahead projections.
    pub predictions: Vec<Signal>,
}

/// Everything a finished mission hands to its consumer.
#[derive(Clone, Debug)]
pub struct MissionResult {
    /// How the run ended.
    pub status: MissionStatus,
    /// The pursuer's trace.
    pub pursuer: AgentTrace,
    /// The evader's trace.
    pub evader: AgentTrace,
    /// One diagnostic string per executed tick plus one terminal
    /// message.
    pub messages: Vec<String>,
    /// Run counters.
    pub metrics: MissionMetrics,
}

impl MissionResult {
    /// Number of committed ticks in this run.
    pub fn ticks(&self) -> usize {
        self.pursuer.executed.len().saturating_sub(1)
    }
}
