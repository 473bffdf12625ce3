//! The mission state machine.

use crossbeam_channel::Sender;

use kestrel_core::{Coord, Signal};
use kestrel_grid::GridMap;
use kestrel_monitor::{check_signal, Monitor, Property, RobustnessMonitor, SafetyVerdict};
use kestrel_plan::{advance, predict};

use crate::agent::Agent;
use crate::config::MissionConfig;
use crate::egress::StepEvent;
use crate::error::MissionError;
use crate::metrics::MissionMetrics;
use crate::trace::{AgentTrace, MissionResult, MissionStatus};

/// Fixed width of one agent column in a violation message, so warnings
/// for different agents line up across ticks.
const MESSAGE_COLUMN_WIDTH: usize = 46;

// ── MissionState ────────────────────────────────────────────────

/// Phase of the mission state machine.
///
/// A tick cycles `PendingWaypoint → Predicting → Monitoring →
/// Advancing` and back; the machine exits to `Completed` when every
/// waypoint has been reached in order, or to `Aborted` when the step
/// budget reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionState {
    /// Checking waypoint progress and the remaining budget.
    PendingWaypoint,
    /// Projecting the lookahead trajectories.
    Predicting,
    /// Evaluating safety properties against the projections.
    Monitoring,
    /// Committing the planned joint step.
    Advancing,
    /// All waypoints reached.
    Completed,
    /// Step budget exhausted before the waypoint sequence finished.
    Aborted,
}

// ── MissionExecutor ─────────────────────────────────────────────

/// Drives a mission from construction to a [`MissionResult`].
///
/// The executor owns the map, both agents, and all accumulating
/// output. [`run()`](MissionExecutor::run) consumes the executor:
/// a mission executes exactly once.
///
/// # Example
///
/// ```
/// use kestrel_core::Coord;
/// use kestrel_mission::{MissionConfig, MissionExecutor, MissionStatus};
///
/// let config = MissionConfig::new(
///     20, 20,
///     Coord::new(1, 10),
///     Coord::new(1, 1),
///     vec![Coord::new(10, 19), Coord::new(19, 1)],
/// );
/// let result = MissionExecutor::with_default_monitor(config)
///     .unwrap()
///     .run()
///     .unwrap();
/// assert_eq!(result.status, MissionStatus::Completed);
/// ```
pub struct MissionExecutor {
    map: GridMap,
    pursuer: Agent,
    evader: Agent,
    waypoints: Vec<Coord>,
    step_budget: usize,
    horizon: usize,
    properties: Vec<Property>,
    monitor: Box<dyn Monitor>,
    observer: Option<Sender<StepEvent>>,
    state: MissionState,

    pursuer_executed: Signal,
    evader_executed: Signal,
    pursuer_predictions: Vec<Signal>,
    evader_predictions: Vec<Signal>,
    messages: Vec<String>,
    metrics: MissionMetrics,
}

impl MissionExecutor {
    /// Build an executor from a validated configuration and a monitor.
    ///
    /// Validation, map construction, and agent placement happen here
    /// atomically. A constructed executor is always runnable; there is
    /// no partially-initialized state to query.
    pub fn new(config: MissionConfig, monitor: Box<dyn Monitor>) -> Result<Self, MissionError> {
        config.validate()?;
        let properties = config.resolved_properties();

        let map = GridMap::new(config.width, config.height)?;
        let pursuer = Agent::new(config.pursuer_id, &map, config.pursuer_start)?;
        let evader = Agent::new(config.evader_id, &map, config.evader_start)?;

        let pursuer_executed = Signal::seeded(config.pursuer_start);
        let evader_executed = Signal::seeded(config.evader_start);

        Ok(Self {
            map,
            pursuer,
            evader,
            waypoints: config.waypoints,
            step_budget: config.step_budget,
            horizon: config.horizon,
            properties,
            monitor,
            observer: None,
            state: MissionState::PendingWaypoint,
            pursuer_executed,
            evader_executed,
            pursuer_predictions: Vec::new(),
            evader_predictions: Vec::new(),
            messages: Vec::new(),
            metrics: MissionMetrics::default(),
        })
    }

    /// Build an executor with the built-in [`RobustnessMonitor`].
    pub fn with_default_monitor(config: MissionConfig) -> Result<Self, MissionError> {
        Self::new(config, Box::new(RobustnessMonitor::new()))
    }

    /// Register a step-event channel for live consumers.
    ///
    /// Events are sent fire-and-forget after each committed step; a
    /// dropped receiver is ignored.
    pub fn observe(&mut self, sender: Sender<StepEvent>) {
        self.observer = Some(sender);
    }

    /// Current phase of the state machine.
    pub fn state(&self) -> MissionState {
        self.state
    }

    /// Execute the mission to completion.
    ///
    /// Loops the state machine until `Completed` or `Aborted`, then
    /// finalizes the traces: one single-sample placeholder prediction
    /// per agent (keeping the prediction lists the same length as the
    /// executed signals) and exactly one terminal message.
    ///
    /// # Errors
    ///
    /// Propagates grid lookup failures from planning and monitor
    /// evaluation failures unchanged; a partial trace is discarded.
    pub fn run(mut self) -> Result<MissionResult, MissionError> {
        let mut waypoint_index = 0;
        let mut remaining = self.step_budget;
        let mut lookahead: Option<(Signal, Signal)> = None;

        loop {
            match self.state {
                MissionState::PendingWaypoint => {
                    if waypoint_index == self.waypoints.len() {
                        self.state = MissionState::Completed;
                    } else if self.pursuer.position(&self.map) == self.waypoints[waypoint_index] {
                        self.metrics.waypoints_reached += 1;
                        waypoint_index += 1;
                    } else if remaining == 0 {
                        // Controlled early termination: later waypoints
                        // are never attempted.
                        self.state = MissionState::Aborted;
                    } else {
                        self.state = MissionState::Predicting;
                    }
                }

                MissionState::Predicting => {
                    let goal = self.waypoints[waypoint_index];
                    let (pursuer_pred, evader_pred) = predict(
                        &self.map,
                        self.pursuer.position(&self.map),
                        self.evader.position(&self.map),
                        goal,
                        self.horizon,
                    )?;
                    self.pursuer_predictions.push(pursuer_pred.clone());
                    self.evader_predictions.push(evader_pred.clone());
                    lookahead = Some((pursuer_pred, evader_pred));
                    self.state = MissionState::Monitoring;
                }

                MissionState::Monitoring => {
                    let (pursuer_pred, evader_pred) =
                        lookahead.take().unwrap_or_default();
                    let pursuer_verdict =
                        check_signal(self.monitor.as_ref(), &self.properties, &pursuer_pred)?;
                    let evader_verdict =
                        check_signal(self.monitor.as_ref(), &self.properties, &evader_pred)?;

                    self.metrics.properties_evaluated += 2 * self.properties.len() as u64;
                    self.metrics.min_robustness = self
                        .metrics
                        .min_robustness
                        .min(pursuer_verdict.min_robustness)
                        .min(evader_verdict.min_robustness);
                    if !(pursuer_verdict.satisfied && evader_verdict.satisfied) {
                        self.metrics.violation_ticks += 1;
                    }

                    self.messages.push(tick_message(
                        (self.pursuer.id(), pursuer_verdict),
                        (self.evader.id(), evader_verdict),
                    ));
                    self.state = MissionState::Advancing;
                }

                MissionState::Advancing => {
                    let goal = self.waypoints[waypoint_index];
                    let step = advance(
                        &self.map,
                        self.pursuer.position(&self.map),
                        self.evader.position(&self.map),
                        goal,
                    )?;
                    self.pursuer.commit(&self.map, step.pursuer)?;
                    self.evader.commit(&self.map, step.evader)?;
                    self.pursuer_executed.push(step.pursuer);
                    self.evader_executed.push(step.evader);

                    remaining -= 1;
                    self.metrics.ticks += 1;

                    if let Some(observer) = &self.observer {
                        // Fire-and-forget: a disconnected receiver must
                        // never abort the run.
                        let _ = observer.send(StepEvent {
                            tick: self.metrics.ticks,
                            pursuer: step.pursuer,
                            evader: step.evader,
                            message: self.messages.last().cloned().unwrap_or_default(),
                        });
                    }
                    self.state = MissionState::PendingWaypoint;
                }

                MissionState::Completed => return Ok(self.finish(MissionStatus::Completed)),
                MissionState::Aborted => return Ok(self.finish(MissionStatus::Aborted)),
            }
        }
    }

    fn finish(mut self, status: MissionStatus) -> MissionResult {
        // Single-sample placeholders keep every prediction list exactly
        // as long as its executed signal, so any tick index a renderer
        // derives from one is valid for the other.
        self.pursuer_predictions
            .push(Signal::seeded(self.pursuer.position(&self.map)));
        self.evader_predictions
            .push(Signal::seeded(self.evader.position(&self.map)));

        let terminal = match status {
            MissionStatus::Completed => "mission complete: all waypoints reached".to_string(),
            MissionStatus::Aborted => "mission aborted: step budget exhausted".to_string(),
        };
        self.messages.push(terminal);

        MissionResult {
            status,
            pursuer: AgentTrace {
                id: self.pursuer.id().to_string(),
                executed: self.pursuer_executed,
                predictions: self.pursuer_predictions,
            },
            evader: AgentTrace {
                id: self.evader.id().to_string(),
                executed: self.evader_executed,
                predictions: self.evader_predictions,
            },
            messages: self.messages,
            metrics: self.metrics,
        }
    }
}

impl std::fmt::Debug for MissionExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MissionExecutor")
            .field("state", &self.state)
            .field("waypoints", &self.waypoints.len())
            .field("step_budget", &self.step_budget)
            .field("horizon", &self.horizon)
            .field("ticks", &self.metrics.ticks)
            .finish()
    }
}

// ── Message assembly ────────────────────────────────────────────

/// Build the diagnostic message for one tick.
///
/// Both agents safe: a single "no conflict" line carrying the overall
/// minimum robustness. Any violation: one fixed-width column per
/// agent, holding a crash warning for each violating agent and blank
/// padding for the rest, so columns stay aligned across ticks.
fn tick_message(
    pursuer: (&str, SafetyVerdict),
    evader: (&str, SafetyVerdict),
) -> String {
    if pursuer.1.satisfied && evader.1.satisfied {
        let overall = pursuer.1.min_robustness.min(evader.1.min_robustness);
        return format!("no conflict (min robustness = {overall:.4})");
    }

    let width = MESSAGE_COLUMN_WIDTH;
    let column = |(id, verdict): (&str, SafetyVerdict)| {
        if verdict.satisfied {
            format!("{:width$}", "")
        } else {
            let warning = format!(
                "{id} crashing (min robustness = {:.4})",
                verdict.min_robustness
            );
            format!("{warning:<width$}")
        }
    };
    format!("{}| {}", column(pursuer), column(evader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_core::Coord;

    fn verdict(satisfied: bool, min_robustness: f64) -> SafetyVerdict {
        SafetyVerdict {
            satisfied,
            min_robustness,
        }
    }

    // ── Message formatting ──────────────────────────────────────

    #[test]
    fn no_conflict_carries_the_overall_minimum() {
        let msg = tick_message(("pursuer", verdict(true, 4.0)), ("evader", verdict(true, 2.5)));
        assert_eq!(msg, "no conflict (min robustness = 2.5000)");
    }

    #[test]
    fn violating_agent_is_named_with_its_minimum() {
        let msg = tick_message(
            ("pursuer", verdict(false, -1.0)),
            ("evader", verdict(true, 3.0)),
        );
        assert!(msg.contains("pursuer crashing (min robustness = -1.0000)"));
        assert!(!msg.contains("evader"));
    }

    #[test]
    fn non_violating_column_is_blank_but_aligned() {
        let a = tick_message(
            ("pursuer", verdict(false, -1.0)),
            ("evader", verdict(true, 3.0)),
        );
        let b = tick_message(
            ("pursuer", verdict(false, -2.5)),
            ("evader", verdict(false, -0.5)),
        );
        // Both agent columns start at the same offset in every message.
        assert_eq!(a.find('|'), b.find('|'));
        assert!(b.contains("evader crashing (min robustness = -0.5000)"));
    }

    // ── Construction ────────────────────────────────────────────

    fn demo_config() -> MissionConfig {
        MissionConfig::new(
            20,
            20,
            Coord::new(1, 10),
            Coord::new(1, 1),
            vec![Coord::new(10, 19), Coord::new(19, 1)],
        )
    }

    #[test]
    fn new_executor_is_pending() {
        let exec = MissionExecutor::with_default_monitor(demo_config()).unwrap();
        assert_eq!(exec.state(), MissionState::PendingWaypoint);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = demo_config();
        config.step_budget = 0;
        assert!(matches!(
            MissionExecutor::with_default_monitor(config),
            Err(MissionError::Config(_))
        ));
    }

    // ── Degenerate runs ─────────────────────────────────────────

    #[test]
    fn no_waypoints_completes_immediately() {
        let config = MissionConfig::new(10, 10, Coord::new(5, 5), Coord::new(2, 2), vec![]);
        let result = MissionExecutor::with_default_monitor(config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.status, MissionStatus::Completed);
        assert_eq!(result.ticks(), 0);
        assert_eq!(result.messages, vec!["mission complete: all waypoints reached"]);
        // Placeholder prediction only, one sample long.
        assert_eq!(result.pursuer.predictions.len(), 1);
        assert_eq!(result.pursuer.predictions[0].len(), 1);
    }

    #[test]
    fn waypoint_equal_to_start_consumes_no_budget() {
        let start = Coord::new(5, 5);
        let config = MissionConfig::new(10, 10, start, Coord::new(2, 2), vec![start, start]);
        let result = MissionExecutor::with_default_monitor(config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.status, MissionStatus::Completed);
        assert_eq!(result.metrics.ticks, 0);
        assert_eq!(result.metrics.waypoints_reached, 2);
    }

    // ── Egress ──────────────────────────────────────────────────

    #[test]
    fn observer_receives_one_event_per_tick() {
        let config = MissionConfig::new(
            12,
            12,
            Coord::new(4, 4),
            Coord::new(8, 8),
            vec![Coord::new(7, 4)],
        );
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut exec = MissionExecutor::with_default_monitor(config).unwrap();
        exec.observe(tx);
        let result = exec.run().unwrap();

        let events: Vec<StepEvent> = rx.try_iter().collect();
        assert_eq!(events.len() as u64, result.metrics.ticks);
        assert_eq!(events[0].tick, 1);
        assert_eq!(
            events.last().map(|e| e.pursuer),
            result.pursuer.executed.last()
        );
    }

    #[test]
    fn dropped_observer_does_not_abort_the_run() {
        let config = MissionConfig::new(
            12,
            12,
            Coord::new(4, 4),
            Coord::new(8, 8),
            vec![Coord::new(7, 4)],
        );
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let mut exec = MissionExecutor::with_default_monitor(config).unwrap();
        exec.observe(tx);
        assert!(exec.run().is_ok());
    }
}
