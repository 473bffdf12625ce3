//! The evaluation boundary and the built-in robustness evaluator.

use crate::error::MonitorError;
use crate::property::{Comparison, Property, SignalVar};
use kestrel_core::Signal;

/// Outcome of evaluating one property against one signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Whether the property holds over its whole window.
    pub satisfied: bool,
    /// Signed margin of satisfaction: positive means satisfied, and the
    /// magnitude is the distance to the threshold at the worst sample.
    pub robustness: f64,
}

/// Narrow boundary for temporal-property evaluation.
///
/// Structured property and signal in, `{satisfied, robustness}` out.
/// Implementations are synchronous with no latency bound; there is no
/// timeout, retry, or cancellation here, so an embedding that cannot
/// trust its evaluator's cost should wrap the call.
pub trait Monitor {
    /// Evaluate `property` against `signal`.
    fn evaluate(&self, property: &Property, signal: &Signal) -> Result<Evaluation, MonitorError>;
}

/// Built-in evaluator for bounded-time inequality invariants.
///
/// Robustness of `G[a,b](pred)` is the minimum signed margin of `pred`
/// over all sampled offsets in `[a, b]`: `threshold - v` for `<`,
/// `v - threshold` for `>`. Satisfaction requires the margin to be
/// strictly positive: a trajectory sitting exactly on the threshold is
/// reported as a violation with robustness `0`.
///
/// A window whose end extends past the signal's last sample is
/// evaluated over the sampled prefix; a window that starts beyond the
/// last sample is an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct RobustnessMonitor;

impl RobustnessMonitor {
    /// Create the evaluator.
    pub fn new() -> Self {
        Self
    }
}

impl Monitor for RobustnessMonitor {
    fn evaluate(&self, property: &Property, signal: &Signal) -> Result<Evaluation, MonitorError> {
        if property.start > property.end {
            return Err(MonitorError::MalformedProperty {
                reason: format!(
                    "window start {} after window end {}",
                    property.start, property.end
                ),
            });
        }
        if property.start >= signal.len() {
            return Err(MonitorError::WindowPastSignalEnd {
                start: property.start,
                len: signal.len(),
            });
        }

        let predicate = property.predicate;
        let end = property.end.min(signal.len() - 1);
        let mut robustness = f64::INFINITY;
        for t in property.start..=end {
            // In range: start < len and end is clamped.
            let sample = signal.get(t).ok_or_else(|| MonitorError::EvaluationFailed {
                reason: format!("signal sample {t} missing"),
            })?;
            let value = match predicate.var {
                SignalVar::X => f64::from(sample.x),
                SignalVar::Y => f64::from(sample.y),
            };
            let margin = match predicate.cmp {
                Comparison::Lt => predicate.threshold - value,
                Comparison::Gt => value - predicate.threshold,
            };
            robustness = robustness.min(margin);
        }

        Ok(Evaluation {
            satisfied: robustness > 0.0,
            robustness,
        })
    }
}
