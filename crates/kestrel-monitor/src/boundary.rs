//! Boundary-margin property construction and per-signal aggregation.

use crate::error::MonitorError;
use crate::monitor::Monitor;
use crate::property::{Comparison, Predicate, Property, SignalVar};
use kestrel_core::Signal;

/// Margin kept between an agent and the map edge, in cells.
///
/// Chosen so that a trajectory reaching an edge-adjacent cell produces
/// a strictly negative robustness rather than landing exactly on the
/// threshold.
pub const BOUNDARY_MARGIN: f64 = 2.0;

/// The four boundary-margin invariants for a `width x height` map,
/// each scoped over the lookahead window `[0, horizon]`:
/// `x < width - margin`, `y < height - margin`, `x > margin`,
/// `y > margin`.
pub fn boundary_properties(width: u32, height: u32, horizon: usize) -> Vec<Property> {
    let upper_x = f64::from(width) - BOUNDARY_MARGIN;
    let upper_y = f64::from(height) - BOUNDARY_MARGIN;
    vec![
        Property::globally(0, horizon, Predicate::new(SignalVar::X, Comparison::Lt, upper_x)),
        Property::globally(0, horizon, Predicate::new(SignalVar::Y, Comparison::Lt, upper_y)),
        Property::globally(
            0,
            horizon,
            Predicate::new(SignalVar::X, Comparison::Gt, BOUNDARY_MARGIN),
        ),
        Property::globally(
            0,
            horizon,
            Predicate::new(SignalVar::Y, Comparison::Gt, BOUNDARY_MARGIN),
        ),
    ]
}

/// Aggregate verdict for one signal against a property set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafetyVerdict {
    /// `true` only if every property is satisfied.
    pub satisfied: bool,
    /// Minimum robustness across all properties.
    pub min_robustness: f64,
}

/// Evaluate every property against `signal` and fold the results.
///
/// An empty property set yields a vacuous verdict (satisfied, infinite
/// robustness); mission configuration rejects empty sets so the
/// executor never sees one. Evaluation errors propagate immediately.
pub fn check_signal(
    monitor: &dyn Monitor,
    properties: &[Property],
    signal: &Signal,
) -> Result<SafetyVerdict, MonitorError> {
    let mut satisfied = true;
    let mut min_robustness = f64::INFINITY;
    for property in properties {
        let evaluation = monitor.evaluate(property, signal)?;
        satisfied = satisfied && evaluation.satisfied;
        min_robustness = min_robustness.min(evaluation.robustness);
    }
    Ok(SafetyVerdict {
        satisfied,
        min_robustness,
    })
}
