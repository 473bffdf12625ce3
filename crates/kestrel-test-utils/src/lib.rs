//! Test utilities and mock monitors for Kestrel development.
//!
//! Provides [`Monitor`] implementations with canned behaviour so
//! executor and aggregation tests can exercise every monitoring
//! outcome without depending on the built-in evaluator.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::VecDeque;

use kestrel_core::Signal;
use kestrel_monitor::{Evaluation, Monitor, MonitorError, Property};

/// Mock monitor returning the same evaluation for every property.
///
/// Use [`always_satisfied`](ConstMonitor::always_satisfied) /
/// [`always_violated`](ConstMonitor::always_violated) for the two
/// common cases, or construct with any fixed [`Evaluation`].
pub struct ConstMonitor {
    evaluation: Evaluation,
}

impl ConstMonitor {
    pub fn new(evaluation: Evaluation) -> Self {
        Self { evaluation }
    }

    /// Every property satisfied with the given robustness.
    pub fn always_satisfied(robustness: f64) -> Self {
        Self::new(Evaluation {
            satisfied: true,
            robustness,
        })
    }

    /// Every property violated with the given (negative) robustness.
    pub fn always_violated(robustness: f64) -> Self {
        Self::new(Evaluation {
            satisfied: false,
            robustness,
        })
    }
}

impl Monitor for ConstMonitor {
    fn evaluate(&self, _property: &Property, _signal: &Signal) -> Result<Evaluation, MonitorError> {
        Ok(self.evaluation)
    }
}

/// Mock monitor that fails every evaluation.
///
/// Exercises the uncaught-propagation contract: one evaluation failure
/// must abort the whole run.
pub struct FailingMonitor {
    reason: String,
}

impl FailingMonitor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Monitor for FailingMonitor {
    fn evaluate(&self, _property: &Property, _signal: &Signal) -> Result<Evaluation, MonitorError> {
        Err(MonitorError::EvaluationFailed {
            reason: self.reason.clone(),
        })
    }
}

/// Mock monitor replaying a scripted sequence of evaluations.
///
/// Each `evaluate` call pops the front of the script; an exhausted
/// script is an evaluation failure, which makes under-provisioned
/// tests fail loudly instead of silently repeating a verdict.
pub struct ScriptedMonitor {
    script: RefCell<VecDeque<Evaluation>>,
}

impl ScriptedMonitor {
    pub fn new(script: impl IntoIterator<Item = Evaluation>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
        }
    }

    /// Number of scripted evaluations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl Monitor for ScriptedMonitor {
    fn evaluate(&self, _property: &Property, _signal: &Signal) -> Result<Evaluation, MonitorError> {
        self.script
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| MonitorError::EvaluationFailed {
                reason: "scripted monitor exhausted".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_core::Coord;
    use kestrel_monitor::{Comparison, Predicate, Property, SignalVar};

    fn property() -> Property {
        Property::globally(0, 1, Predicate::new(SignalVar::X, Comparison::Lt, 5.0))
    }

    fn signal() -> Signal {
        Signal::seeded(Coord::new(0, 0))
    }

    #[test]
    fn const_monitor_repeats_its_evaluation() {
        let m = ConstMonitor::always_satisfied(2.0);
        for _ in 0..3 {
            let ev = m.evaluate(&property(), &signal()).unwrap();
            assert!(ev.satisfied);
            assert_eq!(ev.robustness, 2.0);
        }
    }

    #[test]
    fn failing_monitor_always_errors() {
        let m = FailingMonitor::new("boom");
        assert!(matches!(
            m.evaluate(&property(), &signal()),
            Err(MonitorError::EvaluationFailed { .. })
        ));
    }

    #[test]
    fn scripted_monitor_replays_in_order_then_errors() {
        let m = ScriptedMonitor::new([
            Evaluation {
                satisfied: true,
                robustness: 1.0,
            },
            Evaluation {
                satisfied: false,
                robustness: -1.0,
            },
        ]);
        assert_eq!(m.remaining(), 2);
        assert!(m.evaluate(&property(), &signal()).unwrap().satisfied);
        assert!(!m.evaluate(&property(), &signal()).unwrap().satisfied);
        assert!(m.evaluate(&property(), &signal()).is_err());
    }
}
