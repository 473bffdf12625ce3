//! Error types for property evaluation.

use std::error::Error;
use std::fmt;

/// Errors from [`Monitor`](crate::Monitor) evaluation.
///
/// The property set is fixed at mission construction, so evaluation
/// failures are propagated uncaught: no retry, no suppression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonitorError {
    /// The property itself is ill-formed (e.g. an inverted window).
    MalformedProperty {
        /// Description of the defect.
        reason: String,
    },
    /// The evaluation window starts beyond the signal's last sample.
    WindowPastSignalEnd {
        /// Window start offset.
        start: usize,
        /// Signal length.
        len: usize,
    },
    /// The evaluator failed internally.
    EvaluationFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedProperty { reason } => write!(f, "malformed property: {reason}"),
            Self::WindowPastSignalEnd { start, len } => {
                write!(f, "window start {start} past end of signal (length {len})")
            }
            Self::EvaluationFailed { reason } => write!(f, "evaluation failed: {reason}"),
        }
    }
}

impl Error for MonitorError {}
