//! Structured bounded-time invariant properties.

use std::fmt;

/// Which trajectory component a predicate constrains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalVar {
    /// The horizontal component.
    X,
    /// The vertical component.
    Y,
}

impl fmt::Display for SignalVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Inequality direction of a predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// The variable must stay strictly below the threshold.
    Lt,
    /// The variable must stay strictly above the threshold.
    Gt,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
        }
    }
}

/// An inequality over one trajectory component, e.g. `x < 17`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Predicate {
    /// The constrained component.
    pub var: SignalVar,
    /// Inequality direction.
    pub cmp: Comparison,
    /// Threshold value.
    pub threshold: f64,
}

impl Predicate {
    /// Create a predicate.
    pub fn new(var: SignalVar, cmp: Comparison, threshold: f64) -> Self {
        Self {
            var,
            cmp,
            threshold,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.var, self.cmp, self.threshold)
    }
}

/// A bounded-time invariant: the predicate must hold at every tick
/// offset in the inclusive window `[start, end]`.
///
/// Renders in the conventional surface syntax, e.g. `G[0,4](x < 17)`.
/// Window validity (`start <= end`, window inside the signal) is the
/// evaluator's concern, checked at evaluation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Property {
    /// First tick offset of the window (inclusive).
    pub start: usize,
    /// Last tick offset of the window (inclusive).
    pub end: usize,
    /// The invariant predicate.
    pub predicate: Predicate,
}

impl Property {
    /// An "always" property over the inclusive window `[start, end]`.
    pub fn globally(start: usize, end: usize, predicate: Predicate) -> Self {
        Self {
            start,
            end,
            predicate,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G[{},{}]({})", self.start, self.end, self.predicate)
    }
}
