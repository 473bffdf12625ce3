//! Bounded-time safety properties and robustness evaluation.
//!
//! A [`Property`] is a bounded-time invariant over a trajectory's `x`/`y`
//! values: `G[a,b](x < 17)` reads "at every tick offset in `[a, b]`,
//! `x` stays below 17". The [`Monitor`] trait is the narrow evaluation
//! boundary: structured property and signal in, satisfaction plus signed
//! robustness out. The built-in [`RobustnessMonitor`] evaluates the
//! inequality predicates directly; tests swap in mocks behind the same
//! trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod boundary;
mod error;
mod monitor;
mod property;

pub use boundary::{boundary_properties, check_signal, SafetyVerdict, BOUNDARY_MARGIN};
pub use error::MonitorError;
pub use monitor::{Evaluation, Monitor, RobustnessMonitor};
pub use property::{Comparison, Predicate, Property, SignalVar};
