//! Greedy joint advancement and lookahead prediction for Kestrel missions.
//!
//! Two stateless services: [`advance`] computes one joint step for the
//! pursuer/evader pair, and [`predict`] applies it repeatedly to project a
//! bounded-horizon trajectory for both agents without touching committed
//! state. Both are pure functions of their inputs; identical arguments
//! always produce identical outputs, which is what makes speculative
//! lookahead safe to run every tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod planner;
mod predictor;

pub use planner::{advance, JointStep};
pub use predictor::predict;
