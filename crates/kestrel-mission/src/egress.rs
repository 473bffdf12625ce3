//! Streaming step events for live consumers.

use kestrel_core::Coord;

/// One committed tick, published to the optional observer channel.
///
/// A renderer (or any other consumer) can follow the run live instead
/// of waiting for the final result. Delivery is fire-and-forget: the
/// executor never blocks on the channel and a dropped receiver never
/// affects the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepEvent {
    /// 1-based tick number of the commit.
    pub tick: u64,
    /// The pursuer's committed position.
    pub pursuer: Coord,
    /// The evader's committed position.
    pub evader: Coord,
    /// The diagnostic message produced for this tick.
    pub message: String,
}
