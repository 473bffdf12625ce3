//! Bounded-horizon trajectory prediction.

use crate::planner::advance;
use kestrel_core::{Coord, Signal};
use kestrel_grid::{GridError, GridMap};

/// Project both agents `horizon` ticks into the future.
///
/// Each returned signal starts with the agent's current position and
/// gains one sample per applied [`advance`] step, so its length is
/// always `horizon + 1`. The projection runs entirely on values.
/// Committed agent state is never touched, which lets the executor
/// re-run the same lookahead every tick without any rollback.
///
/// The stale-information rule applies inside the projection exactly as
/// it does in execution: at every projected tick the evader reacts to
/// the pursuer's position from the tick before.
pub fn predict(
    map: &GridMap,
    pursuer: Coord,
    evader: Coord,
    goal: Coord,
    horizon: usize,
) -> Result<(Signal, Signal), GridError> {
    let mut pursuer_signal = Signal::seeded(pursuer);
    let mut evader_signal = Signal::seeded(evader);

    let mut current_pursuer = pursuer;
    let mut current_evader = evader;
    for _ in 0..horizon {
        let step = advance(map, current_pursuer, current_evader, goal)?;
        current_pursuer = step.pursuer;
        current_evader = step.evader;
        pursuer_signal.push(current_pursuer);
        evader_signal.push(current_evader);
    }

    Ok((pursuer_signal, evader_signal))
}
