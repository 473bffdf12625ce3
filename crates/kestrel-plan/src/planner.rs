//! Single-step greedy joint advancement.

use kestrel_core::Coord;
use kestrel_grid::{GridError, GridMap};

/// Result of one joint advancement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JointStep {
    /// The pursuer's next position.
    pub pursuer: Coord,
    /// The evader's next position.
    pub evader: Coord,
}

/// Compute one joint advancement step for the pursuer/evader pair.
///
/// The pursuer takes the neighbour that most reduces its Euclidean
/// distance to `goal`, or stays put when no neighbour strictly reduces
/// it. The evader applies the same rule against the pursuer's
/// **pre-move** cell. That information is stale on purpose: the evader
/// never sees the pursuer's same-tick update, so it closes on where
/// the pursuer last was, not where it is.
///
/// Both sub-steps are independent and the whole function is pure: no
/// side effects, fully deterministic for identical inputs. The greedy
/// rule keeps the first neighbour seen on equal advancement (strict
/// maximum), so the map's neighbour enumeration order is part of the
/// contract.
///
/// `goal` is not bounds-checked here; waypoints are validated at
/// mission construction. The two agent positions are map lookups and
/// fail with [`GridError::OutOfBounds`] if outside the map.
pub fn advance(
    map: &GridMap,
    pursuer: Coord,
    evader: Coord,
    goal: Coord,
) -> Result<JointStep, GridError> {
    map.cell(pursuer)?;
    map.cell(evader)?;

    Ok(JointStep {
        pursuer: greedy_step(map, pursuer, goal),
        evader: greedy_step(map, evader, pursuer),
    })
}

/// The neighbour of `from` that most reduces distance to `target`,
/// or `from` itself when no neighbour strictly reduces it.
fn greedy_step(map: &GridMap, from: Coord, target: Coord) -> Coord {
    let base = from.distance_to(target);
    let mut best = from;
    let mut best_gain = 0.0;
    for neighbour in map.neighbours(from) {
        let gain = base - neighbour.distance_to(target);
        // Strictly greater: later equal candidates never replace the
        // first one seen.
        if gain > best_gain {
            best_gain = gain;
            best = neighbour;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(w: u32, h: u32) -> GridMap {
        GridMap::new(w, h).unwrap()
    }

    // ── Pursuer sub-step ────────────────────────────────────────

    #[test]
    fn pursuer_moves_diagonally_toward_goal() {
        let m = map(10, 10);
        let step = advance(&m, Coord::new(2, 2), Coord::new(8, 8), Coord::new(6, 6)).unwrap();
        assert_eq!(step.pursuer, Coord::new(3, 3));
    }

    #[test]
    fn pursuer_at_goal_stays_put() {
        let m = map(10, 10);
        let goal = Coord::new(4, 4);
        let step = advance(&m, goal, Coord::new(0, 0), goal).unwrap();
        assert_eq!(step.pursuer, goal);
    }

    #[test]
    fn pursuer_steps_onto_adjacent_goal() {
        let m = map(10, 10);
        let step = advance(&m, Coord::new(4, 4), Coord::new(0, 0), Coord::new(5, 4)).unwrap();
        assert_eq!(step.pursuer, Coord::new(5, 4));
    }

    // ── Evader sub-step ─────────────────────────────────────────

    #[test]
    fn evader_closes_on_pursuer_position() {
        let m = map(10, 10);
        // Pursuer stays at its goal; the evader tracks it.
        let goal = Coord::new(2, 2);
        let step = advance(&m, goal, Coord::new(2, 6), goal).unwrap();
        assert_eq!(step.evader, Coord::new(2, 5));
    }

    #[test]
    fn evader_uses_pre_move_pursuer_cell() {
        let m = map(10, 10);
        // Pursuer at (5,5) moves to (6,6) this tick. Against the stale
        // cell (5,5) the evader's best neighbour is (5,6); against the
        // fresh cell (6,6) it would be (6,6) itself.
        let step = advance(&m, Coord::new(5, 5), Coord::new(5, 7), Coord::new(9, 9)).unwrap();
        assert_eq!(step.pursuer, Coord::new(6, 6));
        assert_eq!(step.evader, Coord::new(5, 6));
    }

    #[test]
    fn evader_on_pursuer_cell_stays_put() {
        let m = map(10, 10);
        let shared = Coord::new(3, 3);
        let step = advance(&m, shared, shared, Coord::new(9, 9)).unwrap();
        assert_eq!(step.evader, shared);
    }

    // ── Error contract ──────────────────────────────────────────

    #[test]
    fn out_of_bounds_agent_fails() {
        let m = map(5, 5);
        assert!(matches!(
            advance(&m, Coord::new(5, 0), Coord::new(0, 0), Coord::new(2, 2)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            advance(&m, Coord::new(0, 0), Coord::new(0, -1), Coord::new(2, 2)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    // ── Purity and monotonicity ─────────────────────────────────

    proptest! {
        #[test]
        fn advance_is_deterministic(
            px in 0i32..12, py in 0i32..12,
            ex in 0i32..12, ey in 0i32..12,
            gx in 0i32..12, gy in 0i32..12,
        ) {
            let m = map(12, 12);
            let a = advance(&m, Coord::new(px, py), Coord::new(ex, ey), Coord::new(gx, gy)).unwrap();
            let b = advance(&m, Coord::new(px, py), Coord::new(ex, ey), Coord::new(gx, gy)).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn pursuer_never_loses_ground(
            px in 0i32..12, py in 0i32..12,
            ex in 0i32..12, ey in 0i32..12,
            gx in 0i32..12, gy in 0i32..12,
        ) {
            let m = map(12, 12);
            let pursuer = Coord::new(px, py);
            let goal = Coord::new(gx, gy);
            let step = advance(&m, pursuer, Coord::new(ex, ey), goal).unwrap();
            prop_assert!(step.pursuer.distance_to(goal) <= pursuer.distance_to(goal));
        }

        #[test]
        fn joint_step_stays_in_bounds(
            px in 0i32..12, py in 0i32..12,
            ex in 0i32..12, ey in 0i32..12,
            gx in 0i32..12, gy in 0i32..12,
        ) {
            let m = map(12, 12);
            let step = advance(&m, Coord::new(px, py), Coord::new(ex, ey), Coord::new(gx, gy)).unwrap();
            prop_assert!(m.contains(step.pursuer));
            prop_assert!(m.contains(step.evader));
        }
    }
}
