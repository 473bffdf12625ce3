//! Benchmark profiles and utilities for the Kestrel mission simulation.
//!
//! Provides pre-built [`MissionConfig`] profiles for benchmarking:
//!
//! - [`checkpoint_profile`]: the reference 20x20 two-waypoint flight
//! - [`random_mission`]: seeded random scenarios on larger maps
//!
//! Random scenarios use a seeded ChaCha8 RNG, so the same seed always
//! produces the same mission and benchmark runs stay comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use kestrel_core::Coord;
use kestrel_mission::MissionConfig;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// The reference profile: 20x20 map, pursuer from (1,10) through
/// (10,19) and (19,1), evader from (1,1), defaults elsewhere.
pub fn checkpoint_profile() -> MissionConfig {
    MissionConfig::new(
        20,
        20,
        Coord::new(1, 10),
        Coord::new(1, 1),
        vec![Coord::new(10, 19), Coord::new(19, 1)],
    )
}

/// Build a seeded random mission on a `size x size` map.
///
/// Start positions and `waypoint_count` waypoints are drawn uniformly
/// from the map interior. Identical `(size, waypoint_count, seed)`
/// triples produce identical configurations.
pub fn random_mission(size: u32, waypoint_count: usize, seed: u64) -> MissionConfig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let draw = |rng: &mut ChaCha8Rng| {
        Coord::new(
            rng.random_range(0..size as i32),
            rng.random_range(0..size as i32),
        )
    };

    let pursuer_start = draw(&mut rng);
    let evader_start = draw(&mut rng);
    let waypoints = (0..waypoint_count).map(|_| draw(&mut rng)).collect();

    let mut config = MissionConfig::new(size, size, pursuer_start, evader_start, waypoints);
    // Enough budget to reach every waypoint even on a worst-case walk.
    config.step_budget = (size as usize) * 2 * waypoint_count.max(1);
    config
}
