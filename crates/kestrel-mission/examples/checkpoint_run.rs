//! Checkpoint flight: a complete mission from scratch.
//!
//! Demonstrates:
//!   1. Building a MissionConfig (20x20 map, two waypoints)
//!   2. Attaching a live step-event observer
//!   3. Running the mission to completion
//!   4. Reading traces, messages, and metrics from the result
//!
//! Run with:
//!   cargo run --example checkpoint_run

use kestrel_core::Coord;
use kestrel_mission::{MissionConfig, MissionExecutor, MissionStatus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Kestrel checkpoint flight ===\n");

    // 1. Configure: 20x20 map, pursuer from (1,10) through two
    //    waypoints, evader shadowing from (1,1). Step budget 30,
    //    lookahead horizon 4, boundary-margin properties (all
    //    defaults).
    let config = MissionConfig::new(
        20,
        20,
        Coord::new(1, 10),
        Coord::new(1, 1),
        vec![Coord::new(10, 19), Coord::new(19, 1)],
    );
    println!(
        "Map: {}x{}, waypoints: {:?}",
        config.width,
        config.height,
        config.waypoints.iter().map(Coord::to_string).collect::<Vec<_>>(),
    );

    // 2. Attach a live observer so each committed step streams out as
    //    it happens.
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut executor = MissionExecutor::with_default_monitor(config)?;
    executor.observe(tx);

    // 3. Run to completion.
    let result = executor.run()?;

    // 4. Replay the streamed events.
    println!("\nStep stream:");
    for event in rx.try_iter() {
        println!(
            "  tick {:>2}: pursuer {} evader {}  | {}",
            event.tick,
            event.pursuer,
            event.evader,
            event.message.trim_end(),
        );
    }

    // 5. Summarize the result.
    println!("\nTerminal: {}", result.messages.last().map(String::as_str).unwrap_or(""));
    match result.status {
        MissionStatus::Completed => println!("Status: completed"),
        MissionStatus::Aborted => println!("Status: aborted (budget exhausted)"),
    }
    println!(
        "Ticks: {}, waypoints reached: {}, violation ticks: {}, min robustness: {:.4}",
        result.metrics.ticks,
        result.metrics.waypoints_reached,
        result.metrics.violation_ticks,
        result.metrics.min_robustness,
    );
    println!(
        "Pursuer path: {} -> {}",
        result.pursuer.executed.first().map(|c| c.to_string()).unwrap_or_default(),
        result.pursuer.executed.last().map(|c| c.to_string()).unwrap_or_default(),
    );
    println!(
        "Evader path:  {} -> {}",
        result.evader.executed.first().map(|c| c.to_string()).unwrap_or_default(),
        result.evader.executed.last().map(|c| c.to_string()).unwrap_or_default(),
    );

    Ok(())
}
