//! Per-run mission counters.

/// Counters accumulated over one mission run.
///
/// Populated by the executor and returned inside the result; the
/// executor never reads them back for control decisions.
#[derive(Clone, Debug)]
pub struct MissionMetrics {
    /// Committed ticks executed.
    pub ticks: u64,
    /// Waypoints reached in order.
    pub waypoints_reached: u32,
    /// Property evaluations performed (both agents, all properties).
    pub properties_evaluated: u64,
    /// Ticks on which at least one agent violated a property.
    pub violation_ticks: u64,
    /// Minimum robustness observed across the whole run, `INFINITY`
    /// when nothing was evaluated.
    pub min_robustness: f64,
}

impl Default for MissionMetrics {
    fn default() -> Self {
        Self {
            ticks: 0,
            waypoints_reached: 0,
            properties_evaluated: 0,
            violation_ticks: 0,
            min_robustness: f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_empty() {
        let m = MissionMetrics::default();
        assert_eq!(m.ticks, 0);
        assert_eq!(m.waypoints_reached, 0);
        assert_eq!(m.properties_evaluated, 0);
        assert_eq!(m.violation_ticks, 0);
        assert!(m.min_robustness.is_infinite());
    }
}
