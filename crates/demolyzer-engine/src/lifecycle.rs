//! Per-player tick counts by lifecycle state.

use crate::partition::PlayerPartition;
use crate::player_map::PlayerMap;
use demolyzer_types::{LifecycleState, TelemetryTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ticks observed per state label, for a single player
pub type StateCounts = BTreeMap<LifecycleState, usize>;

/// Alive/death tick counts for one player.
///
/// `None` means the player was never observed in that state, which is not the
/// same as zero ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeathStats {
    pub alive_ticks: Option<usize>,
    pub death_ticks: Option<usize>,
}

impl DeathStats {
    /// Only `Alive` and `Death` are reported; other labels are dropped.
    pub fn from_counts(counts: &StateCounts) -> Self {
        Self {
            alive_ticks: counts.get(LifecycleState::ALIVE).copied(),
            death_ticks: counts.get(LifecycleState::DEATH).copied(),
        }
    }
}

pub fn count_states(table: &TelemetryTable, rows: &[usize]) -> StateCounts {
    let mut counts = StateCounts::new();
    for record in rows.iter().filter_map(|&i| table.rows().get(i)) {
        *counts.entry(record.state.clone()).or_insert(0) += 1;
    }
    counts
}

pub fn state_breakdown(table: &TelemetryTable, partition: &PlayerPartition) -> PlayerMap<StateCounts> {
    partition
        .players()
        .map_values(|player| count_states(table, player.rows()))
}

pub fn death_stats(table: &TelemetryTable, partition: &PlayerPartition) -> PlayerMap<DeathStats> {
    state_breakdown(table, partition).map_values(DeathStats::from_counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demolyzer_testing::TableBuilder;

    #[test]
    fn test_count_states_open_set() {
        let table = TableBuilder::new()
            .state(1, "P", "Alive")
            .state(2, "P", "Respawning")
            .state(3, "P", "Respawning")
            .build();

        let counts = count_states(&table, &[0, 1, 2]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("Respawning"), Some(&2));
        assert_eq!(counts.get("Alive"), Some(&1));
    }

    #[test]
    fn test_from_counts_ignores_unknown_states() {
        let mut counts = StateCounts::new();
        counts.insert(LifecycleState::from("Respawning"), 4);
        counts.insert(LifecycleState::death(), 1);

        let stats = DeathStats::from_counts(&counts);
        assert_eq!(stats.alive_ticks, None);
        assert_eq!(stats.death_ticks, Some(1));
    }

    #[test]
    fn test_no_rows_reports_absent() {
        let table = TableBuilder::new().build();
        let stats = DeathStats::from_counts(&count_states(&table, &[]));
        assert_eq!(stats, DeathStats::default());
    }

    #[test]
    fn test_out_of_range_rows_are_ignored() {
        let table = TableBuilder::new().state(1, "P", "Alive").build();
        let counts = count_states(&table, &[0, 7]);
        assert_eq!(counts.get("Alive"), Some(&1));
    }
}
