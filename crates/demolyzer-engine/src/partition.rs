use crate::player_map::PlayerMap;
use demolyzer_types::{PlayerId, PlayerRecord, TelemetryTable};
use std::collections::HashMap;
use tracing::debug;

/// One player's slice of the table: display name and row offsets in table order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerRows {
    name: Option<String>,
    rows: Vec<usize>,
}

impl PlayerRows {
    /// First non-null name seen for this player, or empty if never named
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }
}

/// Index from player id to that player's rows, built in one table scan.
///
/// Rows without a player id are skipped. Both the lifecycle counts and the
/// kinematic deltas read their per-player rows through this index instead of
/// filtering the whole table once per player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerPartition {
    players: PlayerMap<PlayerRows>,
}

impl PlayerPartition {
    pub fn build(table: &TelemetryTable) -> Self {
        let mut slots: HashMap<PlayerId, usize> = HashMap::new();
        let mut entries: Vec<(PlayerId, PlayerRows)> = Vec::new();
        let mut skipped = 0usize;

        for (index, record) in table.iter().enumerate() {
            let Some(id) = &record.player_id else {
                skipped += 1;
                continue;
            };

            let slot = match slots.get(id) {
                Some(&slot) => slot,
                None => {
                    let slot = entries.len();
                    slots.insert(id.clone(), slot);
                    entries.push((id.clone(), PlayerRows::default()));
                    slot
                }
            };

            let player = &mut entries[slot].1;
            if player.name.is_none() {
                player.name = record.player_name.clone();
            }
            player.rows.push(index);
        }

        debug!(
            players = entries.len(),
            rows = table.len(),
            skipped,
            "built player partition"
        );

        let mut players = PlayerMap::new();
        for (id, rows) in entries {
            players.push(id, rows);
        }
        Self { players }
    }

    pub fn players(&self) -> &PlayerMap<PlayerRows> {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn rows_of(&self, id: &str) -> Option<&[usize]> {
        self.players.get(id).map(PlayerRows::rows)
    }

    pub fn records(&self) -> Vec<PlayerRecord> {
        self.players
            .iter()
            .map(|(id, rows)| PlayerRecord {
                player_id: id.clone(),
                player_name: rows.name().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demolyzer_testing::TableBuilder;

    #[test]
    fn test_partition_keeps_first_appearance_order() {
        let table = TableBuilder::new()
            .state(1, "B", "Alive")
            .state(1, "A", "Alive")
            .anonymous(1, "Alive")
            .state(2, "B", "Alive")
            .state(2, "A", "Death")
            .build();

        let partition = PlayerPartition::build(&table);
        let ids: Vec<&str> = partition.players().keys().map(|k| k.as_str()).collect();

        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(partition.rows_of("B"), Some(&[0, 3][..]));
        assert_eq!(partition.rows_of("A"), Some(&[1, 4][..]));
    }

    #[test]
    fn test_partition_name_is_first_non_null() {
        let mut unnamed = TableBuilder::new().state(1, "P", "Alive").build().rows()[0].clone();
        unnamed.player_name = None;

        let table = TableBuilder::new()
            .record(unnamed)
            .named_row(2, "P", "first", "Alive", 0.0, 0.0, 0.0, 0.0)
            .named_row(3, "P", "renamed", "Alive", 0.0, 0.0, 0.0, 0.0)
            .build();

        let partition = PlayerPartition::build(&table);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.records()[0].player_name, "first");
    }

    #[test]
    fn test_partition_of_anonymous_table_is_empty() {
        let table = TableBuilder::new().anonymous(1, "Alive").anonymous(2, "Alive").build();
        assert!(PlayerPartition::build(&table).is_empty());
    }
}
