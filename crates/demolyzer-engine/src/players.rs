use crate::partition::PlayerPartition;
use crate::player_map::PlayerMap;

/// Player id to display name, in first-appearance order
pub fn player_names(partition: &PlayerPartition) -> PlayerMap<String> {
    partition.players().map_values(|rows| rows.name().to_string())
}
