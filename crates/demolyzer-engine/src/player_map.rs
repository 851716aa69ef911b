use demolyzer_types::PlayerId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered mapping keyed by player.
///
/// Order is first appearance in the source table. Serializes as a JSON object
/// with keys in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMap<V> {
    entries: Vec<(PlayerId, V)>,
}

impl<V> Default for PlayerMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> PlayerMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller guarantees `id` is not already present.
    pub(crate) fn push(&mut self, id: PlayerId, value: V) {
        self.entries.push((id, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Linear scan: a match has a handful of players.
    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PlayerId> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn map_values<U>(&self, mut f: impl FnMut(&V) -> U) -> PlayerMap<U> {
        PlayerMap {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value)))
                .collect(),
        }
    }

    /// Keep only the entry for `id`, if present.
    pub fn retain_player(mut self, id: &str) -> Self {
        self.entries.retain(|(key, _)| key.as_str() == id);
        self
    }
}

impl<V> IntoIterator for PlayerMap<V> {
    type Item = (PlayerId, V);
    type IntoIter = std::vec::IntoIter<(PlayerId, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for PlayerMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
