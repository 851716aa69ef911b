use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque, stable player identifier (a Steam ID in practice)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Per-tick lifecycle label.
///
/// Kept as an open set: recordings may carry states beyond `Alive` and `Death`,
/// so the label is stored verbatim and compared by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifecycleState(String);

impl LifecycleState {
    pub const ALIVE: &'static str = "Alive";
    pub const DEATH: &'static str = "Death";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn alive() -> Self {
        Self::new(Self::ALIVE)
    }

    pub fn death() -> Self {
        Self::new(Self::DEATH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_alive(&self) -> bool {
        self.0 == Self::ALIVE
    }

    pub fn is_death(&self) -> bool {
        self.0 == Self::DEATH
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LifecycleState {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LifecycleState {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Planar position in world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One (tick, player) observation.
///
/// Angles are degrees as stored by the recording and are not bounded to any range.
/// Missing numeric data is carried as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: i64,
    pub player_id: Option<PlayerId>,
    pub player_name: Option<String>,
    pub state: LifecycleState,
    pub pitch: f64,
    pub view: f64,
    pub position: Position,
}

/// A player identity resolved from a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub player_name: String,
}
