use serde::Serialize;
use std::fmt;

/// Match length, when it can be derived.
///
/// Recordings do not carry their own duration. It is only computed when a tick
/// rate is supplied from outside (config or command line); otherwise it stays
/// `NotComputed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchDuration {
    NotComputed,
    Computed { seconds: f64 },
}

impl MatchDuration {
    pub fn from_ticks(max_tick: Option<i64>, tick_rate: Option<f64>) -> Self {
        match (max_tick, tick_rate) {
            (Some(max_tick), Some(rate)) if rate.is_finite() && rate > 0.0 => {
                MatchDuration::Computed {
                    seconds: max_tick as f64 / rate,
                }
            }
            _ => MatchDuration::NotComputed,
        }
    }

    pub fn seconds(&self) -> Option<f64> {
        match self {
            MatchDuration::NotComputed => None,
            MatchDuration::Computed { seconds } => Some(*seconds),
        }
    }
}

impl fmt::Display for MatchDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchDuration::NotComputed => write!(f, "not computed"),
            MatchDuration::Computed { seconds } => write!(f, "{:.2}s", seconds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub source: String,
    pub player_count: usize,
    pub duration: MatchDuration,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} players and duration of {}",
            self.source, self.player_count, self.duration
        )
    }
}
