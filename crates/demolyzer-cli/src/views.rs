use demolyzer_engine::{AngleDelta, DeathStats, PlayerMap, SeriesPoint, StateCounts};
use owo_colors::OwoColorize;
use std::fmt;

// --------------------------------------------------------
// Shared helpers
// --------------------------------------------------------

fn heading(f: &mut fmt::Formatter, text: &str, styled: bool) -> fmt::Result {
    if styled {
        writeln!(f, "{}", text.bold())
    } else {
        writeln!(f, "{}", text)
    }
}

fn player_label(f: &mut fmt::Formatter, id: &str, styled: bool) -> fmt::Result {
    if styled {
        write!(f, "{}", id.cyan())
    } else {
        write!(f, "{}", id)
    }
}

fn optional_count(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn degrees(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "n/a".to_string()
    }
}

// --------------------------------------------------------
// Players View
// --------------------------------------------------------

pub struct PlayersView<'a> {
    players: &'a PlayerMap<String>,
    styled: bool,
}

impl<'a> PlayersView<'a> {
    pub fn new(players: &'a PlayerMap<String>, styled: bool) -> Self {
        Self { players, styled }
    }
}

impl<'a> fmt::Display for PlayersView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        heading(f, &format!("Players ({})", self.players.len()), self.styled)?;
        for (id, name) in self.players.iter() {
            write!(f, "  ")?;
            player_label(f, id.as_str(), self.styled)?;
            writeln!(f, "  {}", name)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Death Stats View
// --------------------------------------------------------

pub struct DeathStatsView<'a> {
    stats: &'a PlayerMap<DeathStats>,
    styled: bool,
}

impl<'a> DeathStatsView<'a> {
    pub fn new(stats: &'a PlayerMap<DeathStats>, styled: bool) -> Self {
        Self { stats, styled }
    }
}

impl<'a> fmt::Display for DeathStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        heading(f, &format!("Death stats ({} players)", self.stats.len()), self.styled)?;
        for (id, stats) in self.stats.iter() {
            write!(f, "  ")?;
            player_label(f, id.as_str(), self.styled)?;
            writeln!(
                f,
                "  alive {}  death {}",
                optional_count(stats.alive_ticks),
                optional_count(stats.death_ticks)
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// States View
// --------------------------------------------------------

pub struct StatesView<'a> {
    breakdown: &'a PlayerMap<StateCounts>,
    styled: bool,
}

impl<'a> StatesView<'a> {
    pub fn new(breakdown: &'a PlayerMap<StateCounts>, styled: bool) -> Self {
        Self { breakdown, styled }
    }
}

impl<'a> fmt::Display for StatesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        heading(f, &format!("States ({} players)", self.breakdown.len()), self.styled)?;
        for (id, counts) in self.breakdown.iter() {
            write!(f, "  ")?;
            player_label(f, id.as_str(), self.styled)?;
            let parts: Vec<String> = counts
                .iter()
                .map(|(state, count)| format!("{}={}", state, count))
                .collect();
            writeln!(f, "  {}", parts.join(" "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Deltas View
// --------------------------------------------------------

pub struct DeltasView<'a> {
    deltas: &'a PlayerMap<Vec<AngleDelta>>,
    styled: bool,
}

impl<'a> DeltasView<'a> {
    pub fn new(deltas: &'a PlayerMap<Vec<AngleDelta>>, styled: bool) -> Self {
        Self { deltas, styled }
    }
}

impl<'a> fmt::Display for DeltasView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (id, sequence) in self.deltas.iter() {
            player_label(f, id.as_str(), self.styled)?;
            writeln!(f, " ({} ticks)", sequence.len())?;
            writeln!(
                f,
                "  {:>8} {:>10} {:>10} {:>10} {:>10}",
                "tick", "pitch", "view", "view(n)", "heading"
            )?;
            for d in sequence {
                writeln!(
                    f,
                    "  {:>8} {:>10} {:>10} {:>10} {:>10}",
                    d.tick,
                    degrees(d.delta_pitch),
                    degrees(d.delta_view),
                    degrees(d.delta_view_normalized),
                    degrees(d.movement_heading)
                )?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Series View
// --------------------------------------------------------

pub struct SeriesPointsView<'a> {
    points: &'a PlayerMap<Vec<SeriesPoint>>,
    label: &'a str,
    styled: bool,
}

impl<'a> SeriesPointsView<'a> {
    pub fn new(points: &'a PlayerMap<Vec<SeriesPoint>>, label: &'a str, styled: bool) -> Self {
        Self {
            points,
            label,
            styled,
        }
    }
}

impl<'a> fmt::Display for SeriesPointsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (id, points) in self.points.iter() {
            player_label(f, id.as_str(), self.styled)?;
            writeln!(f, " {} ({} ticks)", self.label, points.len())?;
            for p in points {
                writeln!(f, "  {:>8} {:>10}", p.tick, degrees(p.value))?;
            }
        }
        Ok(())
    }
}
