use anyhow::{Context, Result};
use demolyzer_providers::CommandExtractor;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DEMOLYZER_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/demolyzer/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("DEMOLYZER_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("demolyzer").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractorConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ExtractorConfig {
    pub fn to_extractor(&self) -> CommandExtractor {
        CommandExtractor::new(self.program.clone(), self.args.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Ticks per second of recordings; without it the duration is not computed
    #[serde(default)]
    pub tick_rate: Option<f64>,

    /// Keep extracted tables next to recordings
    #[serde(default = "default_persist")]
    pub persist: bool,

    #[serde(default)]
    pub extractor: Option<ExtractorConfig>,
}

fn default_persist() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: None,
            persist: default_persist(),
            extractor: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Command-line values take precedence over the file
    pub fn with_overrides(mut self, tick_rate: Option<f64>, no_persist: bool) -> Self {
        if tick_rate.is_some() {
            self.tick_rate = tick_rate;
        }
        if no_persist {
            self.persist = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/demolyzer.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.persist);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
tick_rate = 64.0
persist = false

[extractor]
program = "demo2csv"
args = ["--in", "{input}"]
"#,
        )
        .unwrap();

        assert_eq!(config.tick_rate, Some(64.0));
        assert!(!config.persist);
        let extractor = config.extractor.unwrap();
        assert_eq!(extractor.program, "demo2csv");
        assert_eq!(extractor.to_extractor().program(), "demo2csv");
    }

    #[test]
    fn test_overrides() {
        let config = Config {
            tick_rate: Some(64.0),
            ..Config::default()
        }
        .with_overrides(Some(128.0), true);

        assert_eq!(config.tick_rate, Some(128.0));
        assert!(!config.persist);
    }
}
