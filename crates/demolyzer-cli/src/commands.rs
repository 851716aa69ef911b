use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::logging::init_logging;
use anyhow::{Context, Result};
use demolyzer_engine::Analyzer;
use demolyzer_providers::source_for;
use std::path::Path;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let config = match resolve_config_path(cli.config.as_deref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load_from(&path)?
        }
        None => Config::default(),
    }
    .with_overrides(cli.tick_rate, cli.no_persist);

    let ctx = HandlerContext::new(cli.format);

    match cli.command {
        Commands::Players { input } => handlers::players::handle(&load(&input, &config)?, &ctx),
        Commands::Deaths { input } => handlers::deaths::handle(&load(&input, &config)?, &ctx),
        Commands::States { input } => handlers::states::handle(&load(&input, &config)?, &ctx),
        Commands::Angles {
            input,
            player,
            series,
        } => handlers::angles::handle(&load(&input, &config)?, player.as_deref(), series, &ctx),
        Commands::Summary { input } => handlers::summary::handle(&load(&input, &config)?, &ctx),
        Commands::Export { input, output } => {
            handlers::export::handle(&load(&input, &config)?, &output, &ctx)
        }
    }
}

fn load(input: &Path, config: &Config) -> Result<Analyzer> {
    let extractor = config.extractor.as_ref().map(|e| e.to_extractor());
    let source = source_for(input, extractor, config.persist)?;

    let table = source
        .load(input)
        .with_context(|| format!("Failed to load telemetry from {}", input.display()))?;
    debug!(source = source.id(), rows = table.len(), "loaded telemetry table");

    let analyzer = Analyzer::new(table).with_source(input.display().to_string());
    Ok(match config.tick_rate {
        Some(rate) => analyzer.with_tick_rate(rate),
        None => analyzer,
    })
}
