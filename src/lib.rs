pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;
use std::path::Path;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::engine::{LikelihoodBand, ThresholdEngine};
use crate::services::{IngestionService, ServerService};
use crate::store::{GameLogStore, SqliteStore};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_ingest(dataset: &Path) -> Result<()> {
    let service = IngestionService::new(AppConfig::new())?;
    let summary = service.run(dataset)?;
    println!(
        "{} {} games for {} players ({} duplicates, {} skipped)",
        "Ingested".green().bold(),
        summary.inserted,
        summary.players,
        summary.duplicates,
        summary.skipped
    );
    Ok(())
}

pub fn handle_predict(
    player: &str,
    opponent: &str,
    stat: &str,
    threshold: f64,
    window: Option<usize>,
) -> Result<()> {
    let engine = open_engine()?;
    let result = engine.estimate_likelihood(player, opponent, stat, threshold, window)?;

    let likelihood = match result.band() {
        LikelihoodBand::Unlikely => result.likelihood().as_str().red(),
        LikelihoodBand::TossUp => result.likelihood().as_str().yellow(),
        LikelihoodBand::Likely | LikelihoodBand::VeryLikely => result.likelihood().as_str().green(),
    };
    println!(
        "{} vs {}: {} >= {} → {} ({})",
        result.player.as_str().bold(),
        result.opponent,
        result.category,
        result.threshold,
        likelihood.bold(),
        result.band().as_str()
    );

    println!("\n{}", "Games vs opponent".underline());
    for game in result.vs_opponent_games() {
        println!("  {}  {:<12} {}", game.date, game.matchup(), result.category.value_of(&game.stats));
    }
    println!("\n{}", "Recent games".underline());
    for game in result.recent_games() {
        println!("  {}  {:<12} {}", game.date, game.matchup(), result.category.value_of(&game.stats));
    }
    Ok(())
}

pub fn handle_similar(
    player: &str,
    opponent: &str,
    stat: &str,
    threshold: f64,
    pool_team: Option<&str>,
) -> Result<()> {
    let engine = open_engine()?;
    let pool = match pool_team {
        Some(team) => engine.store().fetch_roster(team)?,
        None => engine.store().list_players()?,
    };

    let entries = engine.recommend_similar(player, opponent, stat, threshold, &pool)?;
    if entries.is_empty() {
        println!("{}", "No similar players clear this threshold".yellow());
    }
    for (idx, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}. {:<28} {:>6.2}  {}",
            idx + 1,
            entry.player.as_str().bold(),
            entry.score,
            entry.note.as_str().dimmed()
        );
    }
    Ok(())
}

pub fn handle_trend(player: &str, stat: &str) -> Result<()> {
    let engine = open_engine()?;
    let series = engine.get_trend(player, stat)?;

    println!("{} {} ({} games)", series.player.as_str().bold(), series.category, series.len());
    for point in &series.points {
        println!("  {}  {}", point.date, point.value);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_engine() -> Result<ThresholdEngine<SqliteStore>> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.database_path)?;
    Ok(ThresholdEngine::new(store, config.engine))
}
