use anyhow::Result;

use nba_stats_recommender::cli::Command;
use nba_stats_recommender::{
    handle_completions, handle_ingest, handle_predict, handle_serve, handle_similar, handle_trend,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Ingest { dataset } => handle_ingest(dataset),
        Command::Predict {
            player,
            opponent,
            stat,
            threshold,
            window,
        } => handle_predict(player, opponent, stat, *threshold, *window),
        Command::Similar {
            player,
            opponent,
            stat,
            threshold,
            pool_team,
        } => handle_similar(player, opponent, stat, *threshold, pool_team.as_deref()),
        Command::Trend { player, stat } => handle_trend(player, stat),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
