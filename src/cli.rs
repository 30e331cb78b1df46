use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "NBA stat threshold likelihood and similar-player recommender")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
    /// Rebuild the database from a JSON dump of provider game log rows
    Ingest {
        /// Path to the JSON dataset
        dataset: PathBuf,
    },
    /// Likelihood that a player reaches a threshold against an opponent
    Predict {
        player: String,
        /// Opponent abbreviation or full team name
        opponent: String,
        /// points, rebounds, assists, blocks or steals
        stat: String,
        threshold: f64,
        /// Number of most recent games to weigh in (defaults to 5)
        #[arg(short, long)]
        window: Option<usize>,
    },
    /// Players with a similar profile who also reach the threshold
    Similar {
        player: String,
        opponent: String,
        stat: String,
        threshold: f64,
        /// Only consider this team's roster as candidates
        #[arg(long)]
        pool_team: Option<String>,
    },
    /// Game-by-game series of one stat for a player
    Trend { player: String, stat: String },
    /// Print shell completions
    Completions { shell: Shell },
}
