//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use curator::QueryType;
use std::path::PathBuf;

/// Curator - capacity-aware candidate selection
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(about = "Pick the best rate-limited backend for a request", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the best candidate for a query
    Select {
        /// JSON file containing an array of candidates
        #[arg(long)]
        candidates: PathBuf,

        /// Query text, used for token estimation
        #[arg(long)]
        query: String,

        /// Request complexity in [0, 1]
        #[arg(long)]
        complexity: f64,

        /// Query category for provider preferences
        #[arg(long, default_value = "general", value_parser = parse_query_type)]
        query_type: QueryType,

        /// Configuration file (defaults to layered curator.toml lookup)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Load and validate configuration
    ValidateConfig {
        /// Configuration file (defaults to layered curator.toml lookup)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show which benchmark slug a provider slug resolves to
    MatchSlug {
        /// JSON file containing an array of benchmark records
        #[arg(long)]
        benchmarks: PathBuf,

        /// Provider model slug to resolve
        slug: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

fn parse_query_type(s: &str) -> Result<QueryType, String> {
    s.parse()
}
