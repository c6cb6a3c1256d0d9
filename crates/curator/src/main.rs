//! Curator CLI binary.
//!
//! This binary provides command-line access to Curator's functionality:
//! - Select the best candidate for a query from a JSON candidate pool
//! - Validate layered configuration
//! - Resolve provider slugs against benchmark tables

use clap::Parser;
use curator::{ObservabilityConfig, RequestContext, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, match_slug, run_selection, validate_config};

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    match cli.command {
        Commands::Select {
            candidates,
            query,
            complexity,
            query_type,
            config,
            format,
        } => {
            let context = RequestContext::new(query, complexity).with_query_type(query_type);
            run_selection(cli::SelectionArgs {
                candidates: &candidates,
                context,
                config: config.as_deref(),
                format,
            })?;
        }

        Commands::ValidateConfig { config } => {
            validate_config(config.as_deref())?;
        }

        Commands::MatchSlug {
            benchmarks,
            slug,
            format,
        } => {
            match_slug(&benchmarks, &slug, format)?;
        }
    }

    Ok(())
}
