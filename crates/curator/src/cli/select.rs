//! Selection command handler.

use super::commands::OutputFormat;
use curator::{
    CuratorResult, InputError, RequestContext, SelectionOrchestrator, load_candidates, load_config,
};
use std::path::Path;
use tracing::info;

/// Options for a single selection run.
#[derive(Debug)]
pub struct SelectionArgs<'a> {
    /// Candidate pool file
    pub candidates: &'a Path,
    /// Request context
    pub context: RequestContext,
    /// Optional configuration file
    pub config: Option<&'a Path>,
    /// Output format
    pub format: OutputFormat,
}

/// Run one selection and print the result.
pub fn run_selection(args: SelectionArgs<'_>) -> CuratorResult<()> {
    let config = load_config(args.config)?;
    let candidates = load_candidates(args.candidates)?;
    info!(count = candidates.len(), "Loaded candidate pool");

    let orchestrator = SelectionOrchestrator::from_config(&config);
    let selection = orchestrator.select_best(&candidates, &args.context)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&selection)
                .map_err(InputError::encode)?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Selected: {} ({})", selection.candidate_id, selection.provider);
            println!("{:-<60}", "");
            println!("Score:      {:.3}", selection.score);
            println!("Quality:    {:.3}", selection.quality);
            println!("Headroom:   {:.3}", selection.headroom);
            println!("Speed:      {}", selection.speed_label());
            println!("License:    {}", selection.license_class);
            if !selection.modalities.is_empty() {
                println!("Modalities: {}", selection.modalities.join(", "));
            }
            println!("Why:        {}", selection.explanation);
        }
    }

    Ok(())
}
