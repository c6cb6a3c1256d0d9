//! Benchmark slug matching command handler.

use super::commands::OutputFormat;
use curator::{BenchmarkIndex, CuratorResult, InputError, load_benchmarks};
use std::path::Path;

/// Resolve a provider slug against a benchmark table and print the match.
pub fn match_slug(benchmarks: &Path, slug: &str, format: OutputFormat) -> CuratorResult<()> {
    let index = BenchmarkIndex::new(load_benchmarks(benchmarks)?);
    let hit = index.match_slug(slug);

    match format {
        OutputFormat::Json => {
            let value = match hit {
                Some(m) => serde_json::json!({
                    "provider_slug": slug,
                    "benchmark_slug": m.record.slug(),
                    "creator": m.record.creator(),
                    "strategy": m.strategy,
                    "quality_index": m.record.quality_index(),
                }),
                None => serde_json::json!({ "provider_slug": slug, "benchmark_slug": null }),
            };
            let json =
                serde_json::to_string_pretty(&value).map_err(InputError::encode)?;
            println!("{}", json);
        }
        OutputFormat::Human => match hit {
            Some(m) => println!(
                "{} -> {} via {} match (quality {:?})",
                slug,
                m.record.slug(),
                m.strategy,
                m.record.quality_index()
            ),
            None => println!("{}: no match in {} records (requires manual mapping)", slug, index.len()),
        },
    }
    Ok(())
}
