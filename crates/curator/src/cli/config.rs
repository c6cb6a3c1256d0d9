//! Configuration validation command handler.

use curator::{CuratorResult, load_config};
use std::path::Path;

/// Load configuration, validate it and print a summary.
pub fn validate_config(path: Option<&Path>) -> CuratorResult<()> {
    let config = load_config(path)?;
    let weights = &config.scoring.weights;

    println!("Configuration OK");
    println!(
        "Weights: quality {} speed {} headroom {} region {} license {}",
        weights.quality, weights.speed, weights.headroom, weights.region, weights.license
    );
    for tier in &config.admission.tiers {
        println!(
            "Complexity > {} requires headroom > {}",
            tier.min_complexity, tier.min_headroom
        );
    }

    let mut providers: Vec<_> = config.rate_limits.providers.keys().collect();
    providers.sort();
    for provider in providers {
        let limits = config.rate_limits.limits_for(provider);
        println!(
            "{}: rpm {:?} rpd {:?} tpm {:?} tpd {:?}",
            provider, limits.rpm, limits.rpd, limits.tpm, limits.tpd
        );
    }
    Ok(())
}
