//! Configuration for scoring, admission and default rate limits.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (curator.toml shipped with the library)
//! 2. `~/.config/curator/curator.toml`
//! 3. `./curator.toml`
//!
//! User files are optional. The merged result is validated once after load.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use curator_core::{LicenseClass, QueryType, SpeedClass};
use curator_error::{ConfigError, CuratorError, CuratorResult};
use curator_rate_limit::ProviderLimitsConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Tolerance for the weight sum check.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../curator.toml");

/// Relative weight of each score component. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Quality weight
    pub quality: f64,
    /// Speed weight
    pub speed: f64,
    /// Headroom weight
    pub headroom: f64,
    /// Region weight
    pub region: f64,
    /// License weight
    pub license: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            quality: 0.35,
            speed: 0.25,
            headroom: 0.25,
            region: 0.10,
            license: 0.05,
        }
    }
}

impl ScoringWeights {
    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.quality + self.speed + self.headroom + self.region + self.license
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("quality", self.quality),
            ("speed", self.speed),
            ("headroom", self.headroom),
            ("region", self.region),
            ("license", self.license),
        ]
    }
}

/// Score per speed class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedScores {
    /// Fast class
    pub fast: f64,
    /// Medium class
    pub medium: f64,
    /// Slow class
    pub slow: f64,
}

impl Default for SpeedScores {
    fn default() -> Self {
        Self {
            fast: 1.0,
            medium: 0.8,
            slow: 0.6,
        }
    }
}

impl SpeedScores {
    /// Score for a speed class.
    pub fn score(&self, class: SpeedClass) -> f64 {
        match class {
            SpeedClass::Fast => self.fast,
            SpeedClass::Medium => self.medium,
            SpeedClass::Slow => self.slow,
        }
    }
}

/// Score per license class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LicenseScores {
    /// Open-source licenses
    pub open_source: f64,
    /// Proprietary licenses
    pub proprietary: f64,
    /// Missing or unrecognised licenses
    pub unknown: f64,
}

impl Default for LicenseScores {
    fn default() -> Self {
        Self {
            open_source: 1.0,
            proprietary: 0.5,
            unknown: 0.75,
        }
    }
}

impl LicenseScores {
    /// Score for a license class.
    pub fn score(&self, class: LicenseClass) -> f64 {
        match class {
            LicenseClass::OpenSource => self.open_source,
            LicenseClass::Proprietary => self.proprietary,
            LicenseClass::Unknown => self.unknown,
        }
    }
}

/// Score per region tag, with a fallback for unlisted regions.
///
/// # Example
///
/// ```toml
/// [scoring.region]
/// default = 0.5
///
/// [scoring.region.scores]
/// us = 1.0
/// eu = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionScores {
    /// Score for regions not in `scores`
    #[serde(default = "default_region_score")]
    pub default: f64,
    /// Region tag (lowercase) to score
    #[serde(default)]
    pub scores: HashMap<String, f64>,
}

/// Lowercase map keys, letting mixed-case spellings win collisions.
fn lowercase_keys<V>(map: HashMap<String, V>) -> HashMap<String, V> {
    let (lower, mixed): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(key, _)| *key == key.to_lowercase());
    lower
        .into_iter()
        .chain(mixed)
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}

fn default_region_score() -> f64 {
    0.5
}

impl Default for RegionScores {
    fn default() -> Self {
        Self {
            default: default_region_score(),
            scores: HashMap::new(),
        }
    }
}

impl RegionScores {
    /// Score for a region tag (case-insensitive).
    pub fn score(&self, region: &str) -> f64 {
        self.scores
            .get(&region.to_lowercase())
            .copied()
            .unwrap_or(self.default)
    }
}

/// Everything the score engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Component weights
    #[serde(default)]
    pub weights: ScoringWeights,
    /// Speed class table
    #[serde(default)]
    pub speed: SpeedScores,
    /// License class table
    #[serde(default)]
    pub license: LicenseScores,
    /// Region table
    #[serde(default)]
    pub region: RegionScores,
    /// Added to the total for preferred providers, capped at 1.0
    #[serde(default = "default_preference_boost")]
    pub preference_boost: f64,
    /// Query type (e.g. "code") to preferred provider tags
    #[serde(default)]
    pub preferences: HashMap<String, Vec<String>>,
}

fn default_preference_boost() -> f64 {
    0.05
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            speed: SpeedScores::default(),
            license: LicenseScores::default(),
            region: RegionScores::default(),
            preference_boost: default_preference_boost(),
            preferences: HashMap::new(),
        }
    }
}

impl ScoringConfig {
    /// True when `provider` is preferred for `query_type`.
    pub fn is_preferred(&self, provider: &str, query_type: QueryType) -> bool {
        self.preferences
            .get(query_type.as_str())
            .is_some_and(|providers| providers.iter().any(|p| p.eq_ignore_ascii_case(provider)))
    }

    /// Check weights and table values.
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is negative, the weights do not sum to
    /// 1.0, or any table value or the boost lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, weight) in self.weights.named() {
            if !(weight >= 0.0) {
                return Err(ConfigError::for_key(
                    format!("scoring.weights.{}", name),
                    format!("must be non-negative, got {}", weight),
                ));
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(ConfigError::for_key(
                "scoring.weights",
                format!("weights must sum to 1.0, got {}", sum),
            ));
        }

        let mut values = vec![
            ("speed.fast".to_string(), self.speed.fast),
            ("speed.medium".to_string(), self.speed.medium),
            ("speed.slow".to_string(), self.speed.slow),
            ("license.open_source".to_string(), self.license.open_source),
            ("license.proprietary".to_string(), self.license.proprietary),
            ("license.unknown".to_string(), self.license.unknown),
            ("region.default".to_string(), self.region.default),
            ("preference_boost".to_string(), self.preference_boost),
        ];
        values.extend(
            self.region
                .scores
                .iter()
                .map(|(region, score)| (format!("region.scores.{}", region), *score)),
        );
        if let Some((name, value)) = values.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(ConfigError::for_key(
                format!("scoring.{}", name),
                format!("must be within [0, 1], got {}", value),
            ));
        }

        for query_type in self.preferences.keys() {
            query_type
                .parse::<QueryType>()
                .map_err(|e| ConfigError::for_key(format!("scoring.preferences.{}", query_type), e))?;
        }
        Ok(())
    }
}

/// One complexity tier: requests above `min_complexity` need headroom above
/// `min_headroom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdmissionTier {
    /// Complexity must exceed this for the tier to apply
    pub min_complexity: f64,
    /// Headroom must exceed this to be admitted
    pub min_headroom: f64,
}

/// Complexity tiers for the capacity gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Tiers ordered by `min_complexity`, highest first
    pub tiers: Vec<AdmissionTier>,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                AdmissionTier {
                    min_complexity: 0.7,
                    min_headroom: 0.6,
                },
                AdmissionTier {
                    min_complexity: 0.4,
                    min_headroom: 0.3,
                },
            ],
        }
    }
}

impl AdmissionConfig {
    /// Check tier values and ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if a tier value lies outside `[0, 1]`, or tiers are
    /// not strictly descending in complexity and non-increasing in headroom.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in &self.tiers {
            if !(0.0..=1.0).contains(&tier.min_complexity) || !(0.0..=1.0).contains(&tier.min_headroom)
            {
                return Err(ConfigError::for_key(
                    "admission.tiers",
                    format!(
                        "tier values must be within [0, 1], got complexity {} headroom {}",
                        tier.min_complexity, tier.min_headroom
                    ),
                ));
            }
        }
        for pair in self.tiers.windows(2) {
            if pair[0].min_complexity <= pair[1].min_complexity {
                return Err(ConfigError::for_key(
                    "admission.tiers",
                    "tiers must be ordered by descending complexity",
                ));
            }
            if pair[0].min_headroom < pair[1].min_headroom {
                return Err(ConfigError::for_key(
                    "admission.tiers",
                    "higher complexity tiers cannot require less headroom",
                ));
            }
        }
        Ok(())
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Score engine settings
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Capacity gate settings
    #[serde(default)]
    pub admission: AdmissionConfig,
    /// Per-provider default rate limits
    #[serde(default)]
    pub rate_limits: ProviderLimitsConfig,
}

impl CuratorConfig {
    /// Load a single configuration file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CuratorResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence: current dir > home dir > bundled.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use curator_selection::CuratorConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = CuratorConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> CuratorResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/curator/curator.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("curator").required(false));
        Self::finish(builder)
    }

    /// Bundled defaults only, ignoring user files.
    pub fn bundled() -> CuratorResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> CuratorResult<Self> {
        let mut config: Self = builder
            .build()
            .map_err(|e| {
                CuratorError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CuratorError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.normalize_keys();
        config.validate()?;
        Ok(config)
    }

    /// Lowercase region, preference and provider keys.
    ///
    /// The loader keeps key case as written, while every lookup is
    /// case-insensitive against lowercase keys.
    pub fn normalize_keys(&mut self) {
        let scoring = &mut self.scoring;
        scoring.region.scores = lowercase_keys(std::mem::take(&mut scoring.region.scores));
        scoring.preferences = lowercase_keys(std::mem::take(&mut scoring.preferences));
        self.rate_limits.normalize_keys();
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.admission.validate()?;
        Ok(())
    }
}
