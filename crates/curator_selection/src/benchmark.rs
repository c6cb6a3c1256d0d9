//! Mapping provider model slugs onto external benchmark records.
//!
//! A provider's slug ("llama-3.1-8b-instant") rarely equals the benchmark
//! slug ("meta-llama-3.1-8b-instant"). Matching tries an ordered chain of
//! strategies and stops at the first hit:
//!
//! 1. Exact: slugs equal, ignoring case
//! 2. Suffix: benchmark slug ends with the provider slug
//! 3. Contains: provider slug occurs within the benchmark slug

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Intelligence indices are published on a 0-100 scale.
const INDEX_SCALE: f64 = 100.0;

/// One row of external benchmark data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct BenchmarkRecord {
    /// Benchmark slug
    slug: String,
    /// Model display name
    #[serde(default)]
    name: String,
    /// Model creator
    #[serde(default)]
    creator: Option<String>,
    /// Composite intelligence index, 0-100
    #[serde(default)]
    intelligence_index: Option<f64>,
    /// Coding index, 0-100
    #[serde(default)]
    coding_index: Option<f64>,
    /// Math index, 0-100
    #[serde(default)]
    math_index: Option<f64>,
}

impl BenchmarkRecord {
    /// Create a record with an intelligence index.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, intelligence_index: f64) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            creator: None,
            intelligence_index: Some(intelligence_index),
            coding_index: None,
            math_index: None,
        }
    }

    /// Set the creator.
    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the coding and math indices.
    #[must_use]
    pub fn with_indices(mut self, coding: Option<f64>, math: Option<f64>) -> Self {
        self.coding_index = coding;
        self.math_index = math;
        self
    }

    /// Intelligence index normalised to `[0, 1]`.
    pub fn quality_index(&self) -> Option<f64> {
        self.intelligence_index
            .map(|index| (index / INDEX_SCALE).clamp(0.0, 1.0))
    }
}

/// Which strategy produced a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Slugs equal ignoring case
    #[display("exact")]
    Exact,
    /// Benchmark slug ends with the provider slug
    #[display("suffix")]
    Suffix,
    /// Benchmark slug contains the provider slug
    #[display("contains")]
    Contains,
}

/// A single slug matching strategy.
///
/// Both slugs are passed lowercased.
pub trait SlugMatcher: Send + Sync + std::fmt::Debug {
    /// Strategy this matcher implements.
    fn strategy(&self) -> MatchStrategy;

    /// True when `benchmark_slug` matches `provider_slug`.
    fn matches(&self, provider_slug: &str, benchmark_slug: &str) -> bool;
}

/// Case-insensitive equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl SlugMatcher for ExactMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Exact
    }

    fn matches(&self, provider_slug: &str, benchmark_slug: &str) -> bool {
        provider_slug == benchmark_slug
    }
}

/// Benchmark slug ends with the provider slug.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixMatcher;

impl SlugMatcher for SuffixMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Suffix
    }

    fn matches(&self, provider_slug: &str, benchmark_slug: &str) -> bool {
        benchmark_slug.ends_with(provider_slug)
    }
}

/// Benchmark slug contains the provider slug.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsMatcher;

impl SlugMatcher for ContainsMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Contains
    }

    fn matches(&self, provider_slug: &str, benchmark_slug: &str) -> bool {
        benchmark_slug.contains(provider_slug)
    }
}

/// Default chain: exact, then suffix, then contains.
pub fn default_matchers() -> Vec<Box<dyn SlugMatcher>> {
    vec![
        Box::new(ExactMatcher),
        Box::new(SuffixMatcher),
        Box::new(ContainsMatcher),
    ]
}

/// A resolved match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlugMatch<'a> {
    /// Matched record
    pub record: &'a BenchmarkRecord,
    /// Strategy that produced the match
    pub strategy: MatchStrategy,
}

/// Benchmark records plus the matcher chain used to look them up.
///
/// ```
/// use curator_selection::{BenchmarkIndex, BenchmarkRecord, MatchStrategy};
///
/// let index = BenchmarkIndex::new(vec![
///     BenchmarkRecord::new("meta-llama-3.1-8b-instant", "Llama 3.1 8B", 28.0),
///     BenchmarkRecord::new("gpt-4o-2024-05-13", "GPT-4o", 61.0),
/// ]);
///
/// let hit = index.match_slug("llama-3.1-8b-instant").unwrap();
/// assert_eq!(hit.strategy, MatchStrategy::Suffix);
/// assert_eq!(index.quality_for("gpt-4o"), Some(0.61));
/// ```
#[derive(Debug)]
pub struct BenchmarkIndex {
    records: Vec<BenchmarkRecord>,
    matchers: Vec<Box<dyn SlugMatcher>>,
}

impl BenchmarkIndex {
    /// Index records with the default matcher chain.
    ///
    /// Records without an intelligence index are skipped.
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self::with_matchers(records, default_matchers())
    }

    /// Index records with a custom matcher chain, tried in order.
    pub fn with_matchers(records: Vec<BenchmarkRecord>, matchers: Vec<Box<dyn SlugMatcher>>) -> Self {
        let total = records.len();
        let records: Vec<_> = records
            .into_iter()
            .filter(|r| r.intelligence_index.is_some())
            .collect();
        debug!(
            kept = records.len(),
            skipped = total - records.len(),
            "Indexed benchmark records"
        );
        Self { records, matchers }
    }

    /// Indexed records.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a provider slug to a benchmark record.
    #[instrument(skip(self))]
    pub fn match_slug(&self, provider_slug: &str) -> Option<SlugMatch<'_>> {
        let provider_slug = provider_slug.trim().to_lowercase();
        if provider_slug.is_empty() {
            return None;
        }
        for matcher in &self.matchers {
            let hit = self
                .records
                .iter()
                .find(|r| matcher.matches(&provider_slug, &r.slug.to_lowercase()));
            if let Some(record) = hit {
                debug!(benchmark_slug = %record.slug, strategy = %matcher.strategy(), "Matched slug");
                return Some(SlugMatch {
                    record,
                    strategy: matcher.strategy(),
                });
            }
        }
        debug!("No benchmark match");
        None
    }

    /// Normalised quality for a provider slug, if a match exists.
    pub fn quality_for(&self, provider_slug: &str) -> Option<f64> {
        self.match_slug(provider_slug)
            .and_then(|m| m.record.quality_index())
    }
}
