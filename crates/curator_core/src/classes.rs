//! Enumerated candidate and request classifications.

use serde::{Deserialize, Serialize};

/// Static speed class of a candidate's provider.
///
/// Speed is a fixed lookup per class, not measured live latency.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SpeedClass {
    /// Low-latency inference hardware.
    #[display("fast")]
    Fast,
    /// Typical hosted inference.
    #[default]
    #[display("medium")]
    Medium,
    /// Queue-heavy or shared free tiers.
    #[display("slow")]
    Slow,
}

impl SpeedClass {
    /// Label used in selection results and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedClass::Fast => "fast",
            SpeedClass::Medium => "medium",
            SpeedClass::Slow => "slow",
        }
    }
}

impl std::str::FromStr for SpeedClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(SpeedClass::Fast),
            "medium" => Ok(SpeedClass::Medium),
            "slow" => Ok(SpeedClass::Slow),
            other => Err(format!("Unknown speed class: {}", other)),
        }
    }
}

/// License family of a candidate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LicenseClass {
    /// Open-weight / open-source license.
    #[display("open_source")]
    OpenSource,
    /// Recognized proprietary license.
    #[display("proprietary")]
    Proprietary,
    /// Absent or unrecognized license identifier.
    #[default]
    #[display("unknown")]
    Unknown,
}

const OPEN_SOURCE_PREFIXES: &[&str] = &[
    "apache", "mit", "bsd", "gpl", "lgpl", "agpl", "mpl", "cc-by", "cc0", "llama", "gemma",
    "openrail", "qwen", "deepseek",
];

const PROPRIETARY_PREFIXES: &[&str] = &["proprietary", "commercial", "closed", "restricted"];

impl LicenseClass {
    /// Classify a raw license identifier such as `apache-2.0` or `proprietary`.
    ///
    /// ```
    /// use curator_core::LicenseClass;
    ///
    /// assert_eq!(LicenseClass::from_identifier(Some("Apache-2.0")), LicenseClass::OpenSource);
    /// assert_eq!(LicenseClass::from_identifier(Some("proprietary")), LicenseClass::Proprietary);
    /// assert_eq!(LicenseClass::from_identifier(Some("custom-eula")), LicenseClass::Unknown);
    /// assert_eq!(LicenseClass::from_identifier(None), LicenseClass::Unknown);
    /// ```
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        let Some(raw) = identifier else {
            return LicenseClass::Unknown;
        };
        let id = raw.trim().to_lowercase();
        if id.is_empty() {
            return LicenseClass::Unknown;
        }
        if PROPRIETARY_PREFIXES.iter().any(|p| id.starts_with(p)) {
            return LicenseClass::Proprietary;
        }
        if OPEN_SOURCE_PREFIXES.iter().any(|p| id.starts_with(p)) {
            return LicenseClass::OpenSource;
        }
        LicenseClass::Unknown
    }

    /// Label used in configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseClass::OpenSource => "open_source",
            LicenseClass::Proprietary => "proprietary",
            LicenseClass::Unknown => "unknown",
        }
    }
}

/// Category of an incoming query, used for provider preference boosts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// General conversation.
    #[default]
    #[display("general")]
    General,
    /// Code generation or review.
    #[display("code")]
    Code,
    /// Multi-step reasoning or math.
    #[display("reasoning")]
    Reasoning,
    /// Creative writing.
    #[display("creative")]
    Creative,
    /// Summarization of supplied text.
    #[display("summarization")]
    Summarization,
    /// Image understanding.
    #[display("vision")]
    Vision,
}

impl QueryType {
    /// Lowercase label, matching configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::General => "general",
            QueryType::Code => "code",
            QueryType::Reasoning => "reasoning",
            QueryType::Creative => "creative",
            QueryType::Summarization => "summarization",
            QueryType::Vision => "vision",
        }
    }
}

impl std::str::FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(QueryType::General),
            "code" => Ok(QueryType::Code),
            "reasoning" => Ok(QueryType::Reasoning),
            "creative" => Ok(QueryType::Creative),
            "summarization" => Ok(QueryType::Summarization),
            "vision" => Ok(QueryType::Vision),
            other => Err(format!("Unknown query type: {}", other)),
        }
    }
}
