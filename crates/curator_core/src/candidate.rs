//! Selectable backend resources.

use crate::{LicenseClass, RateLimits, SpeedClass};
use curator_error::{BuilderError, BuilderErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of provider-specific extension entries on a candidate.
pub const MAX_EXTENSIONS: usize = 16;

/// A selectable backend resource.
///
/// Candidates arrive already filtered for capability match; the selection
/// core never interprets `modalities` or `extensions`, it only echoes them.
///
/// # Example
///
/// ```
/// use curator_core::{Candidate, LicenseClass, SpeedClass};
///
/// let candidate = Candidate::builder()
///     .id("groq/llama-3.1-70b-versatile")
///     .provider("groq")
///     .name("Llama 3.1 70B Versatile")
///     .speed_class(SpeedClass::Fast)
///     .license("llama3.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(candidate.provider(), "groq");
/// assert_eq!(candidate.license_class(), LicenseClass::OpenSource);
/// assert!(candidate.quality_index().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct Candidate {
    /// Stable identifier.
    id: String,

    /// Provider tag (e.g. "groq", "google").
    provider: String,

    /// Display name, inspected by the quality fallback heuristic.
    #[builder(default)]
    #[serde(default)]
    name: String,

    /// Benchmark-derived quality index in `[0, 1]`.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    quality_index: Option<f64>,

    /// Static speed class.
    #[builder(default)]
    #[serde(default)]
    speed_class: SpeedClass,

    /// Raw license identifier.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    license: Option<String>,

    /// Region tag.
    #[builder(default = "String::from(\"unknown\")")]
    #[serde(default = "default_region")]
    region: String,

    /// Candidate's own rate-limit ceilings (possibly partial).
    #[builder(default)]
    #[serde(default)]
    rate_limits: RateLimits,

    /// Declared modalities (e.g. "text", "image").
    #[builder(default)]
    #[serde(default)]
    modalities: Vec<String>,

    /// Provider-specific metadata, bounded by [`MAX_EXTENSIONS`].
    #[builder(default)]
    #[serde(default)]
    extensions: BTreeMap<String, serde_json::Value>,
}

fn default_region() -> String {
    "unknown".to_string()
}

impl Candidate {
    /// Creates a new candidate builder.
    pub fn builder() -> CandidateBuilder {
        CandidateBuilder::default()
    }

    /// License family derived from the raw identifier.
    pub fn license_class(&self) -> LicenseClass {
        LicenseClass::from_identifier(self.license.as_deref())
    }

    /// Name to use for display and heuristics; falls back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Validates invariants that deserialization cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or provider is empty, the quality index is
    /// outside `[0, 1]`, or the extension map exceeds [`MAX_EXTENSIONS`].
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.id.trim().is_empty() {
            return Err(BuilderError::new(BuilderErrorKind::MissingField(
                "id".to_string(),
            )));
        }
        if self.provider.trim().is_empty() {
            return Err(BuilderError::new(BuilderErrorKind::MissingField(
                "provider".to_string(),
            )));
        }
        if let Some(quality) = self.quality_index
            && !(0.0..=1.0).contains(&quality)
        {
            return Err(BuilderError::new(BuilderErrorKind::OutOfRange {
                field: "quality_index".to_string(),
                value: quality,
            }));
        }
        if self.extensions.len() > MAX_EXTENSIONS {
            return Err(BuilderError::new(BuilderErrorKind::TooManyExtensions {
                count: self.extensions.len(),
                max: MAX_EXTENSIONS,
            }));
        }
        Ok(())
    }
}

impl CandidateBuilder {
    /// Build and validate the candidate.
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or validation fails.
    pub fn build(&self) -> Result<Candidate, BuilderError> {
        let candidate = self
            .build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::Incomplete(e.to_string())))?;
        candidate.validate()?;
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CandidateBuilder {
        let mut builder = Candidate::builder();
        builder.id("c1").provider("groq");
        builder
    }

    #[test]
    fn test_defaults() {
        let candidate = base().build().unwrap();
        assert_eq!(candidate.region(), "unknown");
        assert_eq!(*candidate.speed_class(), SpeedClass::Medium);
        assert!(candidate.rate_limits().is_unbounded());
        assert_eq!(candidate.display_name(), "c1");
        assert_eq!(candidate.license_class(), LicenseClass::Unknown);
    }

    #[test]
    fn test_missing_provider_is_rejected() {
        let result = Candidate::builder().id("c1").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_quality_out_of_range_is_rejected() {
        let result = base().quality_index(1.2).build();
        let err = result.unwrap_err();
        assert!(matches!(err.kind(), BuilderErrorKind::OutOfRange { field, .. } if field == "quality_index"));
    }

    #[test]
    fn test_extension_map_is_bounded() {
        let extensions: BTreeMap<String, serde_json::Value> = (0..=MAX_EXTENSIONS)
            .map(|i| (format!("k{}", i), serde_json::json!(i)))
            .collect();
        assert!(base().extensions(extensions).build().is_err());

        let extensions: BTreeMap<String, serde_json::Value> = (0..MAX_EXTENSIONS)
            .map(|i| (format!("k{}", i), serde_json::json!(i)))
            .collect();
        assert!(base().extensions(extensions).build().is_ok());
    }

    #[test]
    fn test_deserialize_with_partial_fields() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"id": "m", "provider": "google", "rate_limits": {"rpm": 15}}"#,
        )
        .unwrap();
        assert_eq!(candidate.region(), "unknown");
        assert_eq!(candidate.rate_limits().rpm, Some(15));
        assert_eq!(candidate.rate_limits().rpd, None);
        assert!(candidate.validate().is_ok());
    }
}
