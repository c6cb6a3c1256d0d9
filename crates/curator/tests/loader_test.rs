//! Loading candidate pools and benchmark tables from disk.

use curator::{
    BenchmarkIndex, CuratorConfig, CuratorErrorKind, InputErrorKind, MatchStrategy, RequestContext,
    SelectionOrchestrator, load_benchmarks, load_candidates, load_config,
};
use std::io::Write;

fn json_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write file");
    file
}

const POOL: &str = r#"[
  {
    "id": "llama-3.3-70b-versatile",
    "provider": "groq",
    "speed_class": "fast",
    "license": "llama3.3",
    "region": "us",
    "rate_limits": { "rpm": 30, "tpm": 6000 },
    "modalities": ["text"]
  },
  {
    "id": "gemini-2.0-flash",
    "provider": "google",
    "name": "Gemini 2.0 Flash",
    "quality_index": 0.82,
    "license": "proprietary",
    "modalities": ["text", "image"]
  }
]"#;

#[test]
fn test_load_and_select_from_file() {
    let file = json_file(POOL);
    let candidates = load_candidates(file.path()).expect("candidates load");
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].region(), "unknown");

    let config = CuratorConfig::bundled().expect("bundled config");
    let orchestrator = SelectionOrchestrator::from_config(&config);
    let selection = orchestrator
        .select_best(&candidates, &RequestContext::new("Summarize this", 0.5))
        .expect("selection succeeds");
    assert!(candidates.iter().any(|c| c.id() == &selection.candidate_id));
    assert!(selection.score > 0.0 && selection.score <= 1.0);
}

#[test]
fn test_invalid_candidate_rejected() {
    let file = json_file(r#"[{ "id": "x", "provider": "p", "quality_index": 4.5 }]"#);
    let err = load_candidates(file.path()).unwrap_err();
    assert!(matches!(err.kind(), CuratorErrorKind::Builder(_)));
}

#[test]
fn test_malformed_json_reports_position() {
    let file = json_file("{ not json");
    let err = load_candidates(file.path()).unwrap_err();
    match err.kind() {
        CuratorErrorKind::Input(input) => {
            assert!(matches!(input.kind(), InputErrorKind::Parse { line: 1, .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = load_candidates("/nonexistent/pool.json").unwrap_err();
    match err.kind() {
        CuratorErrorKind::Input(input) => {
            assert!(matches!(input.kind(), InputErrorKind::Read { .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_benchmark_table_resolution() {
    let file = json_file(
        r#"[
  { "slug": "meta-llama-3.1-8b-instant", "name": "Llama 3.1 8B", "creator": "Meta", "intelligence_index": 28.0 },
  { "slug": "gpt-4o-2024-05-13", "name": "GPT-4o", "intelligence_index": 61.0, "coding_index": 55.0 },
  { "slug": "mystery-model", "name": "Unscored" }
]"#,
    );
    let index = BenchmarkIndex::new(load_benchmarks(file.path()).expect("benchmarks load"));
    assert_eq!(index.len(), 2);

    let hit = index.match_slug("LLAMA-3.1-8B-INSTANT").expect("suffix match");
    assert_eq!(hit.strategy, MatchStrategy::Suffix);
    assert_eq!(hit.record.creator().as_deref(), Some("Meta"));
    assert_eq!(
        index.match_slug("gpt-4o").map(|m| m.strategy),
        Some(MatchStrategy::Contains)
    );
    assert!(index.match_slug("mystery-model").is_none());
}

#[test]
fn test_explicit_config_path_is_used() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"[scoring]\npreference_boost = 0.02\n")
        .expect("write config");
    let config = load_config(Some(file.path())).expect("config loads");
    assert_eq!(config.scoring.preference_boost, 0.02);
}
