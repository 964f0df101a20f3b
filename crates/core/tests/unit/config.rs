//! # Configuration Tests
//!
//! Argument parsing, validation, and JSON deserialization of run configs.

use pagesim_core::SimError;
use pagesim_core::config::{Algorithm, PreloadMode, SimConfig, defaults, parse_frames};
use rstest::rstest;

#[rstest]
#[case("FIFO", Algorithm::Fifo)]
#[case("LRU", Algorithm::Lru)]
#[case("Clock", Algorithm::Clock)]
fn algorithm_names_parse_exactly(#[case] name: &str, #[case] expected: Algorithm) {
    assert_eq!(name.parse::<Algorithm>().unwrap(), expected);
    assert_eq!(expected.to_string(), name);
}

#[rstest]
#[case("fifo")]
#[case("lru")]
#[case("CLOCK")]
#[case("clock")]
#[case("MRU")]
#[case("")]
fn algorithm_names_are_case_sensitive(#[case] name: &str) {
    assert!(matches!(
        name.parse::<Algorithm>(),
        Err(SimError::InvalidArgument(_))
    ));
}

#[test]
fn preload_flags() {
    assert_eq!("+".parse::<PreloadMode>().unwrap(), PreloadMode::Preload);
    assert_eq!("-".parse::<PreloadMode>().unwrap(), PreloadMode::Demand);
    assert!("*".parse::<PreloadMode>().is_err());
    assert!("++".parse::<PreloadMode>().is_err());
}

#[rstest]
#[case("0")]
#[case("-4")]
#[case("four")]
#[case("2.5")]
#[case("")]
fn bad_frame_counts_rejected(#[case] text: &str) {
    let err = parse_frames(text).unwrap_err();
    assert!(matches!(err, SimError::InvalidArgument(_)));
    assert!(err.to_string().contains("frame count"));
}

#[test]
fn any_positive_frame_count_accepted() {
    assert_eq!(parse_frames("1").unwrap(), 1);
    assert_eq!(parse_frames("3").unwrap(), 3);
    assert_eq!(parse_frames("1000").unwrap(), 1000);
}

#[test]
fn from_args_builds_full_config() {
    let config = SimConfig::from_args("plist", "ptrace", "16", "Clock", "+").unwrap();
    assert_eq!(config.frames, 16);
    assert_eq!(config.algorithm, Algorithm::Clock);
    assert_eq!(config.preload, PreloadMode::Preload);
    assert_eq!(
        config.page_list.as_deref(),
        Some(std::path::Path::new("plist"))
    );
    assert!(config.is_sweep_size());
}

#[test]
fn from_args_names_offending_argument() {
    let err = SimConfig::from_args("plist", "ptrace", "8", "Random", "-").unwrap_err();
    assert!(err.to_string().contains("Random"));

    let err = SimConfig::from_args("plist", "ptrace", "8", "LRU", "x").unwrap_err();
    assert!(err.to_string().contains("\"x\""));
}

#[test]
fn json_defaults_fill_missing_fields() {
    let config: SimConfig = serde_json::from_str(r#"{ "trace": "t.txt" }"#).unwrap();
    assert_eq!(config.frames, defaults::FRAMES);
    assert_eq!(config.algorithm, Algorithm::Lru);
    assert_eq!(config.preload, PreloadMode::Demand);
    assert_eq!(config.page_list, None);
    config.validate().unwrap();
}

#[test]
fn json_rejects_unknown_algorithm() {
    let result: Result<SimConfig, _> =
        serde_json::from_str(r#"{ "trace": "t.txt", "algorithm": "lru" }"#);
    assert!(result.is_err());
}

#[test]
fn preload_without_page_list_is_invalid() {
    let config: SimConfig =
        serde_json::from_str(r#"{ "trace": "t.txt", "preload": "+" }"#).unwrap();
    assert!(matches!(
        config.validate(),
        Err(SimError::InvalidArgument(_))
    ));
}

#[test]
fn sweep_sizes_match_harness() {
    assert_eq!(defaults::SWEEP_FRAME_SIZES, [1, 2, 4, 8, 16, 32]);
    assert!(!SimConfig::new("t", 3, Algorithm::Fifo).is_sweep_size());
}
