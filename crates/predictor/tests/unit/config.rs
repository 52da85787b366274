//! Configuration Tests.
//!
//! Covers presets, validation of each kind's sizing fields, the compact
//! `kind:fields` spec string, and JSON loading.

use bpsim_core::bru::counter::CounterState;
use bpsim_core::common::ConfigError;
use bpsim_core::config::{MAX_PERCEPTRON_BITS, MAX_TABLE_BITS, PredictorConfig, PredictorKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn default_is_static() {
    let config = PredictorConfig::default();
    assert_eq!(config.kind, PredictorKind::Static);
    assert_eq!(config.counter_init, CounterState::WeakNotTaken);
    assert!(config.validate().is_ok());
}

#[rstest]
#[case(PredictorKind::Static, "static")]
#[case(PredictorKind::Gshare, "gshare:14")]
#[case(PredictorKind::Tournament, "tournament:14:10:10")]
#[case(PredictorKind::Custom, "custom:13:29")]
fn presets(#[case] kind: PredictorKind, #[case] display: &str) {
    let config = PredictorConfig::preset(kind);
    assert_eq!(config.kind, kind);
    assert_eq!(config.to_string(), display);
    assert!(config.validate().is_ok());
}

#[rstest]
#[case("static", PredictorKind::Static)]
#[case("GShare", PredictorKind::Gshare)]
#[case(" tournament ", PredictorKind::Tournament)]
#[case("custom", PredictorKind::Custom)]
#[case("Perceptron", PredictorKind::Custom)]
fn kind_names_are_case_insensitive(#[case] name: &str, #[case] kind: PredictorKind) {
    assert_eq!(name.parse::<PredictorKind>().unwrap(), kind);
}

#[test]
fn unknown_kind_is_rejected() {
    let err = "bimodal".parse::<PredictorKind>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPredictor(ref name) if name == "bimodal"));
    assert!(err.to_string().contains("bimodal"));
}

#[test]
fn kinds_display_report_names() {
    let names: Vec<String> = PredictorKind::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["Static", "Gshare", "Tournament", "Custom"]);
}

#[rstest]
#[case("gshare:12", PredictorConfig::gshare(12))]
#[case("gshare", PredictorConfig::gshare(14))]
#[case("tournament:9:10:10", PredictorConfig::tournament(9, 10, 10))]
#[case("tournament:12", PredictorConfig::tournament(12, 10, 10))]
#[case("custom:10", PredictorConfig::custom(10, 29))]
#[case("custom:10:40", PredictorConfig::custom(10, 40))]
#[case("static", PredictorConfig::static_taken())]
fn parses_spec_strings(#[case] spec: &str, #[case] expected: PredictorConfig) {
    assert_eq!(spec.parse::<PredictorConfig>().unwrap(), expected);
}

#[test]
fn parse_does_not_validate() {
    let config: PredictorConfig = "gshare:0".parse().unwrap();
    assert_eq!(config.ghistory_bits, 0);
    assert!(config.validate().is_err());
}

#[test]
fn spec_string_errors() {
    assert!(matches!(
        "gshare:x".parse::<PredictorConfig>(),
        Err(ConfigError::InvalidField { field: "ghistory_bits", .. })
    ));
    assert!(matches!(
        "custom:12:high".parse::<PredictorConfig>(),
        Err(ConfigError::InvalidField { field: "theta", .. })
    ));
    assert!(matches!(
        "static:4".parse::<PredictorConfig>(),
        Err(ConfigError::InvalidField { field: "predictor spec", .. })
    ));
    assert!(matches!(
        "gshare:4:4".parse::<PredictorConfig>(),
        Err(ConfigError::InvalidField { field: "predictor spec", .. })
    ));
    assert!(matches!("".parse::<PredictorConfig>(), Err(ConfigError::UnknownPredictor(_))));
}

#[rstest]
#[case(PredictorConfig::gshare(0), "ghistory_bits", 0)]
#[case(PredictorConfig::gshare(-3), "ghistory_bits", -3)]
#[case(PredictorConfig::tournament(0, 10, 10), "ghistory_bits", 0)]
#[case(PredictorConfig::tournament(10, -1, 10), "lhistory_bits", -1)]
#[case(PredictorConfig::tournament(10, 10, 0), "pc_index_bits", 0)]
#[case(PredictorConfig::custom(0, 29), "ghistory_bits", 0)]
fn rejects_non_positive_sizes(
    #[case] config: PredictorConfig,
    #[case] expected_field: &str,
    #[case] expected_value: i32,
) {
    match config.validate() {
        Err(ConfigError::NonPositiveSize { kind, field, value }) => {
            assert_eq!(kind, config.kind);
            assert_eq!(field, expected_field);
            assert_eq!(value, expected_value);
        }
        other => panic!("expected NonPositiveSize, got {other:?}"),
    }
}

#[test]
fn rejects_oversized_tables() {
    assert!(PredictorConfig::gshare(MAX_TABLE_BITS).validate().is_ok());
    assert!(matches!(
        PredictorConfig::gshare(MAX_TABLE_BITS + 1).validate(),
        Err(ConfigError::SizeTooLarge { max: MAX_TABLE_BITS, .. })
    ));
    assert!(matches!(
        PredictorConfig::custom(MAX_PERCEPTRON_BITS + 1, 29).validate(),
        Err(ConfigError::SizeTooLarge { max: MAX_PERCEPTRON_BITS, .. })
    ));
}

#[test]
fn rejects_negative_theta() {
    assert!(matches!(
        PredictorConfig::custom(8, -1).validate(),
        Err(ConfigError::NegativeThreshold(-1))
    ));
    assert!(PredictorConfig::custom(8, 0).validate().is_ok());
}

/// Fields a kind does not use are never checked.
#[test]
fn unused_fields_are_ignored() {
    let gshare = PredictorConfig { lhistory_bits: -1, pc_index_bits: 0, theta: -9, ..PredictorConfig::gshare(8) };
    assert!(gshare.validate().is_ok());

    let custom = PredictorConfig { lhistory_bits: 0, ..PredictorConfig::custom(8, 10) };
    assert!(custom.validate().is_ok());
}

#[test]
fn error_messages_name_the_field() {
    let err = PredictorConfig::tournament(10, 0, 10).validate().unwrap_err();
    assert_eq!(err.to_string(), "Tournament predictor requires lhistory_bits > 0, got 0");
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let config = PredictorConfig::from_json(r#"{ "kind": "gshare", "ghistory_bits": 12 }"#).unwrap();
    assert_eq!(config, PredictorConfig::gshare(12));

    let config = PredictorConfig::from_json("{}").unwrap();
    assert_eq!(config, PredictorConfig::default());
}

#[test]
fn json_accepts_aliases_and_counter_init() {
    let json = r#"{
        "kind": "perceptron",
        "ghistory_bits": 10,
        "theta": 12,
        "counter_init": "WT"
    }"#;
    let config = PredictorConfig::from_json(json).unwrap();
    assert_eq!(config.kind, PredictorKind::Custom);
    assert_eq!(config.theta, 12);
    assert_eq!(config.counter_init, CounterState::WeakTaken);
}

#[test]
fn json_errors_are_reported() {
    assert!(matches!(PredictorConfig::from_json("{ not json"), Err(ConfigError::Json(_))));
    assert!(matches!(
        PredictorConfig::from_json(r#"{ "kind": "bimodal" }"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn with_counter_init_only_changes_start_state() {
    let base = PredictorConfig::tournament(9, 10, 10);
    let config = base.with_counter_init(CounterState::StrongTaken);
    assert_eq!(config.counter_init, CounterState::StrongTaken);
    assert_eq!(PredictorConfig { counter_init: base.counter_init, ..config }, base);
}

proptest! {
    /// Display output parses back to the same sizing for every kind.
    #[test]
    fn display_parses_back(g in 1i32..=20, l in 1i32..=20, p in 1i32..=20, theta in 0i32..200) {
        for config in [
            PredictorConfig::static_taken(),
            PredictorConfig::gshare(g),
            PredictorConfig::tournament(g, l, p),
            PredictorConfig::custom(g, theta),
        ] {
            let parsed: PredictorConfig = config.to_string().parse().unwrap();
            prop_assert_eq!(parsed, config);
        }
    }

    /// Validation accepts exactly the positive widths up to the table limit.
    #[test]
    fn gshare_width_bounds(g in -64i32..64) {
        let ok = PredictorConfig::gshare(g).validate().is_ok();
        prop_assert_eq!(ok, (1..=MAX_TABLE_BITS).contains(&g));
    }
}
