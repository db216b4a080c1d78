use benchboard::ChartError;
use benchboard::api::DashboardConfig;
use benchboard::core::{ColorPolicy, EvaluationKind, THEOLOGICAL_ORIENTATION_EVALUATION_ID};

#[test]
fn default_config_marks_theological_orientation_as_diverging() {
    let kinds = DashboardConfig::default().evaluation_kinds();
    assert_eq!(
        kinds.kind_of(THEOLOGICAL_ORIENTATION_EVALUATION_ID),
        EvaluationKind::Diverging { invert: true }
    );
    assert_eq!(kinds.kind_of("doctrine"), EvaluationKind::Standard);
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = DashboardConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn json_overrides_are_applied() {
    let config = DashboardConfig::from_json_str(
        r#"{
            "top_k": 10,
            "bar_opacity": 0.5,
            "leaderboard_color_policy": "PaletteRotation",
            "diverging_evaluations": ["politics"],
            "score_decimals": 2
        }"#,
    )
    .expect("config");

    assert_eq!(config.top_k, 10);
    assert_eq!(config.bar_opacity, 0.5);
    assert_eq!(config.leaderboard_color_policy, ColorPolicy::PaletteRotation);
    assert_eq!(config.evaluation_color_policy, ColorPolicy::ScoreLinear);
    assert_eq!(
        config.evaluation_kinds().kind_of("politics"),
        EvaluationKind::Diverging { invert: true }
    );
    assert_eq!(
        config
            .evaluation_kinds()
            .kind_of(THEOLOGICAL_ORIENTATION_EVALUATION_ID),
        EvaluationKind::Standard
    );
}

#[test]
fn json_config_is_validated() {
    let err = DashboardConfig::from_json_str(r#"{"score_decimals": 9}"#)
        .expect_err("too many decimals");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(DashboardConfig::from_json_str(r#"{"top_k": 0}"#).is_err());
}

#[test]
fn config_roundtrips_through_json() {
    let config = DashboardConfig::new()
        .with_top_k(7)
        .with_evaluation_color_policy(ColorPolicy::PaletteRotation)
        .with_score_decimals(0);
    let json = serde_json::to_string(&config).expect("serialize");
    let restored = DashboardConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}
