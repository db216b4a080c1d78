mod chart_coordinator;
mod dashboard;
mod dashboard_config;
mod dashboard_snapshot;
mod json_contract;
mod leaderboard_view;
mod plugin_registry;
mod selection_store;
mod slot_pipeline;
mod validation;

pub use chart_coordinator::{ChartCoordinator, UpdateReport};
pub use dashboard::Dashboard;
pub use dashboard_config::DashboardConfig;
pub use dashboard_snapshot::DashboardSnapshot;
pub use json_contract::{
    CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1, DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
    DashboardSnapshotJsonContractV1,
};
pub use leaderboard_view::{DEFAULT_TOP_K, LeaderboardChrome, LeaderboardView};
pub use selection_store::{SelectionSet, SelectionStore};
pub use slot_pipeline::{
    CONSERVATIVE_SERIES_LABEL, DivergingShares, LEADERBOARD_TITLE, PROGRESSIVE_SERIES_LABEL,
    RankedEntry, SCORE_SERIES_LABEL, build_diverging_spec, build_evaluation_spec,
    build_score_spec, rank_evaluation, rank_leaderboard,
};
