use serde::{Deserialize, Serialize};

use crate::core::{ColorPolicy, EvaluationKindTable, THEOLOGICAL_ORIENTATION_EVALUATION_ID};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::leaderboard_view::DEFAULT_TOP_K;
use super::validation::validate_dashboard_config;

/// Public dashboard bootstrap configuration.
///
/// This type is serializable so host pages can ship chart setup next to the
/// dataset without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_bar_opacity")]
    pub bar_opacity: f64,
    #[serde(default)]
    pub leaderboard_color_policy: ColorPolicy,
    #[serde(default)]
    pub evaluation_color_policy: ColorPolicy,
    #[serde(default = "default_diverging_evaluations")]
    pub diverging_evaluations: Vec<String>,
    #[serde(default = "default_score_decimals")]
    pub score_decimals: u8,
    #[serde(default = "default_progressive_color")]
    pub progressive_color: Color,
    #[serde(default = "default_conservative_color")]
    pub conservative_color: Color,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            top_k: default_top_k(),
            bar_opacity: default_bar_opacity(),
            leaderboard_color_policy: ColorPolicy::default(),
            evaluation_color_policy: ColorPolicy::default(),
            diverging_evaluations: default_diverging_evaluations(),
            score_decimals: default_score_decimals(),
            progressive_color: default_progressive_color(),
            conservative_color: default_conservative_color(),
        }
    }

    /// Sets the leaderboard truncation threshold.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the fill opacity used by both color policies.
    #[must_use]
    pub fn with_bar_opacity(mut self, opacity: f64) -> Self {
        self.bar_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_leaderboard_color_policy(mut self, policy: ColorPolicy) -> Self {
        self.leaderboard_color_policy = policy;
        self
    }

    #[must_use]
    pub fn with_evaluation_color_policy(mut self, policy: ColorPolicy) -> Self {
        self.evaluation_color_policy = policy;
        self
    }

    /// Replaces the set of evaluation ids drawn as diverging bars.
    #[must_use]
    pub fn with_diverging_evaluations<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diverging_evaluations = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of decimals in tooltip percentages.
    #[must_use]
    pub fn with_score_decimals(mut self, decimals: u8) -> Self {
        self.score_decimals = decimals;
        self
    }

    #[must_use]
    pub fn evaluation_kinds(&self) -> EvaluationKindTable {
        EvaluationKindTable::from_diverging_ids(self.diverging_evaluations.iter().cloned())
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_dashboard_config(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dashboard config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_bar_opacity() -> f64 {
    0.8
}

fn default_diverging_evaluations() -> Vec<String> {
    vec![THEOLOGICAL_ORIENTATION_EVALUATION_ID.to_owned()]
}

fn default_score_decimals() -> u8 {
    1
}

fn default_progressive_color() -> Color {
    Color::rgba(0.23, 0.51, 0.96, 0.8)
}

fn default_conservative_color() -> Color {
    Color::rgba(0.94, 0.27, 0.27, 0.8)
}
