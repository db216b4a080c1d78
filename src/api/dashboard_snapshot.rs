use serde::{Deserialize, Serialize};

use crate::render::{ChartBackend, ChartSpec};

use super::{Dashboard, LeaderboardChrome, LeaderboardView};

/// Serializable deterministic state snapshot used by regression tests and
/// server-side rendering of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selected_models: Vec<String>,
    pub total_models: usize,
    pub badge: String,
    pub selection_epoch: u64,
    pub leaderboard_view: LeaderboardView,
    pub leaderboard_chrome: LeaderboardChrome,
    pub charts: Vec<ChartSpec>,
}

impl<B: ChartBackend> Dashboard<B> {
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            selected_models: self
                .selection
                .current_selection()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            total_models: self.selection.total_count(),
            badge: self.selection.badge(),
            selection_epoch: self.selection.epoch(),
            leaderboard_view: self.coordinator.leaderboard_view(),
            leaderboard_chrome: self.coordinator.leaderboard_chrome().clone(),
            charts: self.coordinator.specs().cloned().collect(),
        }
    }
}
