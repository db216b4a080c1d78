use serde::{Deserialize, Serialize};

use crate::api::LeaderboardView;
use crate::core::SlotId;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub selected_models: usize,
    pub total_models: usize,
    pub selection_epoch: u64,
    pub leaderboard_view: LeaderboardView,
    pub live_charts: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    SelectionChanged { selected: usize, total: usize },
    LeaderboardExpanded { shown: usize },
    SlotSkipped { slot: SlotId },
    Rendered { slots: usize },
}

/// Extension hook interface for page-chrome integrations.
///
/// Plugins observe events and read dashboard context without mutating the
/// selection or the chart handles directly.
pub trait DashboardPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
