use tracing::debug;

use crate::core::{Dataset, SlotId};
use crate::error::ChartResult;
use crate::extensions::{DashboardPlugin, PluginContext, PluginEvent};
use crate::render::{ChartBackend, ChartSpec};

use super::chart_coordinator::{ChartCoordinator, UpdateReport};
use super::{DashboardConfig, LeaderboardChrome, LeaderboardView, SelectionStore};

/// Main orchestration facade consumed by host pages.
///
/// `Dashboard` owns the dataset, the selection store and the chart
/// coordinator. Every selection mutation synchronously triggers a full
/// rebuild of all chart slots; there is no batching or debouncing.
pub struct Dashboard<B: ChartBackend> {
    pub(super) dataset: Dataset,
    pub(super) selection: SelectionStore,
    pub(super) coordinator: ChartCoordinator<B>,
    pub(super) plugins: Vec<Box<dyn DashboardPlugin>>,
}

impl<B: ChartBackend> Dashboard<B> {
    /// Builds the dashboard with every model selected and renders all slots once.
    pub fn new(dataset: Dataset, backend: B, config: DashboardConfig) -> ChartResult<Self> {
        let selection = SelectionStore::new(&dataset);
        let coordinator = ChartCoordinator::new(backend, config)?;
        let mut dashboard = Self {
            dataset,
            selection,
            coordinator,
            plugins: Vec::new(),
        };
        dashboard.coordinator.render_all(
            &dashboard.dataset,
            dashboard.selection.selection_set(),
        )?;
        debug!(
            models = dashboard.dataset.models().len(),
            charts = dashboard.coordinator.live_handle_count(),
            "dashboard initialized"
        );
        Ok(dashboard)
    }

    pub fn select_all(&mut self) -> ChartResult<UpdateReport> {
        self.selection.select_all();
        self.sync_charts()
    }

    pub fn deselect_all(&mut self) -> ChartResult<UpdateReport> {
        self.selection.deselect_all();
        self.sync_charts()
    }

    /// Checkbox toggle. An unknown id leaves selection and charts untouched.
    pub fn set_model(&mut self, id: &str, included: bool) -> ChartResult<UpdateReport> {
        if !self.selection.set_model(id, included) {
            return Ok(UpdateReport::default());
        }
        self.sync_charts()
    }

    /// Expands the leaderboard to every filtered model. Returns `true` on transition.
    pub fn show_all(&mut self) -> ChartResult<bool> {
        let expanded = self
            .coordinator
            .show_all(&self.dataset, self.selection.selection_set())?;
        if expanded {
            let shown = self
                .coordinator
                .last_spec(&SlotId::Leaderboard)
                .map_or(0, ChartSpec::bar_count);
            self.emit_plugin_event(PluginEvent::LeaderboardExpanded { shown });
        }
        Ok(expanded)
    }

    fn sync_charts(&mut self) -> ChartResult<UpdateReport> {
        self.emit_plugin_event(PluginEvent::SelectionChanged {
            selected: self.selection.selected_count(),
            total: self.selection.total_count(),
        });
        let report = self
            .coordinator
            .update(&self.dataset, self.selection.selection_set())?;
        for slot in &report.skipped {
            self.emit_plugin_event(PluginEvent::SlotSkipped { slot: slot.clone() });
        }
        self.emit_plugin_event(PluginEvent::Rendered {
            slots: report.rendered.len(),
        });
        Ok(report)
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }

    #[must_use]
    pub fn plugin_context(&self) -> PluginContext {
        PluginContext {
            selected_models: self.selection.selected_count(),
            total_models: self.selection.total_count(),
            selection_epoch: self.selection.epoch(),
            leaderboard_view: self.coordinator.leaderboard_view(),
            live_charts: self.coordinator.live_handle_count(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    #[must_use]
    pub fn coordinator(&self) -> &ChartCoordinator<B> {
        &self.coordinator
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.coordinator.backend()
    }

    /// `"<selected> of <total>"` badge for the filter card.
    #[must_use]
    pub fn badge(&self) -> String {
        self.selection.badge()
    }

    #[must_use]
    pub fn leaderboard_view(&self) -> LeaderboardView {
        self.coordinator.leaderboard_view()
    }

    #[must_use]
    pub fn leaderboard_chrome(&self) -> &LeaderboardChrome {
        self.coordinator.leaderboard_chrome()
    }

    #[must_use]
    pub fn chart_spec(&self, slot: &SlotId) -> Option<&ChartSpec> {
        self.coordinator.last_spec(slot)
    }
}
