use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{Dataset, EvaluationKindTable, SlotId};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartBackend, ChartHandle, ChartSpec};

use super::leaderboard_view::{LeaderboardChrome, LeaderboardView, LeaderboardViewState};
use super::slot_pipeline::{build_evaluation_spec, build_leaderboard_spec, rank_leaderboard};
use super::{DashboardConfig, SelectionSet};

/// Slots touched by one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateReport {
    pub rendered: Vec<SlotId>,
    pub skipped: Vec<SlotId>,
}

/// Maps dataset + selection + leaderboard view onto one live chart per slot.
///
/// Every pass is a full rebuild. A slot's previous handle is always destroyed
/// before its replacement is created, so a slot never owns two live charts.
pub struct ChartCoordinator<B: ChartBackend> {
    backend: B,
    config: DashboardConfig,
    kinds: EvaluationKindTable,
    handles: IndexMap<SlotId, B::Handle>,
    specs: IndexMap<SlotId, ChartSpec>,
    leaderboard: LeaderboardViewState,
    chrome: LeaderboardChrome,
}

impl<B: ChartBackend> ChartCoordinator<B> {
    pub fn new(backend: B, config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        let kinds = config.evaluation_kinds();
        Ok(Self {
            backend,
            config,
            kinds,
            handles: IndexMap::new(),
            specs: IndexMap::new(),
            leaderboard: LeaderboardViewState::default(),
            chrome: LeaderboardChrome::default(),
        })
    }

    /// Selection-change entry point: collapses the leaderboard, then rebuilds every slot.
    pub fn update(
        &mut self,
        dataset: &Dataset,
        selection: &SelectionSet,
    ) -> ChartResult<UpdateReport> {
        self.leaderboard.on_selection_changed();
        self.render_all(dataset, selection)
    }

    /// Rebuilds every slot with the current view state.
    pub fn render_all(
        &mut self,
        dataset: &Dataset,
        selection: &SelectionSet,
    ) -> ChartResult<UpdateReport> {
        debug!(
            selected = selection.len(),
            evaluations = dataset.evaluations().len(),
            view = ?self.leaderboard.view(),
            "rendering all chart slots"
        );

        let mut report = UpdateReport::default();
        let mut first_error: Option<ChartError> = None;

        let (leaderboard_spec, chrome) =
            build_leaderboard_spec(dataset, selection, self.leaderboard, &self.config);
        self.chrome = chrome;
        self.publish_into(leaderboard_spec, &mut report, &mut first_error);

        for evaluation in dataset.evaluations() {
            let kind = self.kinds.kind_of(&evaluation.id);
            match build_evaluation_spec(dataset, evaluation, kind, selection, &self.config) {
                Ok(spec) => self.publish_into(spec, &mut report, &mut first_error),
                Err(err) => {
                    warn!(evaluation = %evaluation.id, error = %err, "failed to build chart spec");
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(report),
        }
    }

    /// Handles the leaderboard "show all" request.
    ///
    /// Returns `false` without re-rendering when nothing is hidden or the
    /// leaderboard is already expanded.
    pub fn show_all(&mut self, dataset: &Dataset, selection: &SelectionSet) -> ChartResult<bool> {
        let filtered = rank_leaderboard(dataset, selection).len();
        if !self.leaderboard.request_show_all(filtered, self.config.top_k) {
            trace!(filtered, "show-all ignored");
            return Ok(false);
        }

        let (spec, chrome) =
            build_leaderboard_spec(dataset, selection, self.leaderboard, &self.config);
        self.chrome = chrome;
        let mut report = UpdateReport::default();
        let mut first_error = None;
        self.publish_into(spec, &mut report, &mut first_error);
        match first_error {
            Some(err) => Err(err),
            None => Ok(true),
        }
    }

    fn publish_into(
        &mut self,
        spec: ChartSpec,
        report: &mut UpdateReport,
        first_error: &mut Option<ChartError>,
    ) {
        let slot = spec.slot.clone();
        match self.publish(spec) {
            Ok(true) => report.rendered.push(slot),
            Ok(false) => report.skipped.push(slot),
            Err(err) => {
                warn!(slot = %slot, error = %err, "chart backend failed");
                first_error.get_or_insert(err);
            }
        }
    }

    /// Destroys the slot's live chart, then creates its replacement.
    ///
    /// Returns `Ok(false)` when the slot's canvas is absent.
    fn publish(&mut self, spec: ChartSpec) -> ChartResult<bool> {
        let slot = spec.slot.clone();
        if let Some(previous) = self.handles.shift_remove(&slot) {
            previous.destroy();
        }
        self.specs.shift_remove(&slot);

        let canvas_id = slot.canvas_id();
        if !self.backend.has_canvas(&canvas_id) {
            warn!(slot = %slot, canvas = %canvas_id, "chart canvas not found, skipping slot");
            return Ok(false);
        }

        let handle = self.backend.create_chart(&canvas_id, &spec)?;
        trace!(slot = %slot, bars = spec.bar_count(), "chart published");
        debug_assert!(!self.handles.contains_key(&slot));
        self.handles.insert(slot.clone(), handle);
        self.specs.insert(slot, spec);
        Ok(true)
    }

    /// Destroys every live chart.
    pub fn destroy_all(&mut self) {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain(..) {
            handle.destroy();
        }
        self.specs.clear();
        if count > 0 {
            debug!(count, "destroyed all chart handles");
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn handle(&self, slot: &SlotId) -> Option<&B::Handle> {
        self.handles.get(slot)
    }

    #[must_use]
    pub fn live_handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Spec behind the slot's live chart.
    #[must_use]
    pub fn last_spec(&self, slot: &SlotId) -> Option<&ChartSpec> {
        self.specs.get(slot)
    }

    /// Specs of all live charts in render order.
    pub fn specs(&self) -> impl Iterator<Item = &ChartSpec> {
        self.specs.values()
    }

    #[must_use]
    pub fn leaderboard_view(&self) -> LeaderboardView {
        self.leaderboard.view()
    }

    #[must_use]
    pub fn leaderboard_chrome(&self) -> &LeaderboardChrome {
        &self.chrome
    }
}

impl<B: ChartBackend> Drop for ChartCoordinator<B> {
    fn drop(&mut self) {
        self.destroy_all();
    }
}
