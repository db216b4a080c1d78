//! Per-slot filter, sort, truncate, transform and color stages.
//!
//! Every function here is pure: the same dataset, selection and view state
//! always produce the same `ChartSpec`.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tracing::trace;

use crate::core::{ColorPolicy, Dataset, Evaluation, EvaluationKind, Model, SlotId};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartOptions, ChartSeries, ChartSpec, TooltipLines};

use super::leaderboard_view::{LeaderboardChrome, LeaderboardViewState};
use super::{DashboardConfig, SelectionSet};

pub const LEADERBOARD_TITLE: &str = "Leaderboard";
pub const SCORE_SERIES_LABEL: &str = "Score";
pub const PROGRESSIVE_SERIES_LABEL: &str = "Progressive";
pub const CONSERVATIVE_SERIES_LABEL: &str = "Conservative";
const DIVERGING_STACK: &str = "orientation";

/// One model placed in a slot together with the score that ranks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    pub model: &'a Model,
    pub score: f64,
}

/// Selected models ordered by overall score, highest first.
#[must_use]
pub fn rank_leaderboard<'a>(
    dataset: &'a Dataset,
    selection: &SelectionSet,
) -> Vec<RankedEntry<'a>> {
    let mut entries: Vec<RankedEntry<'a>> = dataset
        .models()
        .iter()
        .filter(|model| selection.contains(model.id.as_str()))
        .map(|model| RankedEntry {
            model,
            score: model.overall_score,
        })
        .collect();
    sort_descending(&mut entries);
    entries
}

/// Selected models that carry a score for `evaluation`, highest first.
///
/// Models without a score are left out of this slot only.
#[must_use]
pub fn rank_evaluation<'a>(
    dataset: &'a Dataset,
    evaluation: &Evaluation,
    selection: &SelectionSet,
) -> Vec<RankedEntry<'a>> {
    let mut entries: Vec<RankedEntry<'a>> = dataset
        .models()
        .iter()
        .filter(|model| selection.contains(model.id.as_str()))
        .filter_map(|model| {
            evaluation
                .score_for(&model.id)
                .map(|score| RankedEntry { model, score })
        })
        .collect();
    sort_descending(&mut entries);
    entries
}

/// Stable sort: equal scores keep dataset model order.
fn sort_descending(entries: &mut [RankedEntry<'_>]) {
    entries.sort_by_key(|entry| Reverse(OrderedFloat(entry.score)));
}

/// Applies top-K truncation for the current view state.
#[must_use]
pub(super) fn truncate_leaderboard<'a>(
    mut entries: Vec<RankedEntry<'a>>,
    view: LeaderboardViewState,
    top_k: usize,
) -> (Vec<RankedEntry<'a>>, LeaderboardChrome) {
    let total = entries.len();
    if !view.truncates(total, top_k) {
        return (entries, LeaderboardChrome::default());
    }
    entries.truncate(top_k);
    trace!(shown = top_k, total, "leaderboard truncated");
    (entries, LeaderboardChrome::truncated(top_k, total))
}

/// Single-series bar chart on a [0, 1] axis.
#[must_use]
pub fn build_score_spec(
    slot: SlotId,
    title: &str,
    entries: &[RankedEntry<'_>],
    policy: ColorPolicy,
    config: &DashboardConfig,
) -> ChartSpec {
    let mut spec = ChartSpec::new(slot, title, ChartOptions::unit_score());
    let mut series = ChartSeries::new(SCORE_SERIES_LABEL);
    let decimals = usize::from(config.score_decimals);

    for (rank, entry) in entries.iter().enumerate() {
        spec.labels.push(entry.model.display_name.clone());
        series.push(
            entry.score,
            policy.bar_color(entry.score, rank, config.bar_opacity),
        );
        spec.tooltips.push(TooltipLines::from_iter([
            format!("Score: {:.decimals$}%", entry.score * 100.0),
            format!("Provider: {}", entry.model.provider),
        ]));
    }

    spec.with_series(series)
}

/// Two-part share of one diverging bar, in exact decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivergingShares {
    pub progressive: Decimal,
    pub conservative: Decimal,
}

impl DivergingShares {
    /// Splits a raw [0, 1] score into two shares summing to exactly 100.
    ///
    /// With `invert` the progressive share is `(1 - score) * 100` and the
    /// conservative share is `score * 100`; without it the roles swap.
    pub fn from_score(score: f64, invert: bool) -> ChartResult<Self> {
        let raw = Decimal::from_f64(score).ok_or_else(|| {
            ChartError::InvalidData(format!("score {score} cannot be represented as decimal"))
        })?;
        let complement = (Decimal::ONE - raw) * Decimal::ONE_HUNDRED;
        let direct = raw * Decimal::ONE_HUNDRED;

        Ok(if invert {
            Self {
                progressive: complement,
                conservative: direct,
            }
        } else {
            Self {
                progressive: direct,
                conservative: complement,
            }
        })
    }

    #[must_use]
    pub fn total(self) -> Decimal {
        self.progressive + self.conservative
    }

    pub fn progressive_f64(self) -> ChartResult<f64> {
        decimal_to_f64(self.progressive, "progressive share")
    }

    pub fn conservative_f64(self) -> ChartResult<f64> {
        decimal_to_f64(self.conservative, "conservative share")
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Stacked two-series chart on a [0, 100] axis.
pub fn build_diverging_spec(
    slot: SlotId,
    title: &str,
    entries: &[RankedEntry<'_>],
    invert: bool,
    config: &DashboardConfig,
) -> ChartResult<ChartSpec> {
    let mut spec = ChartSpec::new(slot, title, ChartOptions::diverging_percent());
    let mut progressive = ChartSeries::new(PROGRESSIVE_SERIES_LABEL).with_stack(DIVERGING_STACK);
    let mut conservative =
        ChartSeries::new(CONSERVATIVE_SERIES_LABEL).with_stack(DIVERGING_STACK);
    let decimals = usize::from(config.score_decimals);

    for entry in entries {
        let shares = DivergingShares::from_score(entry.score, invert)?;
        let progressive_pct = shares.progressive_f64()?;
        let conservative_pct = shares.conservative_f64()?;

        spec.labels.push(entry.model.display_name.clone());
        progressive.push(progressive_pct, config.progressive_color);
        conservative.push(conservative_pct, config.conservative_color);
        spec.tooltips.push(TooltipLines::from_iter([
            format!("Progressive: {progressive_pct:.decimals$}%"),
            format!("Conservative: {conservative_pct:.decimals$}%"),
        ]));
    }

    Ok(spec.with_series(progressive).with_series(conservative))
}

/// Builds the spec of one evaluation slot according to its kind.
pub fn build_evaluation_spec(
    dataset: &Dataset,
    evaluation: &Evaluation,
    kind: EvaluationKind,
    selection: &SelectionSet,
    config: &DashboardConfig,
) -> ChartResult<ChartSpec> {
    let entries = rank_evaluation(dataset, evaluation, selection);
    let slot = SlotId::evaluation(evaluation.id.clone());
    match kind {
        EvaluationKind::Standard => Ok(build_score_spec(
            slot,
            &evaluation.display_name,
            &entries,
            config.evaluation_color_policy,
            config,
        )),
        EvaluationKind::Diverging { invert } => {
            build_diverging_spec(slot, &evaluation.display_name, &entries, invert, config)
        }
    }
}

/// Builds the leaderboard spec and the chrome describing its truncation.
#[must_use]
pub(super) fn build_leaderboard_spec(
    dataset: &Dataset,
    selection: &SelectionSet,
    view: LeaderboardViewState,
    config: &DashboardConfig,
) -> (ChartSpec, LeaderboardChrome) {
    let ranked = rank_leaderboard(dataset, selection);
    let (shown, chrome) = truncate_leaderboard(ranked, view, config.top_k);
    let spec = build_score_spec(
        SlotId::Leaderboard,
        LEADERBOARD_TITLE,
        &shown,
        config.leaderboard_color_policy,
        config,
    );
    (spec, chrome)
}
