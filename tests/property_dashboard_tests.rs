use benchboard::api::{
    ChartCoordinator, Dashboard, DashboardConfig, DivergingShares, LeaderboardView,
    SCORE_SERIES_LABEL, SelectionSet,
};
use benchboard::core::{Dataset, Evaluation, Model, SlotId};
use benchboard::render::NullChartBackend;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn build_dataset(overall: &[f64], scored: &[Option<f64>]) -> Dataset {
    let models = overall
        .iter()
        .enumerate()
        .map(|(i, score)| Model::new(format!("m{i:02}"), format!("Model {i:02}"), "P", *score))
        .collect();
    let mut evaluation = Evaluation::new("doctrine", "Doctrine");
    for (i, score) in scored.iter().enumerate().take(overall.len()) {
        if let Some(score) = score {
            evaluation = evaluation.with_score(format!("m{i:02}"), *score);
        }
    }
    Dataset::new(models, vec![evaluation]).expect("generated dataset")
}

fn selection_from_mask(dataset: &Dataset, mask: &[bool]) -> SelectionSet {
    dataset
        .model_ids()
        .zip(mask.iter().chain(std::iter::repeat(&true)))
        .filter(|(_, keep)| **keep)
        .map(|(id, _)| id.to_owned())
        .collect()
}

proptest! {
    #[test]
    fn diverging_shares_always_sum_to_exactly_one_hundred(score in 0.0f64..=1.0) {
        let shares = DivergingShares::from_score(score, true).expect("shares");
        prop_assert_eq!(shares.total(), Decimal::ONE_HUNDRED);
        prop_assert!(shares.progressive >= Decimal::ZERO);
        prop_assert!(shares.conservative >= Decimal::ZERO);
    }

    #[test]
    fn render_pipeline_is_idempotent_for_any_selection(
        overall in prop::collection::vec(0.0f64..=1.0, 0..30),
        scored in prop::collection::vec(prop::option::of(0.0f64..=1.0), 30),
        mask in prop::collection::vec(any::<bool>(), 30)
    ) {
        let dataset = build_dataset(&overall, &scored);
        let selection = selection_from_mask(&dataset, &mask);
        let mut coordinator =
            ChartCoordinator::new(NullChartBackend::new(), DashboardConfig::default())
                .expect("coordinator");

        coordinator.update(&dataset, &selection).expect("first update");
        let first: Vec<_> = coordinator.specs().cloned().collect();
        coordinator.update(&dataset, &selection).expect("second update");
        let second: Vec<_> = coordinator.specs().cloned().collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(coordinator.backend().live_count(), 2);
    }

    #[test]
    fn evaluation_slot_holds_exactly_selected_scored_models(
        overall in prop::collection::vec(0.0f64..=1.0, 1..30),
        scored in prop::collection::vec(prop::option::of(0.0f64..=1.0), 30),
        mask in prop::collection::vec(any::<bool>(), 30)
    ) {
        let dataset = build_dataset(&overall, &scored);
        let selection = selection_from_mask(&dataset, &mask);
        let mut coordinator =
            ChartCoordinator::new(NullChartBackend::new(), DashboardConfig::default())
                .expect("coordinator");
        coordinator.update(&dataset, &selection).expect("update");

        let doctrine = dataset.evaluation("doctrine").expect("doctrine");
        let expected = dataset
            .models()
            .iter()
            .filter(|model| selection.contains(model.id.as_str()))
            .filter(|model| doctrine.score_for(&model.id).is_some())
            .count();
        let spec = coordinator
            .last_spec(&SlotId::evaluation("doctrine"))
            .expect("doctrine spec");
        prop_assert_eq!(spec.bar_count(), expected);

        let data = &spec.series(SCORE_SERIES_LABEL).expect("series").data;
        prop_assert!(data.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn truncation_shows_top_k_until_expanded(
        overall in prop::collection::vec(0.0f64..=1.0, 0..40)
    ) {
        let dataset = build_dataset(&overall, &[]);
        let count = dataset.models().len();
        let mut dashboard =
            Dashboard::new(dataset, NullChartBackend::new(), DashboardConfig::default())
                .expect("dashboard");

        let shown = dashboard
            .chart_spec(&SlotId::Leaderboard)
            .expect("leaderboard")
            .bar_count();
        prop_assert_eq!(shown, count.min(15));
        prop_assert_eq!(dashboard.leaderboard_chrome().show_all_visible, count > 15);
        prop_assert_eq!(dashboard.leaderboard_chrome().note.is_empty(), count <= 15);

        let mut sorted = overall.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        let data = dashboard
            .chart_spec(&SlotId::Leaderboard)
            .expect("leaderboard")
            .series(SCORE_SERIES_LABEL)
            .expect("series")
            .data
            .clone();
        prop_assert_eq!(&data[..], &sorted[..shown]);

        let expanded = dashboard.show_all().expect("show all");
        prop_assert_eq!(expanded, count > 15);
        let shown = dashboard
            .chart_spec(&SlotId::Leaderboard)
            .expect("leaderboard")
            .bar_count();
        prop_assert_eq!(shown, count);
    }

    #[test]
    fn any_mutation_resets_expanded_leaderboard(
        extra in 1usize..20,
        toggle in 0usize..35,
        op in 0u8..3
    ) {
        let count = 15 + extra;
        let overall: Vec<f64> = (0..count).map(|i| i as f64 / count as f64).collect();
        let mut dashboard = Dashboard::new(
            build_dataset(&overall, &[]),
            NullChartBackend::new(),
            DashboardConfig::default(),
        )
        .expect("dashboard");

        prop_assert!(dashboard.show_all().expect("expand"));
        prop_assert_eq!(dashboard.leaderboard_view(), LeaderboardView::Expanded);

        match op {
            0 => {
                dashboard.select_all().expect("select all");
            }
            1 => {
                dashboard.deselect_all().expect("deselect all");
            }
            _ => {
                let id = format!("m{:02}", toggle % count);
                dashboard.set_model(&id, false).expect("toggle");
            }
        }
        prop_assert_eq!(dashboard.leaderboard_view(), LeaderboardView::Collapsed);
    }
}
