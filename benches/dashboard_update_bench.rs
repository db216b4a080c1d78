use benchboard::api::{Dashboard, DashboardConfig, SelectionSet, rank_leaderboard};
use benchboard::core::{Dataset, Evaluation, Model};
use benchboard::render::NullChartBackend;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_dataset(model_count: usize, evaluation_count: usize) -> Dataset {
    let models: Vec<Model> = (0..model_count)
        .map(|i| {
            Model::new(
                format!("model-{i}"),
                format!("Model {i}"),
                format!("Provider {}", i % 7),
                ((i * 37) % 101) as f64 / 100.0,
            )
        })
        .collect();

    let evaluations: Vec<Evaluation> = (0..evaluation_count)
        .map(|e| {
            let id = if e == 0 {
                "theological_orientation".to_owned()
            } else {
                format!("eval-{e}")
            };
            let mut evaluation = Evaluation::new(id, format!("Evaluation {e}"));
            for i in (0..model_count).filter(|i| (i + e) % 5 != 0) {
                evaluation =
                    evaluation.with_score(format!("model-{i}"), ((i * 13 + e) % 101) as f64 / 100.0);
            }
            evaluation
        })
        .collect();

    Dataset::new(models, evaluations).expect("valid generated dataset")
}

fn bench_toggle_full_rebuild(c: &mut Criterion) {
    let mut dashboard = Dashboard::new(
        generated_dataset(60, 8),
        NullChartBackend::new(),
        DashboardConfig::default(),
    )
    .expect("dashboard init");

    let mut included = false;
    c.bench_function("toggle_full_rebuild_60x8", |b| {
        b.iter(|| {
            dashboard
                .set_model(black_box("model-3"), included)
                .expect("toggle");
            included = !included;
        })
    });
}

fn bench_rank_leaderboard_1k(c: &mut Criterion) {
    let dataset = generated_dataset(1_000, 1);
    let selection: SelectionSet = dataset.model_ids().map(str::to_owned).collect();

    c.bench_function("rank_leaderboard_1k", |b| {
        b.iter(|| {
            let ranked = rank_leaderboard(black_box(&dataset), black_box(&selection));
            black_box(ranked.len());
        })
    });
}

criterion_group!(benches, bench_toggle_full_rebuild, bench_rank_leaderboard_1k);
criterion_main!(benches);
