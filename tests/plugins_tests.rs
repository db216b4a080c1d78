use std::cell::RefCell;
use std::rc::Rc;

use benchboard::ChartError;
use benchboard::api::{Dashboard, DashboardConfig, LeaderboardView};
use benchboard::core::{Dataset, Evaluation, Model, SlotId};
use benchboard::extensions::{DashboardPlugin, PluginContext, PluginEvent};
use benchboard::render::NullChartBackend;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl DashboardPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::SelectionChanged { .. } => "selection",
        PluginEvent::LeaderboardExpanded { .. } => "expanded",
        PluginEvent::SlotSkipped { .. } => "skipped",
        PluginEvent::Rendered { .. } => "rendered",
    }
}

fn dataset(count: usize) -> Dataset {
    let models = (0..count)
        .map(|i| Model::new(format!("m{i:02}"), format!("Model {i:02}"), "P", i as f64 / 20.0))
        .collect();
    let evaluations = vec![Evaluation::new("doctrine", "Doctrine").with_score("m00", 0.5)];
    Dataset::new(models, evaluations).expect("dataset")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut dashboard = Dashboard::new(
        dataset(18),
        NullChartBackend::with_canvases(["leaderboard-chart"]),
        DashboardConfig::default(),
    )
    .expect("dashboard init");

    let events = Rc::new(RefCell::new(Vec::new()));
    dashboard
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    dashboard.set_model("m00", false).expect("toggle");
    dashboard.show_all().expect("show all");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec!["selection", "skipped", "rendered", "expanded"]
    );
    assert_eq!(
        events[0].0,
        PluginEvent::SelectionChanged {
            selected: 17,
            total: 18
        }
    );
    assert_eq!(
        events[1].0,
        PluginEvent::SlotSkipped {
            slot: SlotId::evaluation("doctrine")
        }
    );
    assert_eq!(events[2].0, PluginEvent::Rendered { slots: 1 });
    assert_eq!(events[3].0, PluginEvent::LeaderboardExpanded { shown: 17 });

    let last_context = events[3].1;
    assert_eq!(last_context.leaderboard_view, LeaderboardView::Expanded);
    assert_eq!(last_context.selected_models, 17);
    assert_eq!(last_context.selection_epoch, 1);
    assert_eq!(last_context.live_charts, 1);
}

#[test]
fn duplicate_plugin_ids_are_rejected() {
    let mut dashboard =
        Dashboard::new(dataset(2), NullChartBackend::new(), DashboardConfig::default())
            .expect("dashboard init");

    let events = Rc::new(RefCell::new(Vec::new()));
    dashboard
        .register_plugin(Box::new(RecordingPlugin::new("dupe", events.clone())))
        .expect("first plugin");
    let err = dashboard
        .register_plugin(Box::new(RecordingPlugin::new("dupe", events)))
        .expect_err("duplicate must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_plugin_id_is_rejected() {
    let mut dashboard =
        Dashboard::new(dataset(2), NullChartBackend::new(), DashboardConfig::default())
            .expect("dashboard init");
    let events = Rc::new(RefCell::new(Vec::new()));
    assert!(
        dashboard
            .register_plugin(Box::new(RecordingPlugin::new("", events)))
            .is_err()
    );
}

#[test]
fn unregister_plugin_stops_dispatch() {
    let mut dashboard =
        Dashboard::new(dataset(2), NullChartBackend::new(), DashboardConfig::default())
            .expect("dashboard init");

    let events = Rc::new(RefCell::new(Vec::new()));
    dashboard
        .register_plugin(Box::new(RecordingPlugin::new("to-remove", events.clone())))
        .expect("register");
    assert_eq!(dashboard.plugin_count(), 1);
    assert!(dashboard.has_plugin("to-remove"));

    dashboard.deselect_all().expect("deselect all");
    assert!(dashboard.unregister_plugin("to-remove"));
    assert!(!dashboard.unregister_plugin("to-remove"));
    assert_eq!(dashboard.plugin_count(), 0);

    let seen = events.borrow().len();
    dashboard.select_all().expect("select all");
    assert_eq!(events.borrow().len(), seen);
}
