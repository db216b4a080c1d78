use std::cell::RefCell;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use crate::core::SlotId;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartBackend, ChartHandle, ChartSpec};

#[derive(Debug, Default)]
struct NullBackendLedger {
    live: IndexMap<String, u64>,
    created: usize,
    destroyed: usize,
    last_specs: IndexMap<String, ChartSpec>,
}

/// Headless backend used by tests and server-side spec generation.
///
/// It validates every spec and refuses to create a second live chart on a
/// canvas, so ownership bugs surface as `ChartError::DuplicateHandle`.
#[derive(Debug, Default)]
pub struct NullChartBackend {
    canvases: Option<IndexSet<String>>,
    failing_canvases: IndexSet<String>,
    next_handle_id: u64,
    ledger: Rc<RefCell<NullBackendLedger>>,
}

impl NullChartBackend {
    /// Backend on which every canvas id exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend on which only the given canvas ids exist.
    #[must_use]
    pub fn with_canvases<I, S>(canvas_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canvases: Some(canvas_ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Makes `create_chart` fail for `canvas_id`.
    #[must_use]
    pub fn failing_on(mut self, canvas_id: impl Into<String>) -> Self {
        self.failing_canvases.insert(canvas_id.into());
        self
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.ledger.borrow().live.len()
    }

    #[must_use]
    pub fn is_live(&self, canvas_id: &str) -> bool {
        self.ledger.borrow().live.contains_key(canvas_id)
    }

    #[must_use]
    pub fn created_count(&self) -> usize {
        self.ledger.borrow().created
    }

    #[must_use]
    pub fn destroyed_count(&self) -> usize {
        self.ledger.borrow().destroyed
    }

    /// Most recent spec drawn on `canvas_id`, live or not.
    #[must_use]
    pub fn last_spec(&self, canvas_id: &str) -> Option<ChartSpec> {
        self.ledger.borrow().last_specs.get(canvas_id).cloned()
    }
}

impl ChartBackend for NullChartBackend {
    type Handle = NullChartHandle;

    fn has_canvas(&self, canvas_id: &str) -> bool {
        self.canvases
            .as_ref()
            .is_none_or(|canvases| canvases.contains(canvas_id))
    }

    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) -> ChartResult<Self::Handle> {
        spec.validate()?;
        if self.failing_canvases.contains(canvas_id) {
            return Err(ChartError::Backend {
                slot: spec.slot.to_string(),
                message: format!("canvas `{canvas_id}` rejected the chart"),
            });
        }

        let mut ledger = self.ledger.borrow_mut();
        if ledger.live.contains_key(canvas_id) {
            return Err(ChartError::DuplicateHandle {
                slot: spec.slot.to_string(),
            });
        }

        self.next_handle_id += 1;
        let id = self.next_handle_id;
        ledger.live.insert(canvas_id.to_owned(), id);
        ledger.created += 1;
        ledger
            .last_specs
            .insert(canvas_id.to_owned(), spec.clone());

        Ok(NullChartHandle {
            id,
            slot: spec.slot.clone(),
            canvas_id: canvas_id.to_owned(),
            ledger: Rc::clone(&self.ledger),
        })
    }
}

/// Handle issued by `NullChartBackend`.
#[derive(Debug)]
pub struct NullChartHandle {
    id: u64,
    slot: SlotId,
    canvas_id: String,
    ledger: Rc<RefCell<NullBackendLedger>>,
}

impl NullChartHandle {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}

impl ChartHandle for NullChartHandle {
    fn slot(&self) -> &SlotId {
        &self.slot
    }

    fn destroy(self) {
        let mut ledger = self.ledger.borrow_mut();
        if ledger.live.get(&self.canvas_id) == Some(&self.id) {
            ledger.live.shift_remove(&self.canvas_id);
        }
        ledger.destroyed += 1;
    }
}
