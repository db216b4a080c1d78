mod chart_spec;
mod null_backend;
mod primitives;

pub use chart_spec::{ChartOptions, ChartSeries, ChartSpec, TooltipKind, TooltipLines};
pub use null_backend::{NullChartBackend, NullChartHandle};
pub use primitives::{BarOrientation, Color};

use crate::core::SlotId;
use crate::error::ChartResult;

/// Owned chart resource bound to one canvas.
///
/// `destroy` consumes the handle so a released chart cannot be drawn into
/// again.
pub trait ChartHandle {
    fn slot(&self) -> &SlotId;
    fn destroy(self);
}

/// Contract implemented by any drawing primitive.
///
/// Backends receive a fully materialized, deterministic `ChartSpec` and own
/// their canvas resources until the returned handle is destroyed.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn has_canvas(&self, canvas_id: &str) -> bool;

    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) -> ChartResult<Self::Handle>;
}
