//! benchboard: selection-synchronized chart engine for benchmark dashboards.
//!
//! A `Dashboard` owns an immutable `Dataset`, the `SelectionStore` deciding
//! which models are visible, and a `ChartCoordinator` keeping exactly one
//! live chart per slot (the leaderboard plus one per evaluation). Drawing is
//! delegated to a `ChartBackend`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartCoordinator, Dashboard, DashboardConfig, SelectionStore};
pub use error::{ChartError, ChartResult};
