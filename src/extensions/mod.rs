//! Optional integration hooks live here.
//!
//! Keep extensions observational and avoid coupling them into the render path.

pub mod plugins;

pub use plugins::{DashboardPlugin, PluginContext, PluginEvent};
