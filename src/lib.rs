//! gantt-rs: time axis engine for Gantt chart views.
//!
//! The crate maps plan time onto canvas pixels and derives evenly spaced
//! gridlines ("time grads") for the visible width. Rendering stays with the
//! host; this crate only publishes the mapping and draw-ready geometry.

pub mod api;
pub mod core;
pub mod error;
pub mod plan;
pub mod render;
pub mod table;
pub mod telemetry;

pub use api::{TimeMapConfig, TimeMapEngine};
pub use error::{GanttError, GanttResult};
