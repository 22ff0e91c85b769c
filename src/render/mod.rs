//! Draw-ready geometry and visual constants for Gantt views.
//!
//! Nothing here rasterizes; hosts feed the primitives to their own backend.

mod grid;
mod primitives;
mod visuals;

pub use grid::{GRAD_LINE_STROKE_WIDTH, grad_lines};
pub use primitives::{Color, LinePrimitive};
pub use visuals::{
    CYCLE_STROKE, CycleVisual, LINK_COLOR, LINK_LAG_COLOR, LinkVisual, TASK_FILL, TASK_STROKE,
    TaskVisual,
};
