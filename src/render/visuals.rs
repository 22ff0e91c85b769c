use serde::{Deserialize, Serialize};

use super::Color;

/// `#2d91a3`
pub const CYCLE_STROKE: Color = Color::from_rgb8(0x2d, 0x91, 0xa3);
pub const TASK_FILL: Color = Color::LIGHT_BLUE;
pub const TASK_STROKE: Color = Color::DARK_BLUE;
pub const LINK_COLOR: Color = Color::BLACK;
pub const LINK_LAG_COLOR: Color = Color::GREEN;

/// Outline of the cycle band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleVisual {
    pub stroke: Color,
}

impl Default for CycleVisual {
    fn default() -> Self {
        Self {
            stroke: CYCLE_STROKE,
        }
    }
}

/// Task bar appearance. `indent` is the nesting level of the task row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskVisual {
    pub indent: u32,
    pub fill: Color,
    pub stroke: Color,
}

impl Default for TaskVisual {
    fn default() -> Self {
        Self {
            indent: 0,
            fill: TASK_FILL,
            stroke: TASK_STROKE,
        }
    }
}

/// Dependency link appearance; `lag_color` marks the lag segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkVisual {
    pub color: Color,
    pub lag_color: Color,
}

impl Default for LinkVisual {
    fn default() -> Self {
        Self {
            color: LINK_COLOR,
            lag_color: LINK_LAG_COLOR,
        }
    }
}
