use serde::{Deserialize, Serialize};

use crate::core::{GradSpacingPolicy, LinearScale};
use crate::error::{GanttError, GanttResult};

/// Placeholder canvas width used until the host reports a real one.
pub const DEFAULT_WIDTH: u32 = 800;

/// Placeholder duration, also the minimum time span ever displayed.
pub const DEFAULT_DURATION: f64 = 60.0;

/// Placeholder scale: 800 px for 60 time units.
pub const DEFAULT_SCALE: LinearScale =
    LinearScale::from_positive(DEFAULT_WIDTH as f64 / DEFAULT_DURATION);

/// Time map bootstrap configuration.
///
/// Defaults reproduce the fixed Gantt axis behavior. The type is serializable
/// so hosts can keep it next to their own view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeMapConfig {
    #[serde(default = "default_initial_width")]
    pub initial_width: u32,
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,
    #[serde(default)]
    pub grad_spacing: GradSpacingPolicy,
}

impl Default for TimeMapConfig {
    fn default() -> Self {
        Self {
            initial_width: default_initial_width(),
            min_duration: default_min_duration(),
            grad_spacing: GradSpacingPolicy::default(),
        }
    }
}

impl TimeMapConfig {
    #[must_use]
    pub fn with_initial_width(mut self, initial_width: u32) -> Self {
        self.initial_width = initial_width;
        self
    }

    #[must_use]
    pub fn with_min_duration(mut self, min_duration: f64) -> Self {
        self.min_duration = min_duration;
        self
    }

    #[must_use]
    pub fn with_grad_spacing(mut self, grad_spacing: GradSpacingPolicy) -> Self {
        self.grad_spacing = grad_spacing;
        self
    }

    pub fn validate(&self) -> GanttResult<()> {
        if self.initial_width == 0 {
            return Err(GanttError::InvalidWidth {
                width: self.initial_width,
            });
        }
        if !self.min_duration.is_finite() || self.min_duration <= 0.0 {
            return Err(GanttError::InvalidDuration {
                duration: self.min_duration,
            });
        }
        self.grad_spacing.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GanttError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GanttError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_initial_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_min_duration() -> f64 {
    DEFAULT_DURATION
}
