use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// Linear time→pixel mapping anchored at time zero.
///
/// `scale` is the number of pixels covered by one time unit and is always
/// finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    scale: f64,
}

impl LinearScale {
    pub fn new(scale: f64) -> GanttResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GanttError::InvalidScale { scale });
        }

        Ok(Self { scale })
    }

    /// Wraps a scale the caller already knows is finite and > 0.
    pub(crate) const fn from_positive(scale: f64) -> Self {
        Self { scale }
    }

    /// Builds the scale that fits `duration` time units into `width` pixels.
    pub fn fit(width: u32, duration: f64) -> GanttResult<Self> {
        if width == 0 {
            return Err(GanttError::InvalidWidth { width });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(GanttError::InvalidDuration { duration });
        }

        Self::new(f64::from(width) / duration)
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn time_to_pos(self, time: f64) -> f64 {
        time * self.scale
    }

    #[must_use]
    pub fn pos_to_time(self, pos: f64) -> f64 {
        pos / self.scale
    }

    /// Returns the scale multiplied by `factor`.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out.
    pub fn zoomed(self, factor: f64) -> GanttResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GanttError::InvalidScale {
                scale: self.scale * factor,
            });
        }

        Self::new(self.scale * factor)
    }
}
