use tracing::{debug, warn};

use crate::core::{LinearScale, TimeGrad};
use crate::error::{GanttError, GanttResult};
use crate::plan::CyclePlan;

use super::time_map_config::DEFAULT_SCALE;
use super::{ChangeStream, TimeMapConfig};

/// Time axis orchestrator of a Gantt view.
///
/// `TimeMapEngine` owns the visible canvas width, the displayed duration, the
/// current [`LinearScale`] and the grads derived from it. Every state change
/// goes through one scale update so published grads always match the
/// published scale.
pub struct TimeMapEngine {
    pub(super) config: TimeMapConfig,
    pub(super) width: u32,
    pub(super) duration: f64,
    pub(super) width_initialized: bool,
    pub(super) plan: Option<CyclePlan>,
    pub(super) scale: ChangeStream<LinearScale>,
    pub(super) grads: ChangeStream<Vec<TimeGrad>>,
}

impl TimeMapEngine {
    /// Creates an engine with placeholder width and duration.
    ///
    /// The placeholder scale is finite and non-zero so early subscribers never
    /// observe a degenerate map. Grads stay empty until the first update.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(TimeMapConfig::default(), DEFAULT_SCALE)
    }

    pub fn with_config(config: TimeMapConfig) -> GanttResult<Self> {
        config.validate()?;
        let scale = LinearScale::fit(config.initial_width, config.min_duration)?;
        Ok(Self::from_parts(config, scale))
    }

    fn from_parts(config: TimeMapConfig, scale: LinearScale) -> Self {
        debug!(
            width = config.initial_width,
            duration = config.min_duration,
            scale = scale.scale(),
            "create time map"
        );
        Self {
            width: config.initial_width,
            duration: config.min_duration,
            width_initialized: false,
            plan: None,
            scale: ChangeStream::new("scale", scale),
            grads: ChangeStream::new("grads", Vec::new()),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TimeMapConfig {
        &self.config
    }

    #[must_use]
    pub fn current_scale(&self) -> LinearScale {
        *self.scale.latest()
    }

    #[must_use]
    pub fn current_grads(&self) -> &[TimeGrad] {
        self.grads.latest()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn plan(&self) -> Option<&CyclePlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn is_width_initialized(&self) -> bool {
        self.width_initialized
    }

    pub(super) fn reject(&self, error: GanttError) -> GanttError {
        warn!(error = %error, width = self.width, "rejecting time map update");
        error
    }
}

impl Default for TimeMapEngine {
    fn default() -> Self {
        Self::new()
    }
}
