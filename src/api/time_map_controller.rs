use tracing::{debug, trace, warn};

use crate::core::{LinearScale, TimeGrad, compute_grads_with};
use crate::error::{GanttError, GanttResult};
use crate::plan::{CyclePlan, PlanObserver};

use super::TimeMapEngine;

pub const TIME_MAP_OBSERVER_ID: &str = "time-map";

impl TimeMapEngine {
    /// Updates the visible canvas width.
    ///
    /// Grads are rebuilt at the current scale. The first effective width
    /// change also refits the scale to the plan, since the real width is not
    /// known at construction time. Setting the current width again is a no-op.
    pub fn set_canvas_width(&mut self, width: u32) -> GanttResult<()> {
        if width == 0 {
            return Err(self.reject(GanttError::InvalidWidth { width }));
        }
        if width == self.width {
            return Ok(());
        }

        let grads = self.grads_for(self.current_scale(), width)?;
        let initial_fit = if self.width_initialized {
            None
        } else {
            let duration = self.plan_duration(self.plan.as_ref());
            let scale = LinearScale::fit(width, duration).map_err(|err| self.reject(err))?;
            let pending = self.pending_rescale(scale, width)?;
            Some((duration, pending))
        };

        trace!(from = self.width, to = width, grads = grads.len(), "set canvas width");
        self.width = width;
        self.grads.publish(grads);

        if let Some((duration, pending)) = initial_fit {
            self.width_initialized = true;
            self.duration = duration;
            self.commit_rescale(pending);
        }
        Ok(())
    }

    /// Multiplies the current scale by `factor`.
    pub fn zoom(&mut self, factor: f64) -> GanttResult<()> {
        let scale = self
            .current_scale()
            .zoomed(factor)
            .map_err(|err| self.reject(err))?;
        let pending = self.pending_rescale(scale, self.width)?;
        debug!(factor, scale = scale.scale(), "zoom time map");
        self.commit_rescale(pending);
        Ok(())
    }

    /// Adopts `plan` and refits the scale to its cycle time.
    ///
    /// The displayed duration never drops below the configured minimum.
    pub fn apply_plan(&mut self, plan: CyclePlan) -> GanttResult<()> {
        let duration = self.plan_duration(Some(&plan));
        let scale = LinearScale::fit(self.width, duration).map_err(|err| self.reject(err))?;
        let pending = self.pending_rescale(scale, self.width)?;
        debug!(
            name = %plan.name,
            cycle_time = plan.cycle_time,
            duration,
            "apply cycle plan"
        );
        self.plan = Some(plan);
        self.duration = duration;
        self.commit_rescale(pending);
        Ok(())
    }

    // Without a plan the current duration is kept.
    fn plan_duration(&self, plan: Option<&CyclePlan>) -> f64 {
        plan.map_or(self.duration, |plan| {
            plan.cycle_time.max(self.config.min_duration)
        })
    }

    fn grads_for(&self, scale: LinearScale, width: u32) -> GanttResult<Vec<TimeGrad>> {
        compute_grads_with(scale, width, &self.config.grad_spacing).map_err(|err| self.reject(err))
    }

    /// Prepares a scale update without touching state.
    ///
    /// Returns `None` when `scale` equals the current one exactly.
    fn pending_rescale(
        &self,
        scale: LinearScale,
        width: u32,
    ) -> GanttResult<Option<(LinearScale, Vec<TimeGrad>)>> {
        if scale == self.current_scale() {
            trace!(scale = scale.scale(), "scale unchanged");
            return Ok(None);
        }
        let grads = self.grads_for(scale, width)?;
        Ok(Some((scale, grads)))
    }

    fn commit_rescale(&mut self, pending: Option<(LinearScale, Vec<TimeGrad>)>) {
        let Some((scale, grads)) = pending else {
            return;
        };
        debug!(
            scale = scale.scale(),
            width = self.width,
            grads = grads.len(),
            "time map rescaled"
        );
        self.scale.publish(scale);
        self.grads.publish(grads);
    }
}

impl PlanObserver for TimeMapEngine {
    fn id(&self) -> &str {
        TIME_MAP_OBSERVER_ID
    }

    fn on_plan_changed(&mut self, plan: &CyclePlan) {
        if let Err(err) = self.apply_plan(plan.clone()) {
            warn!(error = %err, "ignoring plan change the time map cannot display");
        }
    }
}
