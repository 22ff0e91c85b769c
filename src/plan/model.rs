use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// One task scheduled inside a cycle plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTask {
    pub id: u32,
    pub name: String,
    pub start: f64,
    pub duration: f64,
}

impl PlanTask {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            duration,
        }
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Scheduling cycle governing the time axis.
///
/// The time map only reads `cycle_time`; tasks are carried for table views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePlan {
    #[serde(default)]
    pub name: String,
    pub cycle_time: f64,
    #[serde(default)]
    pub tasks: Vec<PlanTask>,
}

impl CyclePlan {
    #[must_use]
    pub fn new(name: impl Into<String>, cycle_time: f64) -> Self {
        Self {
            name: name.into(),
            cycle_time,
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<PlanTask>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.cycle_time.is_finite() {
            return Err(GanttError::InvalidData(
                "cycle time must be finite".to_owned(),
            ));
        }

        for task in &self.tasks {
            if !task.start.is_finite() || !task.duration.is_finite() {
                return Err(GanttError::InvalidData(format!(
                    "task `{}` timing must be finite",
                    task.name
                )));
            }
            if task.start < 0.0 || task.duration < 0.0 {
                return Err(GanttError::InvalidData(format!(
                    "task `{}` start and duration must be >= 0",
                    task.name
                )));
            }
        }

        Ok(())
    }

    /// Deserializes and validates a plan from JSON.
    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        let plan: Self = serde_json::from_str(input)
            .map_err(|e| GanttError::InvalidData(format!("failed to parse plan: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GanttError::InvalidData(format!("failed to serialize plan: {e}")))
    }
}
