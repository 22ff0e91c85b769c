use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::plan::{CyclePlan, PlanObserver};

pub const TASK_TABLE_OBSERVER_ID: &str = "task-table";

/// One displayed task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: u32,
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

/// Table view model mirroring the tasks of the current cycle plan.
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    cycle_name: Option<String>,
    rows: Vec<TaskRow>,
}

impl TaskTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the mirrored cycle, `None` until a plan arrives.
    #[must_use]
    pub fn cycle_name(&self) -> Option<&str> {
        self.cycle_name.as_deref()
    }

    #[must_use]
    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PlanObserver for TaskTable {
    fn id(&self) -> &str {
        TASK_TABLE_OBSERVER_ID
    }

    fn on_plan_changed(&mut self, plan: &CyclePlan) {
        self.cycle_name = Some(plan.name.clone());
        self.rows = plan
            .tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                name: task.name.clone(),
                start: task.start,
                end: task.end(),
                duration: task.duration,
            })
            .collect();
        trace!(rows = self.rows.len(), "task table refreshed");
    }
}
