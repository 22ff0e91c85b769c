use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::error::{GanttError, GanttResult};

use super::CyclePlan;

/// Receiver of plan-change notifications.
///
/// Observers are driven synchronously by [`CycleService::set_plan`] in
/// registration order.
pub trait PlanObserver {
    fn id(&self) -> &str;
    fn on_plan_changed(&mut self, plan: &CyclePlan);
}

pub type SharedPlanObserver = Rc<RefCell<dyn PlanObserver>>;

/// Owner of the active cycle plan.
#[derive(Default)]
pub struct CycleService {
    current: Option<CyclePlan>,
    observers: IndexMap<String, SharedPlanObserver>,
}

impl CycleService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_plan(&self) -> Option<&CyclePlan> {
        self.current.as_ref()
    }

    /// Registers an observer with a unique identifier.
    ///
    /// When a plan is already active it is delivered right away.
    pub fn register_observer(&mut self, observer: SharedPlanObserver) -> GanttResult<()> {
        let observer_id = observer.borrow().id().to_owned();
        if observer_id.is_empty() {
            return Err(GanttError::InvalidData(
                "plan observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.contains_key(&observer_id) {
            return Err(GanttError::InvalidData(format!(
                "plan observer with id `{observer_id}` is already registered"
            )));
        }

        if let Some(plan) = &self.current {
            deliver(&observer_id, &observer, plan);
        }
        debug!(observer = %observer_id, "register plan observer");
        self.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id)
    }

    /// Replaces the active plan and notifies every observer.
    pub fn set_plan(&mut self, plan: CyclePlan) -> GanttResult<()> {
        plan.validate()?;
        debug!(
            name = %plan.name,
            cycle_time = plan.cycle_time,
            tasks = plan.tasks.len(),
            "set cycle plan"
        );

        let plan = self.current.insert(plan);
        for (observer_id, observer) in &self.observers {
            deliver(observer_id, observer, plan);
        }
        Ok(())
    }
}

fn deliver(observer_id: &str, observer: &SharedPlanObserver, plan: &CyclePlan) {
    match observer.try_borrow_mut() {
        Ok(mut observer) => {
            trace!(observer = %observer_id, "deliver plan change");
            observer.on_plan_changed(plan);
        }
        Err(_) => warn!(
            observer = %observer_id,
            "skipping plan delivery to observer that is already borrowed"
        ),
    }
}
