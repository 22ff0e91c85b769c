//! Cycle plan model and the service that broadcasts plan changes.

pub mod model;
pub mod service;

pub use model::{CyclePlan, PlanTask};
pub use service::{CycleService, PlanObserver, SharedPlanObserver};
