mod task_table;

pub use task_table::{TASK_TABLE_OBSERVER_ID, TaskRow, TaskTable};
