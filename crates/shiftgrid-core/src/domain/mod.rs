//! Domain model (records, blocks, categories, errors).

pub mod block;
pub mod category;
pub mod errors;
pub mod record;

pub use block::{AssignmentSource, ScheduleBlock, display_task_name};
pub use category::Category;
pub use errors::TransformError;
pub use record::{Employee, RequiredSkills, TaskRecord};
