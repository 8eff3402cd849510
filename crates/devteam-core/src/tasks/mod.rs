//! Synthetic task generation and assignment.

mod distributor;
mod templates;
mod types;

pub use distributor::{tasks_for_worker, TaskDistributor};
pub use templates::{base_tasks, extract_keywords, tasks_for_specialization, Archetype, KEYWORDS};
pub use types::{Priority, Task, TaskStatus};
