mod phrases;
mod types;
mod worker;

pub use phrases::{ambient_phrases, AMBIENT_KINDS, FOCUS_PHRASES, PROGRESS_PHRASES};
pub use types::{Specialization, WorkerIdentity, WorkerStatus};
pub use worker::{Worker, WorkerSnapshot};
