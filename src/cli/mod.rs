pub mod orchestration;

pub use orchestration::{run_auto_version, WorkflowResult};
