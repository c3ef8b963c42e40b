mod core;
mod messages;
mod state;
mod worker;

pub use self::core::ProjectionEngine;
pub use messages::{JobRequest, JobResult, SchemeOutcome};
pub use state::SchemeState;
