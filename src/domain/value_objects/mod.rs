//! Value Objects
//!
//! Immutable types compared by value rather than identity.

mod deploy_state;
mod outcome;

pub use deploy_state::DeployState;
pub use outcome::{InconclusiveReason, MonitorOutcome};
