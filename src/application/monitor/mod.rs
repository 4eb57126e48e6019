//! Monitor Use Case
//!
//! Polls the latest deployment until it succeeds, fails, or stops making sense.
//!
//! ## State machine
//!
//! | Classified state | Action                                              |
//! |------------------|-----------------------------------------------------|
//! | `InProgress`     | progress marker, wait `interval`, poll again        |
//! | `Failed`         | fetch logs, write failure report, stop              |
//! | `Succeeded`      | success banner, stop                                |
//! | `Unknown(_)`     | warning, stop                                       |
//! | `Absent`         | "could not fetch", stop                             |
//!
//! A status-change notice is emitted only when the raw state differs from
//! the previous poll.

mod options;
mod use_case;


pub use options::{MonitorOptions, DEFAULT_LOG_LIMIT, DEFAULT_POLL_INTERVAL};
pub use use_case::MonitorUseCase;
