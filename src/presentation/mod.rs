//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use deploywatch::presentation::factory;
//!
//! let use_case = factory::create_monitor_use_case(&config);
//! let outcome = use_case.run(&cancel, &sink);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, WatchArgs};
pub use factory::{create_monitor_use_case, create_provider};
