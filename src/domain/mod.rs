//! Domain Layer
//!
//! Pure deployment-monitoring logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Deployment status record, failure report
//! - `value_objects/` - Classified state, monitor outcome
//! - `ports/` - Interfaces for the platform, report storage and event output
//!
//! All I/O goes through trait-defined ports.

pub mod entities;
pub mod ports;
pub mod value_objects;
