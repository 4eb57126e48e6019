//! Event sink implementations

mod json;

pub use json::JsonEventSink;
