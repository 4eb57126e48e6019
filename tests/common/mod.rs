//! Common test utilities for deploywatch CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp directories plus a scripted platform CLI
//! - Fixtures: reusable responses and log content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
