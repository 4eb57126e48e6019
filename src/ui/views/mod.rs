pub mod config;
pub mod logs;
pub mod monitor;
pub mod status;
