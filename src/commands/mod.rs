pub mod logs;
pub mod status;
pub mod watch;
