//! Console presentation for the `deploywatch` binary.
//!
//! - `theme`: colors, icons, rules
//! - `primitives` / `blocks`: small reusable renderers
//! - `views`: one module per command
//! - `console`: the monitor event sink used outside `--json`

pub mod blocks;
pub mod ci;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
