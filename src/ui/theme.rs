use crossterm::style::Color;

/// Design tokens for the deploywatch console UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and rules must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✅";
    pub const ERROR: &str = "❌";
    pub const WARNING: &str = "⚠️ ";
    pub const PROGRESS: &str = ".";
    pub const WATCH: &str = "🚀";
    pub const LOGS: &str = "📜";
    pub const SAVED: &str = "💾";
    pub const LIVE: &str = "🌐";
    pub const STOP: &str = "⏹️ ";
    pub const HINT: &str = "📋";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = ".";
    pub const WATCH: &str = "[~]";
    pub const LOGS: &str = "[LOGS]";
    pub const SAVED: &str = "[SAVED]";
    pub const LIVE: &str = "[LIVE]";
    pub const STOP: &str = "[STOP]";
    pub const HINT: &str = "[>]";
}

/// Horizontal rules between sections. Plain ASCII in every mode so the
/// console transcript matches the report file.
pub mod rules {
    pub const WIDTH: usize = 60;
    pub const HEAVY: char = '=';
    pub const LIGHT: char = '-';
}
