use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Watch,
    Logs,
    Saved,
    Live,
    Stop,
    Hint,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Logs) => theme::icons::LOGS,
            (true, Icon::Saved) => theme::icons::SAVED,
            (true, Icon::Live) => theme::icons::LIVE,
            (true, Icon::Stop) => theme::icons::STOP,
            (true, Icon::Hint) => theme::icons::HINT,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Logs) => theme::icons_ascii::LOGS,
            (false, Icon::Saved) => theme::icons_ascii::SAVED,
            (false, Icon::Live) => theme::icons_ascii::LIVE,
            (false, Icon::Stop) => theme::icons_ascii::STOP,
            (false, Icon::Hint) => theme::icons_ascii::HINT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Live => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Stop => theme::colors::WARNING,
            Icon::Progress | Icon::Hint => theme::colors::DIM,
            Icon::Watch | Icon::Logs | Icon::Saved => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Error.render(true), theme::icons::ERROR);
    }

    #[test]
    fn progress_is_a_dot_in_both_modes() {
        assert_eq!(Icon::Progress.render(true), ".");
        assert_eq!(Icon::Progress.render(false), ".");
    }

    #[test]
    fn colored_without_color_is_plain() {
        assert_eq!(Icon::Warning.colored(false, false), "[WARN]");
    }
}
