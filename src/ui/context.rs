use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use deploywatch::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// `config.output` already carries the `--color` override.
    pub fn new(json: bool, config: &Config) -> Self {
        Self::from_caps(json, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            caps,
            color,
            unicode,
        }
    }
}
