use crate::ui::blocks::banner::rule;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Opening block of a long-running command: title, aligned settings, an
/// optional dimmed hint, closed by a heavy rule.
#[derive(Debug, Clone)]
pub struct SettingsHeader {
    icon: Icon,
    title: String,
    settings: Vec<(String, String)>,
    hint: Option<String>,
}

impl SettingsHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            settings: Vec::new(),
            hint: None,
        }
    }

    pub fn setting(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push((label.into(), value.into()));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let width = self
            .settings
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.settings {
            let label = format!("{}:", label);
            out.push_str(&format!("{:<pad$} {}\n", label, value, pad = width + 1));
        }

        if let Some(hint) = &self.hint {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Hint.colored(supports_color, supports_unicode),
                ColoredText::dim(hint.as_str()).render(supports_color)
            ));
        }

        out.push_str(&rule(theme::rules::HEAVY));
        out.push('\n');
        out
    }
}
