use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Full-width horizontal rule.
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(theme::rules::WIDTH).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

/// Terminal-state announcement: icon plus a bold headline, with an optional
/// detail line underneath.
#[derive(Debug, Clone)]
pub struct Banner {
    kind: BannerKind,
    headline: String,
    detail: Option<String>,
}

impl Banner {
    pub fn success(headline: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            headline: headline.into(),
            detail: None,
        }
    }

    pub fn failure(headline: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Failure,
            headline: headline.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, headline) = match self.kind {
            BannerKind::Success => (Icon::Success, ColoredText::success(self.headline.as_str())),
            BannerKind::Failure => (Icon::Error, ColoredText::error(self.headline.as_str())),
        };

        let mut out = format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            headline.bold().render(supports_color)
        );
        if let Some(detail) = &self.detail {
            out.push_str(detail);
            out.push('\n');
        }
        out
    }
}
