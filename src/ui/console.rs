use std::io::{self, Write};

use deploywatch::{MonitorEvent, MonitorEventSink};

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::views::monitor::render_monitor_event;

/// Renders monitor events to stdout for a human reader.
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn annotation(&self, event: &MonitorEvent) -> Option<String> {
        if !self.ui.caps.is_github_actions {
            return None;
        }
        match event {
            MonitorEvent::DeploymentFailed { url } => Some(github_actions_annotation(
                AnnotationLevel::Error,
                &format!("Deployment failed: https://{}", url),
                Some("deploywatch"),
            )),
            MonitorEvent::TimedOut { waited_secs } => Some(github_actions_annotation(
                AnnotationLevel::Warning,
                &format!("Deployment still in progress after {}s", waited_secs),
                Some("deploywatch"),
            )),
            _ => None,
        }
    }
}

impl MonitorEventSink for ConsoleEventSink {
    fn on_event(&self, event: MonitorEvent) {
        let rendered = render_monitor_event(&event, self.ui.color, self.ui.unicode);

        let mut out = io::stdout().lock();
        if let Some(annotation) = self.annotation(&event) {
            let _ = writeln!(out, "{}", annotation);
        }
        let _ = out.write_all(rendered.as_bytes());
        // Progress dots carry no newline.
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;

    fn sink(is_github_actions: bool) -> ConsoleEventSink {
        ConsoleEventSink::new(UiContext {
            json: false,
            caps: TerminalCapabilities {
                supports_color: false,
                supports_unicode: false,
                is_ci: is_github_actions,
                is_github_actions,
            },
            color: false,
            unicode: false,
        })
    }

    #[test]
    fn failure_annotates_in_github_actions() {
        let annotation = sink(true).annotation(&MonitorEvent::DeploymentFailed {
            url: "x.vercel.app".to_string(),
        });
        assert_eq!(
            annotation.as_deref(),
            Some("::error title=deploywatch::Deployment failed: https://x.vercel.app")
        );
    }

    #[test]
    fn no_annotation_outside_github_actions() {
        let annotation = sink(false).annotation(&MonitorEvent::DeploymentFailed {
            url: "x.vercel.app".to_string(),
        });
        assert!(annotation.is_none());
    }

    #[test]
    fn success_is_never_annotated() {
        let annotation = sink(true).annotation(&MonitorEvent::DeploymentSucceeded {
            url: "x.vercel.app".to_string(),
        });
        assert!(annotation.is_none());
    }
}
