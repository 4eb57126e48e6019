use chrono::Local;
use deploywatch::MonitorEvent;

use crate::ui::blocks::banner::{rule, Banner};
use crate::ui::blocks::header::SettingsHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub fn render_monitor_header(
    provider: &str,
    interval_secs: u64,
    max_wait_secs: Option<u64>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    SettingsHeader::new(Icon::Watch, "Deployment Monitor")
        .setting("Provider", provider)
        .setting("Interval", format!("{}s", interval_secs))
        .setting(
            "Max wait",
            max_wait_secs.map_or_else(|| "none".to_string(), |secs| format!("{}s", secs)),
        )
        .hint("Press Ctrl+C to stop")
        .render(supports_color, supports_unicode)
}

/// Render one monitor event for the console.
///
/// `Progress` renders without a trailing newline; consecutive dots share a
/// line until the next status notice.
pub fn render_monitor_event(
    event: &MonitorEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match event {
        MonitorEvent::Started {
            provider,
            interval_secs,
            max_wait_secs,
        } => render_monitor_header(
            provider,
            *interval_secs,
            *max_wait_secs,
            supports_color,
            supports_unicode,
        ),
        MonitorEvent::StatusChanged {
            at,
            state,
            url,
            created,
        } => {
            let mut out = format!(
                "\n[{}] Deployment Status: {}\n",
                at.format("%H:%M:%S"),
                ColoredText::info(state.as_str()).bold().render(supports_color)
            );
            out.push_str(&format!("URL: https://{}\n", url));
            if let Some(created) = created {
                out.push_str(&format!(
                    "Created: {}\n",
                    created.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                ));
            }
            out
        }
        MonitorEvent::Progress => Icon::Progress.colored(supports_color, supports_unicode),
        MonitorEvent::DeploymentFailed { .. } => format!(
            "\n\n{}{}\n{} Error Logs:\n{}\n",
            Banner::failure("DEPLOYMENT FAILED!").render(supports_color, supports_unicode),
            rule(theme::rules::HEAVY),
            Icon::Logs.colored(supports_color, supports_unicode),
            rule(theme::rules::LIGHT)
        ),
        MonitorEvent::LogsRetrieved { logs } => format!("{}\n", logs),
        MonitorEvent::LogsUnavailable { url } => format!(
            "{} Could not fetch logs for https://{}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            url
        ),
        MonitorEvent::ReportSaved { path } => format!(
            "\n{} Error logs saved to: {}\n{} Copy the logs above and share them for analysis\n",
            Icon::Saved.colored(supports_color, supports_unicode),
            path.display(),
            Icon::Hint.colored(supports_color, supports_unicode)
        ),
        MonitorEvent::ReportFailed { message } => format!(
            "{} Could not save error logs: {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(message.as_str()).render(supports_color)
        ),
        MonitorEvent::DeploymentSucceeded { url } => format!(
            "\n\n{}",
            Banner::success("DEPLOYMENT SUCCESSFUL!")
                .with_detail(format!(
                    "{} Live at: https://{}",
                    Icon::Live.colored(supports_color, supports_unicode),
                    url
                ))
                .render(supports_color, supports_unicode)
        ),
        MonitorEvent::UnknownState { state } => format!(
            "\n{} Unknown state: {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            state
        ),
        MonitorEvent::StatusUnavailable => format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Could not fetch deployment info").render(supports_color)
        ),
        MonitorEvent::TimedOut { waited_secs } => format!(
            "\n{} Gave up after {}s; deployment still in progress\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            waited_secs
        ),
        MonitorEvent::Cancelled => format!(
            "\n\n{} Monitor stopped by user\n",
            Icon::Stop.colored(supports_color, supports_unicode)
        ),
        MonitorEvent::Finished { .. } => format!(
            "\n{}\n{}\n",
            rule(theme::rules::HEAVY),
            ColoredText::dim("Monitor finished.").render(supports_color)
        ),
    }
}
