use chrono::Local;
use deploywatch::application::StatusSnapshot;
use deploywatch::DeployState;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(
    snapshot: &StatusSnapshot,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let Some(record) = &snapshot.record else {
        return format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Could not fetch deployment info").render(supports_color)
        );
    };

    let (icon, state) = match &snapshot.state {
        DeployState::Succeeded => (Icon::Success, ColoredText::success(record.state())),
        DeployState::Failed => (Icon::Error, ColoredText::error(record.state())),
        DeployState::InProgress => (Icon::Watch, ColoredText::info(record.state())),
        DeployState::Unknown(_) | DeployState::Absent => {
            (Icon::Warning, ColoredText::warning(record.state()))
        }
    };

    let mut out = format!(
        "{} Deployment Status: {}\n",
        icon.colored(supports_color, supports_unicode),
        state.bold().render(supports_color)
    );
    out.push_str(&format!("URL: {}\n", record.address()));
    if let Some(created) = record.created_at() {
        out.push_str(&format!(
            "Created: {}\n",
            created.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
        ));
    }
    out
}

pub fn status_to_json(snapshot: &StatusSnapshot) -> serde_json::Value {
    match &snapshot.record {
        Some(record) => serde_json::json!({
            "event": "status",
            "command": "status",
            "state": record.state(),
            "url": record.url(),
            "created": record.created_at(),
            "terminal": snapshot.state.is_terminal(),
        }),
        None => serde_json::json!({
            "event": "status",
            "command": "status",
            "state": null,
        }),
    }
}
