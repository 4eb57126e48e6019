use crate::ui::blocks::banner::rule;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

pub fn render_logs(
    address: &str,
    logs: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match logs {
        Some(logs) => format!(
            "{} Build logs: {}\n{}\n{}\n",
            Icon::Logs.colored(supports_color, supports_unicode),
            address,
            rule(theme::rules::LIGHT),
            logs
        ),
        None => format!(
            "{} Could not fetch logs for {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            address
        ),
    }
}

pub fn logs_to_json(address: &str, logs: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "event": "logs",
        "command": "logs",
        "address": address,
        "logs": logs,
    })
}
