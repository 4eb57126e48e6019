use deploywatch::DeployWatchError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    );

    if let Some(fix) = err.downcast_ref::<DeployWatchError>().and_then(suggested_fix) {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Hint.colored(supports_color, supports_unicode),
            ColoredText::dim(fix).render(supports_color)
        ));
    }
    out
}

fn suggested_fix(err: &DeployWatchError) -> Option<&'static str> {
    match err {
        DeployWatchError::InvalidConfig { .. } => {
            Some("Fix the TOML syntax or pass a different file with --config.")
        }
        DeployWatchError::InvalidConfigValue { .. } => {
            Some("DEPLOYWATCH_* numeric variables take whole numbers.")
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &format!("{:#}", err), Some("deploywatch"))
        );
    }

    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
