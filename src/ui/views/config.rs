use deploywatch::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;

pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut block = WarningBlock::new("Config warnings");
    for warning in warnings {
        let mut line = match warning.line {
            Some(line) => format!(
                "{}:{}: unknown key '{}'",
                warning.file.display(),
                line,
                warning.key
            ),
            None => format!("{}: unknown key '{}'", warning.file.display(), warning.key),
        };
        if let Some(suggestion) = &warning.suggestion {
            line.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        block.add_line(line);
    }
    block.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_warnings_renders_nothing() {
        assert_eq!(render_config_warnings(&[], false, false), "");
    }

    #[test]
    fn warning_includes_location_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "poll.intervl_secs".to_string(),
            file: PathBuf::from("deploywatch.toml"),
            line: Some(3),
            suggestion: Some("interval_secs".to_string()),
        }];

        let rendered = render_config_warnings(&warnings, false, false);
        assert!(rendered.starts_with("[WARN] Config warnings\n"));
        assert!(rendered.contains(
            "deploywatch.toml:3: unknown key 'poll.intervl_secs' (did you mean 'interval_secs'?)"
        ));
    }
}
