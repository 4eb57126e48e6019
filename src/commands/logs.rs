use anyhow::{Context, Result};

use deploywatch::application::fetch_logs;
use deploywatch::config::Config;
use deploywatch::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::logs::{logs_to_json, render_logs};

pub fn cmd_logs(address: &str, limit: Option<u32>, config: &Config, ui: UiContext) -> Result<()> {
    let provider = factory::create_provider(config);
    let limit = limit.unwrap_or(config.logs.limit);
    let logs = fetch_logs(&provider, address, limit);

    if ui.json {
        crate::ui::json::emit(logs_to_json(address, logs.as_deref()))
            .context("failed to write logs event")?;
    } else {
        print!(
            "{}",
            render_logs(address, logs.as_deref(), ui.color, ui.unicode)
        );
    }
    Ok(())
}
