use anyhow::{Context, Result};

use deploywatch::application::check_status;
use deploywatch::config::Config;
use deploywatch::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::status::{render_status, status_to_json};

pub fn cmd_status(config: &Config, ui: UiContext) -> Result<()> {
    let provider = factory::create_provider(config);
    let snapshot = check_status(&provider);
    tracing::debug!(state = ?snapshot.state, "status checked");

    if ui.json {
        crate::ui::json::emit(status_to_json(&snapshot))
            .context("failed to write status event")?;
    } else {
        print!("{}", render_status(&snapshot, ui.color, ui.unicode));
    }
    Ok(())
}
