use anyhow::{Context, Result};

use deploywatch::config::Config;
use deploywatch::presentation::{factory, WatchArgs};
use deploywatch::{CancellationToken, JsonEventSink, MonitorOutcome};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// Follow the latest deployment to a terminal state. Returns the process
/// exit code.
pub fn cmd_watch(args: &WatchArgs, mut config: Config, ui: UiContext) -> Result<i32> {
    args.apply_overrides(&mut config);
    let use_case = factory::create_monitor_use_case(&config);

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install Ctrl+C handler")?;

    let outcome = if ui.json {
        use_case.run(&cancel, &JsonEventSink::stdout())
    } else {
        use_case.run(&cancel, &ConsoleEventSink::new(ui))
    };

    Ok(exit_code_for(&outcome, args.exit_code))
}

fn exit_code_for(outcome: &MonitorOutcome, exit_code_flag: bool) -> i32 {
    if exit_code_flag {
        outcome.exit_code()
    } else {
        0
    }
}
