//! deploywatch CLI - follow a Vercel deployment until it finishes
//!
//! Usage: deploywatch [COMMAND]
//!
//! Commands:
//!   watch   Poll the latest deployment until it succeeds or fails (default)
//!   status  Show the latest deployment once
//!   logs    Print build logs for a deployment

use anyhow::{Context, Result};
use clap::Parser;

use deploywatch::config;
use deploywatch::presentation::{Cli, Commands, WatchArgs};

mod commands;
mod ui;

use commands::logs::cmd_logs;
use commands::status::cmd_status;
use commands::watch::cmd_watch;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    deploywatch::logging::init(cli.verbose);

    let json = cli.json;
    let exit_code_flag = matches!(&cli.command, Some(Commands::Watch(args)) if args.exit_code);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            ui::error::print_error(&err, json);
            if exit_code_flag {
                1
            } else {
                0
            }
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let mut loaded = config::resolve(cli.config.as_deref(), &cwd)?;
    cli.apply_overrides(&mut loaded.config);

    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "loaded config");
    }

    let ui = UiContext::new(cli.json, &loaded.config);
    if !loaded.warnings.is_empty() {
        eprint!(
            "{}",
            ui::views::config::render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
        );
    }

    match cli.command.unwrap_or_else(|| Commands::Watch(WatchArgs::default())) {
        Commands::Watch(args) => cmd_watch(&args, loaded.config, ui),
        Commands::Status => cmd_status(&loaded.config, ui).map(|()| 0),
        Commands::Logs { address, limit } => {
            cmd_logs(&address, limit, &loaded.config, ui).map(|()| 0)
        }
    }
}
