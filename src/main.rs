mod catalog;
mod cli;
mod commands;
mod common;
mod preview;
mod receipt;
mod resolve;
mod select;
mod skills;
mod ui;
mod verify;

use clap::Parser;

use crate::cli::Cli;
use crate::ui::prelude::*;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    ui::init(OutputFormat::Text, !cli.no_color);
    ui::set_debug_mode(cli.debug);
    emit(
        Level::Debug,
        "cli.start",
        &format!("agent-loadout {}", env!("CARGO_PKG_VERSION")),
        None,
    );

    let code = tokio::select! {
        result = commands::dispatch(cli.subcommand()) => match result {
            Ok(code) => code,
            Err(e) => {
                emit(Level::Error, "cli.error", &format!("Error: {e:#}"), None);
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            blank_line();
            emit(Level::Info, "cli.cancelled", "Cancelled.", None);
            0
        }
    };

    std::process::exit(code);
}
