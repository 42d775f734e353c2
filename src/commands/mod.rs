//! Handlers behind each CLI subcommand.

mod install;
mod list;
mod plan;
mod verify;

use anyhow::Result;

use crate::cli::Commands;
use crate::ui::{self, OutputFormat};

/// Run `command` and return the process exit code it asks for.
pub async fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Install { selection, apply } => {
            install::handle_install(selection, apply).await?;
            Ok(0)
        }
        Commands::Verify { json } => {
            use_json(json);
            let all_installed = verify::handle_verify(json).await?;
            Ok(if all_installed { 0 } else { 1 })
        }
        Commands::List { json } => {
            use_json(json);
            list::handle_list(json)?;
            Ok(0)
        }
        Commands::Plan { selection, json } => {
            use_json(json);
            plan::handle_plan(selection, json).await?;
            Ok(0)
        }
    }
}

fn use_json(json: bool) {
    if json {
        ui::set_output_format(OutputFormat::Json);
    }
}
