use clap::{Parser, Subcommand};

use crate::select::SelectionArgs;

/// Install a curated set of CLI tools for coding agents
#[derive(Parser, Debug)]
#[command(name = "agent-loadout", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Select tools and install them with the platform's package managers
    Install {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Run the installers instead of only previewing them
        #[arg(long)]
        apply: bool,
    },
    /// Check which tools are installed and print their versions
    #[command(alias = "doctor")]
    Verify {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List presets and the tools they contain
    List {
        /// Print presets and tools as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved install plan for this machine without installing
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run; a bare invocation starts the interactive install.
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Install {
            selection: SelectionArgs::default(),
            apply: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_is_interactive_install() {
        let cli = Cli::parse_from(["agent-loadout"]);
        match cli.subcommand() {
            Commands::Install { selection, apply } => {
                assert!(selection.is_interactive());
                assert!(!apply);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn install_flags_parse() {
        let cli = Cli::parse_from([
            "agent-loadout",
            "--no-color",
            "install",
            "--preset",
            "core",
            "dx",
            "--skip",
            "gh",
            "--apply",
        ]);
        assert!(cli.no_color);
        assert_eq!(
            cli.subcommand(),
            Commands::Install {
                selection: SelectionArgs {
                    presets: vec!["core".into(), "dx".into()],
                    skip: vec!["gh".into()],
                    ..Default::default()
                },
                apply: true,
            }
        );
    }

    #[test]
    fn doctor_is_an_alias_for_verify() {
        let cli = Cli::parse_from(["agent-loadout", "doctor", "--json"]);
        assert_eq!(cli.subcommand(), Commands::Verify { json: true });
    }
}
