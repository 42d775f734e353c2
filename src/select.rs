//! Turning command-line flags or interactive prompts into the list of
//! tools to resolve.

use anyhow::{Context, Result};
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{self, PRESETS, PresetId, TOOLS, Tool};
use crate::common::platform::Platform;
use crate::verify::verify_tools;

fn quoted(ids: &[String]) -> String {
    ids.iter()
        .map(|id| format!("'{}'", id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(ids: &[String]) -> &'static str {
    if ids.len() > 1 { "s" } else { "" }
}

fn preset_ids() -> String {
    PRESETS.iter().map(|p| p.id.id()).collect::<Vec<_>>().join(", ")
}

fn tool_ids() -> String {
    TOOLS.iter().map(|t| t.id).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown preset{}: {}. Available: {}", plural(.0), quoted(.0), preset_ids())]
    UnknownPresets(Vec<String>),
    #[error("Unknown tool{}: {}. Available: {}", plural(.0), quoted(.0), tool_ids())]
    UnknownTools(Vec<String>),
}

/// Selection flags shared by `install` and `plan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct SelectionArgs {
    /// Select presets without prompting
    #[arg(long = "preset", value_name = "PRESET", num_args = 1..)]
    pub presets: Vec<String>,

    /// Select individual tools by id
    #[arg(long = "tool", value_name = "ID", num_args = 1..)]
    pub tools: Vec<String>,

    /// Select the whole catalog
    #[arg(long)]
    pub all: bool,

    /// Leave these tool ids out of the selection
    #[arg(long, value_name = "ID", num_args = 1..)]
    pub skip: Vec<String>,
}

impl SelectionArgs {
    /// No selection flag was given, so the user gets prompted.
    pub fn is_interactive(&self) -> bool {
        !self.all && self.presets.is_empty() && self.tools.is_empty()
    }

    /// The flags that reproduce this selection, for "rerun with --apply" hints.
    pub fn to_flags(&self) -> String {
        let mut parts = Vec::new();
        if self.all {
            parts.push("--all".to_string());
        }
        if !self.presets.is_empty() {
            parts.push(format!("--preset {}", self.presets.join(" ")));
        }
        if !self.tools.is_empty() {
            parts.push(format!("--tool {}", self.tools.join(" ")));
        }
        if !self.skip.is_empty() {
            parts.push(format!("--skip {}", self.skip.join(" ")));
        }
        parts.join(" ")
    }
}

fn parse_presets(ids: &[String]) -> Result<Vec<PresetId>, SelectionError> {
    let invalid: Vec<String> = ids
        .iter()
        .filter(|id| PresetId::from_id(id).is_none())
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(SelectionError::UnknownPresets(invalid));
    }
    Ok(ids.iter().filter_map(|id| PresetId::from_id(id)).collect())
}

fn check_tool_ids(ids: &[String]) -> Result<(), SelectionError> {
    let invalid: Vec<String> = ids
        .iter()
        .filter(|id| catalog::get_tool(id).is_none())
        .cloned()
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(SelectionError::UnknownTools(invalid))
    }
}

/// Reject `--skip` ids the catalog does not know. Runs before any prompt.
pub fn check_skip_ids(args: &SelectionArgs) -> Result<(), SelectionError> {
    check_tool_ids(&args.skip)
}

/// Catalog tools belonging to any of `presets`, in catalog order.
pub fn tools_for_presets(presets: &[PresetId]) -> Vec<&'static Tool> {
    TOOLS.iter().filter(|t| presets.contains(&t.preset)).collect()
}

/// Drop every tool whose id is in `skip`.
pub fn apply_skip<'a, S: AsRef<str>>(tools: Vec<&'a Tool>, skip: &[S]) -> Vec<&'a Tool> {
    let skip: HashSet<&str> = skip.iter().map(|s| s.as_ref()).collect();
    tools.into_iter().filter(|t| !skip.contains(t.id)).collect()
}

/// Resolve non-interactive flags to catalog tools.
///
/// `--all` wins; otherwise presets and explicit ids are unioned in catalog
/// order. `--skip` ids must exist; `config_skip` ids are applied silently.
pub fn select_from_args(
    args: &SelectionArgs,
    config_skip: &[String],
) -> Result<Vec<&'static Tool>, SelectionError> {
    let presets = parse_presets(&args.presets)?;
    check_tool_ids(&args.tools)?;
    check_skip_ids(args)?;

    let selected: Vec<&'static Tool> = if args.all {
        catalog::all_tools()
    } else {
        TOOLS
            .iter()
            .filter(|t| presets.contains(&t.preset) || args.tools.iter().any(|id| id == t.id))
            .collect()
    };

    let selected = apply_skip(selected, &args.skip);
    Ok(apply_skip(selected, config_skip))
}

/// Ask which presets to install. Defaults come from `Preset::default_on`.
async fn prompt_presets() -> Result<Option<Vec<PresetId>>> {
    tokio::task::spawn_blocking(|| {
        let labels: Vec<String> = PRESETS
            .iter()
            .map(|p| format!("{} — {}", p.name, p.description))
            .collect();
        let defaults: Vec<bool> = PRESETS.iter().map(|p| p.default_on).collect();

        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Which presets do you want to install?")
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()
            .context("reading preset selection")?;

        Ok(picked.map(|idx| idx.into_iter().map(|i| PRESETS[i].id).collect()))
    })
    .await
    .context("preset prompt task failed")?
}

async fn prompt_tools(
    available: Vec<&'static Tool>,
    installed: HashSet<String>,
) -> Result<Option<Vec<&'static Tool>>> {
    tokio::task::spawn_blocking(move || {
        let labels: Vec<String> = available
            .iter()
            .map(|t| {
                let badge = if installed.contains(t.id) {
                    " (installed)".green().to_string()
                } else {
                    String::new()
                };
                format!("{}{} — {}", t.name, badge, t.description.dimmed())
            })
            .collect();
        let defaults = vec![true; labels.len()];

        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Toggle individual tools (all selected by default)")
            .items(&labels)
            .defaults(&defaults)
            .interact_opt()
            .context("reading tool selection")?;

        Ok(picked.map(|idx| idx.into_iter().map(|i| available[i]).collect()))
    })
    .await
    .context("tool prompt task failed")?
}

/// Interactive flow: presets, then individual tools with already-installed
/// ones badged. An empty result means the user picked nothing.
pub async fn select_interactively(
    platform: Platform,
    verify_timeout: Duration,
) -> Result<Vec<&'static Tool>> {
    let Some(presets) = prompt_presets().await? else {
        return Ok(Vec::new());
    };
    if presets.is_empty() {
        return Ok(Vec::new());
    }

    let available = tools_for_presets(&presets);
    let status = verify_tools(&available, platform, verify_timeout).await;
    let installed: HashSet<String> = status
        .into_iter()
        .filter(|r| r.installed)
        .map(|r| r.id)
        .collect();

    Ok(prompt_tools(available, installed).await?.unwrap_or_default())
}

pub async fn confirm_install() -> Result<bool> {
    tokio::task::spawn_blocking(|| {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Install now?")
            .default(true)
            .interact_opt()
            .context("reading confirmation")?;
        Ok(answer.unwrap_or(false))
    })
    .await
    .context("confirmation prompt task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SelectionArgs {
        SelectionArgs::default()
    }

    fn ids(tools: &[&Tool]) -> Vec<&'static str> {
        tools.iter().map(|t| t.id).collect()
    }

    #[test]
    fn no_flags_is_interactive() {
        assert!(args().is_interactive());
        assert!(!SelectionArgs { all: true, ..args() }.is_interactive());
        assert!(
            !SelectionArgs {
                tools: vec!["jq".into()],
                ..args()
            }
            .is_interactive()
        );
    }

    #[test]
    fn all_selects_catalog() {
        let selected = select_from_args(&SelectionArgs { all: true, ..args() }, &[]).unwrap();
        assert_eq!(selected.len(), TOOLS.len());
    }

    #[test]
    fn presets_and_tools_union_in_catalog_order() {
        let selection = SelectionArgs {
            presets: vec!["security".into()],
            tools: vec!["ffmpeg".into(), "rg".into()],
            ..args()
        };
        let selected = select_from_args(&selection, &[]).unwrap();
        let ids = ids(&selected);

        assert_eq!(ids[0], "rg");
        assert!(ids.contains(&"ffmpeg"));
        assert!(ids.contains(&"trivy"));
        assert!(!ids.contains(&"jq"));
    }

    #[test]
    fn skip_flags_and_config_skip_remove_tools() {
        let selection = SelectionArgs {
            presets: vec!["core".into()],
            skip: vec!["gh".into()],
            ..args()
        };
        let selected = select_from_args(&selection, &["fzf".to_string()]).unwrap();
        let ids = ids(&selected);

        assert!(ids.contains(&"rg"));
        assert!(!ids.contains(&"gh"));
        assert!(!ids.contains(&"fzf"));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let selection = SelectionArgs {
            presets: vec!["core".into(), "essentials".into(), "fun".into()],
            ..args()
        };
        let err = select_from_args(&selection, &[]).unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownPresets(vec!["essentials".into(), "fun".into()])
        );
        assert_eq!(
            err.to_string(),
            "Unknown presets: 'essentials', 'fun'. Available: core, agent, media, dx, security"
        );
    }

    #[test]
    fn unknown_tool_or_skip_is_an_error() {
        let selection = SelectionArgs {
            tools: vec!["ripgrep".into()],
            ..args()
        };
        assert_eq!(
            select_from_args(&selection, &[]).unwrap_err(),
            SelectionError::UnknownTools(vec!["ripgrep".into()])
        );

        let selection = SelectionArgs {
            all: true,
            skip: vec!["nope".into()],
            ..args()
        };
        assert!(select_from_args(&selection, &[]).is_err());
    }

    #[test]
    fn unknown_tool_error_lists_catalog_ids() {
        let err = SelectionError::UnknownTools(vec!["ripgrep".into()]);
        let message = err.to_string();
        assert!(message.starts_with("Unknown tool: 'ripgrep'. Available: rg, fd, jq"));
        assert!(TOOLS.iter().all(|t| message.contains(t.id)));
    }

    #[test]
    fn skip_ids_are_checked_without_selection_flags() {
        let selection = SelectionArgs {
            skip: vec!["gh".into(), "nope".into()],
            ..args()
        };
        assert!(selection.is_interactive());
        assert_eq!(
            check_skip_ids(&selection),
            Err(SelectionError::UnknownTools(vec!["nope".into()]))
        );
        assert_eq!(check_skip_ids(&args()), Ok(()));
    }

    #[test]
    fn tools_for_presets_filters() {
        let media = tools_for_presets(&[PresetId::Media]);
        assert!(media.iter().all(|t| t.preset == PresetId::Media));
        assert!(ids(&media).contains(&"imagemagick"));
    }

    #[test]
    fn to_flags_round_trips_selection() {
        let selection = SelectionArgs {
            presets: vec!["core".into(), "dx".into()],
            skip: vec!["gh".into()],
            ..args()
        };
        assert_eq!(selection.to_flags(), "--preset core dx --skip gh");
        assert_eq!(SelectionArgs { all: true, ..args() }.to_flags(), "--all");
    }
}
