//! Skill files: short usage notes per tool that coding agents read from
//! disk. One markdown file per installed tool plus a `SKILL.md` index.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{PRESETS, TOOLS, Tool};
use crate::common::paths;

/// Skill body per tool id, in catalog order.
static SKILL_CONTENT: &[(&str, &str)] = &[
    ("rg", include_str!("content/rg.md")),
    ("fd", include_str!("content/fd.md")),
    ("jq", include_str!("content/jq.md")),
    ("yq", include_str!("content/yq.md")),
    ("bat", include_str!("content/bat.md")),
    ("tree", include_str!("content/tree.md")),
    ("gh", include_str!("content/gh.md")),
    ("fzf", include_str!("content/fzf.md")),
    ("shellcheck", include_str!("content/shellcheck.md")),
    ("ast-grep", include_str!("content/ast-grep.md")),
    ("just", include_str!("content/just.md")),
    ("grex", include_str!("content/grex.md")),
    ("knip", include_str!("content/knip.md")),
    ("sd", include_str!("content/sd.md")),
    ("hyperfine", include_str!("content/hyperfine.md")),
    ("tokei", include_str!("content/tokei.md")),
    ("biome", include_str!("content/biome.md")),
    ("duckdb", include_str!("content/duckdb.md")),
    ("htmlq", include_str!("content/htmlq.md")),
    ("typos", include_str!("content/typos.md")),
    ("taplo", include_str!("content/taplo.md")),
    ("ffmpeg", include_str!("content/ffmpeg.md")),
    ("exiftool", include_str!("content/exiftool.md")),
    ("imagemagick", include_str!("content/imagemagick.md")),
    ("svgo", include_str!("content/svgo.md")),
    ("pandoc", include_str!("content/pandoc.md")),
    ("eza", include_str!("content/eza.md")),
    ("zoxide", include_str!("content/zoxide.md")),
    ("delta", include_str!("content/delta.md")),
    ("glow", include_str!("content/glow.md")),
    ("mise", include_str!("content/mise.md")),
    ("watchexec", include_str!("content/watchexec.md")),
    ("mkcert", include_str!("content/mkcert.md")),
    ("xh", include_str!("content/xh.md")),
    ("tldr", include_str!("content/tldr.md")),
    ("difftastic", include_str!("content/difftastic.md")),
    ("lazygit", include_str!("content/lazygit.md")),
    ("dust", include_str!("content/dust.md")),
    ("btm", include_str!("content/btm.md")),
    ("gum", include_str!("content/gum.md")),
    ("direnv", include_str!("content/direnv.md")),
    ("procs", include_str!("content/procs.md")),
    ("uv", include_str!("content/uv.md")),
    ("hexyl", include_str!("content/hexyl.md")),
    ("doggo", include_str!("content/doggo.md")),
    ("trivy", include_str!("content/trivy.md")),
    ("act", include_str!("content/act.md")),
    ("gitleaks", include_str!("content/gitleaks.md")),
    ("semgrep", include_str!("content/semgrep.md")),
    ("age", include_str!("content/age.md")),
];

const INDEX_FILE: &str = "SKILL.md";

pub fn skill_content(id: &str) -> Option<&'static str> {
    SKILL_CONTENT
        .iter()
        .find(|(tool, _)| *tool == id)
        .map(|(_, body)| body.trim_end())
}

pub fn skill_filename(id: &str) -> String {
    format!("{}.md", id)
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Frontmatter plus body for one tool, or `None` when there are no notes for it.
pub fn render_skill(tool: &Tool) -> Option<String> {
    let body = skill_content(tool.id)?;
    Some(format!(
        "---\ntool: {}\nname: {}\ndescription: {}\ncategory: {}\nsource: agent-loadout\n---\n\n{}\n",
        tool.id,
        quote(tool.name),
        quote(tool.description),
        tool.preset.id(),
        body
    ))
}

/// The `SKILL.md` index linking every tool file, grouped by preset.
pub fn render_index(tools: &[&Tool]) -> String {
    let mut out = String::from(
        "---\nname: agent-loadout\ndescription: \"Installed CLI tools and how to drive them. \
         Read the linked file for trusted commands and gotchas before using a tool.\"\n\
         source: agent-loadout\n---\n\n# Agent Loadout\n",
    );

    for preset in PRESETS {
        let group: Vec<&&Tool> = tools.iter().filter(|t| t.preset == preset.id).collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {}\n", preset.name));
        for tool in group {
            out.push_str(&format!(
                "- **[{}](./{})**: {}\n",
                tool.name,
                skill_filename(tool.id),
                tool.description
            ));
        }
    }
    out
}

/// Ids from `ids` that have no skill file in `dir`, in input order.
pub fn missing_skills<S: AsRef<str>>(ids: &[S], dir: &Path) -> Vec<String> {
    ids.iter()
        .map(|id| id.as_ref())
        .filter(|id| !dir.join(skill_filename(id)).exists())
        .map(str::to_string)
        .collect()
}

/// Write skill files for `tools` into every skill directory.
pub fn write_skills(tools: &[&Tool]) -> Result<usize> {
    write_skills_to(tools, &paths::skill_dirs()?)
}

/// Write one file per tool that has notes into each of `dirs`, then
/// rebuild each directory's index from the files it now holds.
/// Returns the number of tools written.
pub fn write_skills_to(tools: &[&Tool], dirs: &[PathBuf]) -> Result<usize> {
    let rendered: Vec<(&Tool, String)> = tools
        .iter()
        .filter_map(|tool| render_skill(tool).map(|text| (*tool, text)))
        .collect();
    if rendered.is_empty() {
        return Ok(0);
    }

    for dir in dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating skill directory {}", dir.display()))?;
        for (tool, text) in &rendered {
            let path = dir.join(skill_filename(tool.id));
            fs::write(&path, text)
                .with_context(|| format!("writing skill file {}", path.display()))?;
        }

        let ids: Vec<&str> = TOOLS.iter().map(|t| t.id).collect();
        let missing = missing_skills(&ids, dir);
        let present: Vec<&Tool> = TOOLS
            .iter()
            .filter(|t| !missing.iter().any(|m| m == t.id))
            .collect();
        let index = dir.join(INDEX_FILE);
        fs::write(&index, render_index(&present))
            .with_context(|| format!("writing skill index {}", index.display()))?;
    }

    Ok(rendered.len())
}
