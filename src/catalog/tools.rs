use super::{InstallMap, PlatformValue, PresetId, Tool};
use crate::common::platform::Platform;
use crate::routes;

pub static TOOLS: &[Tool] = &[
    // ── Core ──────────────────────────────────────────────
    Tool {
        id: "rg",
        name: "ripgrep",
        description: "Fast code search",
        preset: PresetId::Core,
        verify: PlatformValue::Uniform("rg --version"),
        install: InstallMap {
            darwin: routes![Brew "ripgrep"],
            linux: routes![Apt "ripgrep", Cargo "ripgrep"],
            windows: routes![Scoop "ripgrep", Cargo "ripgrep"],
        },
    },
    Tool {
        id: "fd",
        name: "fd",
        description: "Fast file finder",
        preset: PresetId::Core,
        // Debian ships the binary as fdfind, cargo installs it as fd
        verify: PlatformValue::PerPlatform(&[
            (Platform::Darwin, "fd --version"),
            (Platform::Linux, "sh -c 'fdfind --version 2>/dev/null || fd --version'"),
            (Platform::Windows, "fd --version"),
        ]),
        install: InstallMap {
            darwin: routes![Brew "fd"],
            linux: routes![Apt "fd-find", Cargo "fd-find"],
            windows: routes![Scoop "fd", Cargo "fd-find"],
        },
    },
    Tool {
        id: "jq",
        name: "jq",
        description: "JSON processor",
        preset: PresetId::Core,
        verify: PlatformValue::Uniform("jq --version"),
        install: InstallMap {
            darwin: routes![Brew "jq"],
            linux: routes![Apt "jq"],
            windows: routes![Scoop "jq"],
        },
    },
    Tool {
        id: "yq",
        name: "yq",
        description: "YAML processor",
        preset: PresetId::Core,
        verify: PlatformValue::Uniform("yq --version"),
        install: InstallMap {
            darwin: routes![Brew "yq"],
            linux: routes![unavailable],
            windows: routes![Scoop "yq"],
        },
    },
    Tool {
        id: "bat",
        name: "bat",
        description: "Cat with syntax highlighting",
        preset: PresetId::Core,
        // Same split as fd: batcat from apt, bat from cargo
        verify: PlatformValue::PerPlatform(&[
            (Platform::Darwin, "bat --version"),
            (Platform::Linux, "sh -c 'batcat --version 2>/dev/null || bat --version'"),
        ]),
        install: InstallMap {
            darwin: routes![Brew "bat"],
            linux: routes![Apt "bat", Cargo "bat"],
            windows: routes![Scoop "bat", Cargo "bat"],
        },
    },
    Tool {
        id: "tree",
        name: "tree",
        description: "Directory structure viewer",
        preset: PresetId::Core,
        verify: PlatformValue::Uniform("tree --version"),
        install: InstallMap {
            darwin: routes![Brew "tree"],
            linux: routes![Apt "tree"],
            windows: routes![unavailable],
        },
    },
    Tool {
        id: "gh",
        name: "GitHub CLI",
        description: "GitHub CLI for PRs, issues, releases",
        preset: PresetId::Core,
        verify: PlatformValue::Uniform("gh --version"),
        install: InstallMap {
            darwin: routes![Brew "gh"],
            linux: routes![Apt "gh"],
            windows: routes![Scoop "gh"],
        },
    },
    Tool {
        id: "fzf",
        name: "fzf",
        description: "Fuzzy finder",
        preset: PresetId::Core,
        verify: PlatformValue::Uniform("fzf --version"),
        install: InstallMap {
            darwin: routes![Brew "fzf"],
            linux: routes![Apt "fzf"],
            windows: routes![Scoop "fzf"],
        },
    },
    // ── Agent ─────────────────────────────────────────────
    Tool {
        id: "shellcheck",
        name: "shellcheck",
        description: "Static analysis for shell scripts",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("shellcheck --version"),
        install: InstallMap {
            darwin: routes![Brew "shellcheck"],
            linux: routes![Apt "shellcheck"],
            windows: routes![Scoop "shellcheck"],
        },
    },
    Tool {
        id: "ast-grep",
        name: "ast-grep",
        description: "Structural code search/replace",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("ast-grep --version"),
        install: InstallMap {
            darwin: routes![Brew "ast-grep", Npm "@ast-grep/cli"],
            linux: routes![Npm "@ast-grep/cli", Cargo "ast-grep"],
            windows: routes![Npm "@ast-grep/cli", Cargo "ast-grep"],
        },
    },
    Tool {
        id: "just",
        name: "just",
        description: "Command runner (agent-readable task menu)",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("just --version"),
        install: InstallMap {
            darwin: routes![Brew "just"],
            linux: routes![Apt "just", Cargo "just"],
            windows: routes![Scoop "just", Cargo "just"],
        },
    },
    Tool {
        id: "grex",
        name: "grex",
        description: "Generate regex from examples",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("grex --version"),
        install: InstallMap {
            darwin: routes![Brew "grex"],
            linux: routes![Cargo "grex"],
            windows: routes![Scoop "grex", Cargo "grex"],
        },
    },
    Tool {
        id: "knip",
        name: "knip",
        description: "Find unused code/deps in TS/JS",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("knip --version"),
        install: InstallMap {
            darwin: routes![Npm "knip"],
            linux: routes![Npm "knip"],
            windows: routes![Npm "knip"],
        },
    },
    Tool {
        id: "sd",
        name: "sd",
        description: "Simpler sed replacement",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("sd --version"),
        install: InstallMap {
            darwin: routes![Brew "sd"],
            linux: routes![Cargo "sd"],
            windows: routes![Scoop "sd", Cargo "sd"],
        },
    },
    Tool {
        id: "hyperfine",
        name: "hyperfine",
        description: "CLI benchmarking",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("hyperfine --version"),
        install: InstallMap {
            darwin: routes![Brew "hyperfine"],
            linux: routes![Apt "hyperfine", Cargo "hyperfine"],
            windows: routes![Scoop "hyperfine", Cargo "hyperfine"],
        },
    },
    Tool {
        id: "tokei",
        name: "tokei",
        description: "Code statistics",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("tokei --version"),
        install: InstallMap {
            darwin: routes![Brew "tokei"],
            linux: routes![Cargo "tokei"],
            windows: routes![Scoop "tokei", Cargo "tokei"],
        },
    },
    Tool {
        id: "biome",
        name: "Biome",
        description: "Fast formatter and linter for JS/TS/JSON",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("biome --version"),
        install: InstallMap {
            darwin: routes![Brew "biome", Npm "@biomejs/biome"],
            linux: routes![Npm "@biomejs/biome"],
            windows: routes![Npm "@biomejs/biome"],
        },
    },
    Tool {
        id: "duckdb",
        name: "DuckDB",
        description: "SQL over CSV, JSON and Parquet files",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("duckdb --version"),
        install: InstallMap {
            darwin: routes![Brew "duckdb"],
            linux: routes![unavailable],
            windows: routes![Scoop "duckdb"],
        },
    },
    Tool {
        id: "htmlq",
        name: "htmlq",
        description: "jq for HTML via CSS selectors",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("htmlq --version"),
        install: InstallMap {
            darwin: routes![Brew "htmlq"],
            linux: routes![Cargo "htmlq"],
            windows: routes![Scoop "htmlq", Cargo "htmlq"],
        },
    },
    Tool {
        id: "typos",
        name: "typos",
        description: "Source code spell checker",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("typos --version"),
        install: InstallMap {
            darwin: routes![Brew "typos-cli"],
            linux: routes![Cargo "typos-cli"],
            windows: routes![Scoop "typos", Cargo "typos-cli"],
        },
    },
    Tool {
        id: "taplo",
        name: "taplo",
        description: "TOML formatter and linter",
        preset: PresetId::Agent,
        verify: PlatformValue::Uniform("taplo --version"),
        install: InstallMap {
            darwin: routes![Brew "taplo"],
            linux: routes![Npm "@taplo/cli", Cargo "taplo-cli"],
            windows: routes![Npm "@taplo/cli", Cargo "taplo-cli"],
        },
    },
    // ── Media ─────────────────────────────────────────────
    Tool {
        id: "ffmpeg",
        name: "ffmpeg",
        description: "Audio/video Swiss army knife",
        preset: PresetId::Media,
        verify: PlatformValue::Uniform("ffmpeg -version"),
        install: InstallMap {
            darwin: routes![Brew "ffmpeg"],
            linux: routes![Apt "ffmpeg"],
            windows: routes![Scoop "ffmpeg"],
        },
    },
    Tool {
        id: "exiftool",
        name: "exiftool",
        description: "Image/media metadata",
        preset: PresetId::Media,
        verify: PlatformValue::Uniform("exiftool -ver"),
        install: InstallMap {
            darwin: routes![Brew "exiftool"],
            linux: routes![Apt "libimage-exiftool-perl"],
            windows: routes![Scoop "exiftool"],
        },
    },
    Tool {
        id: "imagemagick",
        name: "ImageMagick",
        description: "Image transforms",
        preset: PresetId::Media,
        verify: PlatformValue::PerPlatform(&[(Platform::Darwin, "magick -version")]),
        install: InstallMap {
            darwin: routes![Brew "imagemagick"],
            linux: routes![Apt "imagemagick"],
            windows: routes![Scoop "imagemagick"],
        },
    },
    Tool {
        id: "svgo",
        name: "svgo",
        description: "SVG optimiser",
        preset: PresetId::Media,
        verify: PlatformValue::Uniform("svgo --version"),
        install: InstallMap {
            darwin: routes![Npm "svgo"],
            linux: routes![Npm "svgo"],
            windows: routes![Npm "svgo"],
        },
    },
    Tool {
        id: "pandoc",
        name: "pandoc",
        description: "Universal document converter",
        preset: PresetId::Media,
        verify: PlatformValue::Uniform("pandoc --version"),
        install: InstallMap {
            darwin: routes![Brew "pandoc"],
            linux: routes![Apt "pandoc"],
            windows: routes![Scoop "pandoc"],
        },
    },
    // ── DX ────────────────────────────────────────────────
    Tool {
        id: "eza",
        name: "eza",
        description: "Modern ls replacement",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("eza --version"),
        install: InstallMap {
            darwin: routes![Brew "eza"],
            linux: routes![Apt "eza", Cargo "eza"],
            windows: routes![Scoop "eza", Cargo "eza"],
        },
    },
    Tool {
        id: "zoxide",
        name: "zoxide",
        description: "Smarter cd",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("zoxide --version"),
        install: InstallMap {
            darwin: routes![Brew "zoxide"],
            linux: routes![Apt "zoxide", Cargo "zoxide"],
            windows: routes![Scoop "zoxide", Cargo "zoxide"],
        },
    },
    Tool {
        id: "delta",
        name: "delta",
        description: "Better git diffs",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("delta --version"),
        install: InstallMap {
            darwin: routes![Brew "git-delta"],
            linux: routes![Apt "git-delta", Cargo "git-delta"],
            windows: routes![Scoop "delta", Cargo "git-delta"],
        },
    },
    Tool {
        id: "glow",
        name: "glow",
        description: "Terminal markdown renderer",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("glow --version"),
        install: InstallMap {
            darwin: routes![Brew "glow"],
            linux: routes![unavailable],
            windows: routes![Scoop "glow"],
        },
    },
    Tool {
        id: "mise",
        name: "mise",
        description: "Runtime version manager",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("mise --version"),
        install: InstallMap {
            darwin: routes![Brew "mise"],
            linux: routes![Cargo "mise"],
            windows: routes![Scoop "mise", Cargo "mise"],
        },
    },
    Tool {
        id: "watchexec",
        name: "watchexec",
        description: "Run commands on file change",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("watchexec --version"),
        install: InstallMap {
            darwin: routes![Brew "watchexec"],
            linux: routes![Cargo "watchexec-cli"],
            windows: routes![Scoop "watchexec", Cargo "watchexec-cli"],
        },
    },
    Tool {
        id: "mkcert",
        name: "mkcert",
        description: "Local HTTPS certs",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("mkcert --version"),
        install: InstallMap {
            darwin: routes![Brew "mkcert"],
            linux: routes![Apt "mkcert"],
            windows: routes![Scoop "mkcert"],
        },
    },
    Tool {
        id: "xh",
        name: "xh",
        description: "Friendly HTTP requests",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("xh --version"),
        install: InstallMap {
            darwin: routes![Brew "xh"],
            linux: routes![Cargo "xh"],
            windows: routes![Scoop "xh", Cargo "xh"],
        },
    },
    Tool {
        id: "tldr",
        name: "tldr",
        description: "Example-first man pages",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("tldr --version"),
        install: InstallMap {
            darwin: routes![Brew "tlrc"],
            linux: routes![Cargo "tlrc"],
            windows: routes![Scoop "tlrc", Cargo "tlrc"],
        },
    },
    Tool {
        id: "difftastic",
        name: "difftastic",
        description: "Syntax-aware structural diffs",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("difft --version"),
        install: InstallMap {
            darwin: routes![Brew "difftastic"],
            linux: routes![Cargo "difftastic"],
            windows: routes![Scoop "difftastic", Cargo "difftastic"],
        },
    },
    Tool {
        id: "lazygit",
        name: "lazygit",
        description: "Terminal UI for git",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("lazygit --version"),
        install: InstallMap {
            darwin: routes![Brew "lazygit"],
            linux: routes![Apt "lazygit"],
            windows: routes![Scoop "lazygit"],
        },
    },
    Tool {
        id: "dust",
        name: "dust",
        description: "Disk usage at a glance",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("dust --version"),
        install: InstallMap {
            darwin: routes![Brew "dust"],
            linux: routes![Cargo "du-dust"],
            windows: routes![Scoop "dust", Cargo "du-dust"],
        },
    },
    Tool {
        id: "btm",
        name: "bottom",
        description: "Graphical process/system monitor",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("btm --version"),
        install: InstallMap {
            darwin: routes![Brew "bottom"],
            linux: routes![Cargo "bottom"],
            windows: routes![Scoop "bottom", Cargo "bottom"],
        },
    },
    Tool {
        id: "gum",
        name: "gum",
        description: "Glamorous shell script prompts",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("gum --version"),
        install: InstallMap {
            darwin: routes![Brew "gum"],
            linux: routes![unavailable],
            windows: routes![Scoop "gum"],
        },
    },
    Tool {
        id: "direnv",
        name: "direnv",
        description: "Per-directory environment variables",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("direnv --version"),
        install: InstallMap {
            darwin: routes![Brew "direnv"],
            linux: routes![Apt "direnv"],
            windows: routes![unavailable],
        },
    },
    Tool {
        id: "procs",
        name: "procs",
        description: "Modern ps replacement",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("procs --version"),
        install: InstallMap {
            darwin: routes![Brew "procs"],
            linux: routes![Cargo "procs"],
            windows: routes![Scoop "procs", Cargo "procs"],
        },
    },
    Tool {
        id: "uv",
        name: "uv",
        description: "Fast Python package and project manager",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("uv --version"),
        install: InstallMap {
            darwin: routes![Brew "uv"],
            linux: routes![unavailable],
            windows: routes![Scoop "uv"],
        },
    },
    Tool {
        id: "hexyl",
        name: "hexyl",
        description: "Colored hex viewer",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("hexyl --version"),
        install: InstallMap {
            darwin: routes![Brew "hexyl"],
            linux: routes![Apt "hexyl", Cargo "hexyl"],
            windows: routes![Scoop "hexyl", Cargo "hexyl"],
        },
    },
    Tool {
        id: "doggo",
        name: "doggo",
        description: "Human-friendly DNS client",
        preset: PresetId::Dx,
        verify: PlatformValue::Uniform("doggo --version"),
        install: InstallMap {
            darwin: routes![Brew "doggo"],
            linux: routes![unavailable],
            windows: routes![Scoop "doggo"],
        },
    },
    // ── Security ──────────────────────────────────────────
    Tool {
        id: "trivy",
        name: "trivy",
        description: "Vulnerability scanner",
        preset: PresetId::Security,
        verify: PlatformValue::Uniform("trivy --version"),
        install: InstallMap {
            darwin: routes![Brew "trivy"],
            linux: routes![unavailable],
            windows: routes![Scoop "trivy"],
        },
    },
    Tool {
        id: "act",
        name: "act",
        description: "Run GitHub Actions locally",
        preset: PresetId::Security,
        verify: PlatformValue::Uniform("act --version"),
        install: InstallMap {
            darwin: routes![Brew "act"],
            linux: routes![unavailable],
            windows: routes![Scoop "act"],
        },
    },
    Tool {
        id: "gitleaks",
        name: "gitleaks",
        description: "Secret scanner for git repos",
        preset: PresetId::Security,
        verify: PlatformValue::Uniform("gitleaks version"),
        install: InstallMap {
            darwin: routes![Brew "gitleaks"],
            linux: routes![unavailable],
            windows: routes![Scoop "gitleaks"],
        },
    },
    Tool {
        id: "semgrep",
        name: "semgrep",
        description: "Pattern-based static analysis",
        preset: PresetId::Security,
        verify: PlatformValue::Uniform("semgrep --version"),
        install: InstallMap {
            darwin: routes![Brew "semgrep"],
            linux: routes![unavailable],
            windows: routes![unavailable],
        },
    },
    Tool {
        id: "age",
        name: "age",
        description: "Simple file encryption",
        preset: PresetId::Security,
        verify: PlatformValue::Uniform("age --version"),
        install: InstallMap {
            darwin: routes![Brew "age"],
            linux: routes![Apt "age"],
            windows: routes![Scoop "age"],
        },
    },
];
