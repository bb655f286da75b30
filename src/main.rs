use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use scrollist::config::{self, Settings};
use scrollist::logging::init_logging;
use scrollist::runner::{run_app, RunOptions};
use scrollist::ui::{Colors, Theme};

/// Browse lines of text in a scrollable, selectable list.
#[derive(Parser, Debug)]
#[command(name = "scrollist", version, about)]
struct Cli {
    /// Files whose lines are listed. A sample list is shown when omitted.
    files: Vec<PathBuf>,

    /// Settings file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in theme (`dark` or `light`).
    #[arg(long)]
    theme: Option<String>,

    /// Theme file (TOML) overriding `--theme`.
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Log level when RUST_LOG is not set.
    #[arg(long)]
    log_level: Option<String>,

    /// Do not capture the mouse.
    #[arg(long)]
    no_mouse: bool,

    /// Write the effective settings to the settings file and exit.
    #[arg(long)]
    write_config: bool,
}

fn sample_items() -> Vec<String> {
    let mut items: Vec<String> = (1..=40).map(|i| format!("List item {}", i)).collect();
    items.insert(
        5,
        "This line is deliberately long so the horizontal scrollbar has something to do".to_string(),
    );
    items
}

fn read_items(files: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    let mut items = Vec::new();
    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        items.extend(text.lines().map(str::to_string));
    }
    Ok(items)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings: Settings = match &cli.config {
        Some(p) => config::load_settings_from(p),
        None => config::load_settings(),
    }
    .context("loading settings")?;
    if let Some(t) = cli.theme {
        settings.theme = t;
    }
    if cli.theme_file.is_some() {
        settings.theme_file = cli.theme_file;
    }
    if let Some(l) = cli.log_level {
        settings.log_level = l;
    }
    if cli.no_mouse {
        settings.mouse_enabled = false;
    }

    if cli.write_config {
        match &cli.config {
            Some(p) => config::save_settings_to(&settings, p),
            None => config::save_settings(&settings),
        }
        .context("writing settings")?;
        return Ok(());
    }

    config::ensure_dirs_exist().context("creating config directories")?;
    let _guard = match config::user_cache_dir() {
        Some(dir) => Some(init_logging(&dir, &settings.log_level)?),
        None => None,
    };

    let theme: Theme = settings.resolve_theme().context("resolving theme")?;
    let keybindings = settings.keybindings().context("parsing key bindings")?;
    let items = if cli.files.is_empty() {
        sample_items()
    } else {
        read_items(&cli.files)?
    };

    run_app(RunOptions {
        items,
        keybindings,
        colors: Colors::from_theme(&theme),
        mouse_enabled: settings.mouse_enabled,
    })
}
