use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::manifest::{DARK_MANIFEST, LIGHT_MANIFEST};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorSchemeMode {
    /// Ask the operating system.
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// HTML page to load. Must contain the header theme menu buttons.
    #[arg(long, required_unless_present = "scaffold")]
    pub page: Option<PathBuf>,

    /// Start from the built-in demo page instead of `--page`.
    #[arg(long, conflicts_with = "page")]
    pub scaffold: bool,

    /// Themes offered by the demo page (`auto` is always added).
    #[arg(long, value_delimiter = ',', default_value = "light,dark,auto")]
    pub themes: Vec<String>,

    /// JSON file holding the persisted theme preference.
    #[arg(long, default_value = "theme-store.json")]
    pub store: PathBuf,

    /// Where to write the resulting HTML. Defaults to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// System color-scheme preference used to pick the manifest.
    #[arg(long, value_enum, default_value = "auto")]
    pub color_scheme: ColorSchemeMode,

    /// Manifest linked when the system prefers dark.
    #[arg(long, default_value = DARK_MANIFEST)]
    pub dark_manifest: String,

    /// Manifest linked otherwise.
    #[arg(long, default_value = LIGHT_MANIFEST)]
    pub light_manifest: String,

    /// Theme button to click after the page is ready. Repeatable; replayed in order.
    #[arg(long = "click")]
    pub clicks: Vec<String>,
}
