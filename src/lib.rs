mod cli;
mod controller;
mod document;
mod manifest;
mod runtime;
mod scaffold;
mod store;
mod theme;

use std::io::Write as _;

use anyhow::Context as _;
use cli::Args;

pub use cli::{Args as CliArgs, ColorSchemeMode};
pub use controller::{ThemeController, apply_theme, restore_theme};
pub use document::{DocumentHead, Page, PageControl, ThemeControl, ThemeTarget};
pub use manifest::{
    ColorSchemeSignal, DARK_MANIFEST, FixedColorScheme, LIGHT_MANIFEST, ManifestPaths,
    SystemColorScheme, inject_manifest, select_manifest,
};
pub use runtime::{content_loaded, initialize};
pub use scaffold::build_demo_page;
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{
    AUTO_THEME, CONTROL_ACTIVE_CLASS, CONTROL_SELECTOR, CONTROL_TYPE_PREFIX, STORAGE_KEY, Theme,
    control_theme, discover_theme,
};

/// Runs one page view: load, initialize, content-ready, replay clicks, then
/// write the resulting document.
pub fn run(args: Args) -> anyhow::Result<()> {
    let mut page = if args.scaffold {
        Page::parse(&build_demo_page("Theme demo", &args.themes))
    } else {
        let path = args
            .page
            .as_deref()
            .context("--page is required unless --scaffold is set")?;
        Page::from_path(path)?
    };

    let mut store = FileStore::open(&args.store);
    let signal: Box<dyn ColorSchemeSignal> = match args.color_scheme {
        ColorSchemeMode::Auto => Box::new(SystemColorScheme),
        ColorSchemeMode::Dark => Box::new(FixedColorScheme(true)),
        ColorSchemeMode::Light => Box::new(FixedColorScheme(false)),
    };
    let manifests = ManifestPaths {
        dark: args.dark_manifest.clone(),
        light: args.light_manifest.clone(),
    };

    let restored = initialize(&mut store, &mut page, signal.as_ref(), &manifests)?;
    tracing::info!(
        store = %store.path().display(),
        restored = restored.as_ref().map(Theme::as_str),
        "page initialized"
    );

    let mut controller = content_loaded(&page, store)?;
    for theme in &args.clicks {
        controller
            .click_theme(theme)
            .with_context(|| format!("click {theme}"))?;
    }
    tracing::info!(
        active = controller.active_theme().as_ref().map(Theme::as_str),
        clicks = args.clicks.len(),
        "theme controls synced"
    );

    let html = page.to_html()?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("create {}", parent.display()))?;
                }
            }
            std::fs::write(out, html).with_context(|| format!("write {}", out.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes()).context("write stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
