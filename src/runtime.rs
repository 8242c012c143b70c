//! Host entry points. The host calls `initialize` once at startup and
//! `content_loaded` once the page structure is ready; clicks then go
//! through the returned controller.

use crate::controller::{ThemeController, restore_theme};
use crate::document::{DocumentHead, Page, PageControl, ThemeTarget};
use crate::manifest::{ColorSchemeSignal, ManifestPaths, inject_manifest};
use crate::store::PreferenceStore;
use crate::theme::Theme;

/// Restores the persisted theme, then attaches the manifest link.
pub fn initialize<S, D, C>(
    store: &mut S,
    document: &mut D,
    signal: &C,
    manifests: &ManifestPaths,
) -> anyhow::Result<Option<Theme>>
where
    S: PreferenceStore + ?Sized,
    D: ThemeTarget + DocumentHead,
    C: ColorSchemeSignal + ?Sized,
{
    let restored = restore_theme(store, document)?;
    inject_manifest(document, signal, manifests);
    Ok(restored)
}

/// Enumerates the page's theme controls and syncs them to the applied theme.
pub fn content_loaded<S: PreferenceStore>(
    page: &Page,
    store: S,
) -> anyhow::Result<ThemeController<PageControl, S, Page>> {
    let mut controller = ThemeController::new(page.theme_controls(), store, page.clone())?;
    controller.ready();
    Ok(controller)
}
