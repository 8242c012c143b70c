//! Chooses the platform manifest from the system color-scheme preference.

use crate::document::DocumentHead;

pub const DARK_MANIFEST: &str = "/images/site-dark.webmanifest";
pub const LIGHT_MANIFEST: &str = "/images/site-light.webmanifest";

/// Whether the system prefers a dark color scheme. Read once, never watched.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Asks the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemColorScheme;

impl ColorSchemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        matches!(dark_light::detect(), dark_light::Mode::Dark)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeSignal for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    pub dark: String,
    pub light: String,
}

impl Default for ManifestPaths {
    fn default() -> Self {
        Self {
            dark: DARK_MANIFEST.to_string(),
            light: LIGHT_MANIFEST.to_string(),
        }
    }
}

pub fn select_manifest(prefers_dark: bool, paths: &ManifestPaths) -> &str {
    if prefers_dark {
        &paths.dark
    } else {
        &paths.light
    }
}

/// Appends one `<link rel="manifest">` to the head and returns its href.
///
/// There is no deduplication: the host must call this once per page.
pub fn inject_manifest<H, C>(head: &mut H, signal: &C, paths: &ManifestPaths) -> String
where
    H: DocumentHead + ?Sized,
    C: ColorSchemeSignal + ?Sized,
{
    let prefers_dark = signal.prefers_dark();
    let href = select_manifest(prefers_dark, paths).to_string();
    head.append_link("manifest", &href);
    tracing::debug!(prefers_dark, href = %href, "manifest attached");
    href
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;

    #[test]
    fn picks_path_by_preference() {
        let paths = ManifestPaths::default();
        assert_eq!(select_manifest(true, &paths), DARK_MANIFEST);
        assert_eq!(select_manifest(false, &paths), LIGHT_MANIFEST);
    }

    #[test]
    fn dark_system_gets_exactly_one_dark_link() {
        let mut page = Page::parse("<html><head></head><body></body></html>");
        let href = inject_manifest(&mut page, &FixedColorScheme(true), &ManifestPaths::default());
        assert_eq!(href, DARK_MANIFEST);
        assert_eq!(page.manifest_links(), vec![DARK_MANIFEST]);
    }

    #[test]
    fn repeated_injection_is_not_deduplicated() {
        let mut page = Page::parse("<html><head></head><body></body></html>");
        let paths = ManifestPaths::default();
        inject_manifest(&mut page, &FixedColorScheme(false), &paths);
        inject_manifest(&mut page, &FixedColorScheme(false), &paths);
        assert_eq!(page.manifest_links(), vec![LIGHT_MANIFEST, LIGHT_MANIFEST]);
    }
}
