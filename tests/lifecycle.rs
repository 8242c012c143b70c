use std::path::{Path, PathBuf};

use site_theme::{
    CliArgs, ColorSchemeMode, DARK_MANIFEST, FileStore, LIGHT_MANIFEST, Page, PreferenceStore,
    STORAGE_KEY, ThemeControl, ThemeTarget,
};
use tempfile::tempdir;

const SITE_PAGE: &str = r#"<!doctype html>
<html lang="ru">
  <head><title>Site</title></head>
  <body>
    <header class="header">
      <div class="header__theme-menu">
        <button class="header__theme-menu-button header__theme-menu-button_type_light">Light</button>
        <button class="header__theme-menu-button header__theme-menu-button_type_auto">Auto</button>
        <button class="header__theme-menu-button header__theme-menu-button_type_dark">Dark</button>
      </div>
    </header>
  </body>
</html>"#;

fn args(page: Option<PathBuf>, store: &Path, out: &Path, clicks: &[&str]) -> CliArgs {
    CliArgs {
        scaffold: page.is_none(),
        page,
        themes: vec!["light".to_string(), "dark".to_string()],
        store: store.to_path_buf(),
        out: Some(out.to_path_buf()),
        color_scheme: ColorSchemeMode::Light,
        dark_manifest: DARK_MANIFEST.to_string(),
        light_manifest: LIGHT_MANIFEST.to_string(),
        clicks: clicks.iter().map(|c| c.to_string()).collect(),
    }
}

fn active_themes(page: &Page) -> Vec<String> {
    page.theme_controls()
        .iter()
        .filter(|c| c.is_active() && c.is_disabled())
        .filter_map(|c| site_theme::control_theme(c.classes()))
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn click_light_persists_and_rerenders() {
    let tmp = tempdir().unwrap();
    let page_path = tmp.path().join("index.html");
    let store_path = tmp.path().join("store.json");
    let out_path = tmp.path().join("out/index.html");
    std::fs::write(&page_path, SITE_PAGE).unwrap();

    site_theme::run(args(Some(page_path.clone()), &store_path, &out_path, &["light"])).unwrap();

    let page = Page::from_path(&out_path).unwrap();
    assert_eq!(page.root_classes(), vec!["theme-light"]);
    assert_eq!(active_themes(&page), vec!["light"]);
    assert_eq!(page.manifest_links(), vec![LIGHT_MANIFEST]);
    assert_eq!(
        FileStore::open(&store_path).get(STORAGE_KEY).as_deref(),
        Some("light")
    );

    // A second page view restores the choice without any click.
    let out2 = tmp.path().join("out/second.html");
    site_theme::run(args(Some(page_path), &store_path, &out2, &[])).unwrap();
    let page = Page::from_path(&out2).unwrap();
    assert_eq!(page.root_classes(), vec!["theme-light"]);
    assert_eq!(active_themes(&page), vec!["light"]);
}

#[test]
fn first_visit_without_marker_selects_auto() {
    let tmp = tempdir().unwrap();
    let page_path = tmp.path().join("index.html");
    let store_path = tmp.path().join("store.json");
    let out_path = tmp.path().join("index.out.html");
    std::fs::write(&page_path, SITE_PAGE).unwrap();

    site_theme::run(args(Some(page_path), &store_path, &out_path, &[])).unwrap();

    let page = Page::from_path(&out_path).unwrap();
    assert!(page.root_classes().is_empty());
    assert_eq!(active_themes(&page), vec!["auto"]);
    assert!(!store_path.exists());
}

#[test]
fn dark_system_links_dark_manifest() {
    let tmp = tempdir().unwrap();
    let store_path = tmp.path().join("store.json");
    let out_path = tmp.path().join("demo.html");

    let mut a = args(None, &store_path, &out_path, &["dark", "dark"]);
    a.color_scheme = ColorSchemeMode::Dark;
    site_theme::run(a).unwrap();

    let page = Page::from_path(&out_path).unwrap();
    assert_eq!(page.manifest_links(), vec![DARK_MANIFEST]);
    assert_eq!(page.root_classes(), vec!["theme-dark"]);
    assert_eq!(active_themes(&page), vec!["dark"]);
}

#[test]
fn page_without_auto_control_is_rejected() {
    let tmp = tempdir().unwrap();
    let page_path = tmp.path().join("index.html");
    let store_path = tmp.path().join("store.json");
    let out_path = tmp.path().join("index.out.html");
    std::fs::write(
        &page_path,
        SITE_PAGE.replace("header__theme-menu-button_type_auto", "header__theme-menu-button_type_sepia"),
    )
    .unwrap();

    let err = site_theme::run(args(Some(page_path), &store_path, &out_path, &[])).unwrap_err();
    assert!(format!("{err:#}").contains("auto control is required"));
    assert!(!out_path.exists());
}

#[test]
fn clicking_unknown_theme_fails() {
    let tmp = tempdir().unwrap();
    let store_path = tmp.path().join("store.json");
    let out_path = tmp.path().join("demo.html");

    let err = site_theme::run(args(None, &store_path, &out_path, &["sepia"])).unwrap_err();
    assert!(format!("{err:#}").contains("no theme control for `sepia`"));
}

#[test]
fn missing_page_without_scaffold_fails() {
    let tmp = tempdir().unwrap();
    let store_path = tmp.path().join("store.json");
    let out_path = tmp.path().join("demo.html");

    let mut a = args(None, &store_path, &out_path, &[]);
    a.scaffold = false;
    let err = site_theme::run(a).unwrap_err();
    assert!(format!("{err:#}").contains("--page is required"));
    assert!(!out_path.exists());
}
