use std::fmt;

pub const STORAGE_KEY: &str = "theme";
pub const ROOT_MARKER_PREFIX: &str = "theme-";
pub const CONTROL_CLASS: &str = "header__theme-menu-button";
pub const CONTROL_SELECTOR: &str = ".header__theme-menu-button";
pub const CONTROL_TYPE_INFIX: &str = "_type_";
pub const CONTROL_TYPE_PREFIX: &str = "header__theme-menu-button_type_";
pub const CONTROL_ACTIVE_CLASS: &str = "header__theme-menu-button_active";
pub const AUTO_THEME: &str = "auto";

/// A named visual variant of the site.
///
/// There is no closed set of themes: any identifier a selector control is
/// tagged with is valid, plus the `auto` fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme(String);

impl Theme {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn auto() -> Self {
        Self(AUTO_THEME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root element class for an applied theme, e.g. `theme-dark`.
pub fn root_marker(theme: &str) -> String {
    format!("{ROOT_MARKER_PREFIX}{theme}")
}

/// Class carried by the selector control that represents `theme`.
pub fn control_marker(theme: &str) -> String {
    format!("{CONTROL_TYPE_PREFIX}{theme}")
}

/// Recovers the applied theme from the root element's classes.
pub fn discover_theme<I, S>(classes: I) -> Option<Theme>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classes.into_iter().find_map(|class| {
        class
            .as_ref()
            .strip_prefix(ROOT_MARKER_PREFIX)
            .map(Theme::new)
    })
}

/// Theme a selector control represents: the text between the first and
/// second `_type_` in the first class that contains it.
pub fn control_theme<I, S>(classes: I) -> Option<Theme>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classes
        .into_iter()
        .find_map(|class| class.as_ref().split(CONTROL_TYPE_INFIX).nth(1).map(Theme::new))
}
