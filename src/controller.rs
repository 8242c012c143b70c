use anyhow::Context as _;

use crate::document::{ThemeControl, ThemeTarget};
use crate::store::PreferenceStore;
use crate::theme::{
    AUTO_THEME, STORAGE_KEY, Theme, control_marker, control_theme, discover_theme, root_marker,
};

/// Replaces every root marker with `theme-<theme>` and persists the choice.
pub fn apply_theme<S, T>(store: &mut S, target: &mut T, theme: &str) -> anyhow::Result<()>
where
    S: PreferenceStore + ?Sized,
    T: ThemeTarget + ?Sized,
{
    target.replace_root_classes(&root_marker(theme));
    store
        .set(STORAGE_KEY, theme)
        .with_context(|| format!("persist theme {theme}"))?;
    tracing::info!(theme, "theme applied");
    Ok(())
}

/// Re-applies the persisted theme, if any. An empty stored value counts as
/// no preference, and the page keeps whatever markup it shipped with.
pub fn restore_theme<S, T>(store: &mut S, target: &mut T) -> anyhow::Result<Option<Theme>>
where
    S: PreferenceStore + ?Sized,
    T: ThemeTarget + ?Sized,
{
    let saved = store.get(STORAGE_KEY).filter(|v| !v.is_empty());
    let Some(saved) = saved else {
        tracing::debug!("no persisted theme");
        return Ok(None);
    };
    apply_theme(store, target, &saved)?;
    Ok(Some(Theme::new(saved)))
}

/// Keeps the theme-selector buttons in step with the applied theme.
///
/// Exactly one control is active and disabled after `ready`, `highlight` or
/// `click`: the one matching the theme, or the `auto` control otherwise.
pub struct ThemeController<C, S, T> {
    controls: Vec<C>,
    auto_index: usize,
    store: S,
    target: T,
}

impl<C, S, T> ThemeController<C, S, T>
where
    C: ThemeControl,
    S: PreferenceStore,
    T: ThemeTarget,
{
    /// Fails when `controls` has no `auto` control, since every unmatched
    /// theme falls back to it.
    pub fn new(controls: Vec<C>, store: S, target: T) -> anyhow::Result<Self> {
        let auto_marker = control_marker(AUTO_THEME);
        let Some(auto_index) = controls.iter().position(|c| c.has_class(&auto_marker)) else {
            anyhow::bail!(
                "theme menu has {} control(s) but none marked `{}`; an auto control is required",
                controls.len(),
                auto_marker
            );
        };
        Ok(Self {
            controls,
            auto_index,
            store,
            target,
        })
    }

    /// Discovers the applied theme from the root element and syncs the
    /// controls to it.
    pub fn ready(&mut self) -> Option<Theme> {
        let current = discover_theme(self.target.root_classes());
        tracing::debug!(theme = ?current, controls = self.controls.len(), "theme controls ready");
        self.highlight(current.as_ref().map(Theme::as_str));
        current
    }

    pub fn apply(&mut self, theme: &str) -> anyhow::Result<()> {
        apply_theme(&mut self.store, &mut self.target, theme)
    }

    pub fn highlight(&self, theme: Option<&str>) {
        for control in &self.controls {
            control.set_active(false);
            control.set_disabled(false);
        }

        let matched = theme.and_then(|theme| {
            let marker = control_marker(theme);
            self.controls.iter().find(|c| c.has_class(&marker))
        });
        let chosen = match matched {
            Some(control) => control,
            None => {
                tracing::debug!(theme, "no control for theme; falling back to auto");
                &self.controls[self.auto_index]
            }
        };
        chosen.set_active(true);
        chosen.set_disabled(true);
    }

    /// Handles a click on the control at `index` (document order).
    pub fn click(&mut self, index: usize) -> anyhow::Result<Theme> {
        let control = self
            .controls
            .get(index)
            .with_context(|| format!("no theme control at index {index}"))?;
        let theme = control_theme(control.classes())
            .with_context(|| format!("theme control {index} has no `_type_` marker"))?;
        self.apply(theme.as_str())?;
        self.highlight(Some(theme.as_str()));
        Ok(theme)
    }

    /// Clicks the first control representing `theme`.
    pub fn click_theme(&mut self, theme: &str) -> anyhow::Result<Theme> {
        let marker = control_marker(theme);
        let index = self
            .controls
            .iter()
            .position(|c| c.has_class(&marker))
            .with_context(|| format!("no theme control for `{theme}`"))?;
        self.click(index)
    }

    /// Theme of the currently highlighted control.
    pub fn active_theme(&self) -> Option<Theme> {
        self.controls
            .iter()
            .find(|c| c.is_active())
            .and_then(|c| control_theme(c.classes()))
    }

    pub fn controls(&self) -> &[C] {
        &self.controls
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
