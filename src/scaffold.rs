use maud::{DOCTYPE, Markup, html};

use crate::theme::{AUTO_THEME, CONTROL_CLASS, control_marker};

/// Renders a minimal page whose header carries one theme-selector button
/// per theme. An `auto` button is always present.
pub fn build_demo_page(title: &str, themes: &[String]) -> String {
    let mut unique: Vec<&str> = Vec::with_capacity(themes.len() + 1);
    for theme in themes.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !unique.contains(&theme) {
            unique.push(theme);
        }
    }
    let mut themes = unique;
    if !themes.contains(&AUTO_THEME) {
        themes.push(AUTO_THEME);
    }

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                header class="header" {
                    h1 class="header__title" { (title) }
                    nav class="header__theme-menu" {
                        @for theme in &themes {
                            button type="button" class=(format!("{CONTROL_CLASS} {}", control_marker(theme))) {
                                (theme)
                            }
                        }
                    }
                }
                main {}
            }
        }
    };
    markup.into_string()
}
