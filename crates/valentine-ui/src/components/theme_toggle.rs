use dioxus::prelude::*;
use valentine_core::Theme;

use super::button::{Button, ButtonVariant};

/// Pill in the corner that flips between light and dark.
#[component]
pub fn ThemeToggle(theme: Theme, ontoggle: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "theme-toggle".to_string(),
            aria_label: format!("Switch to {}", theme.toggle_label().to_lowercase()),
            onclick: move |_| ontoggle.call(()),
            {theme.toggle_label()}
        }
    }
}
