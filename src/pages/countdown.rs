use dioxus::prelude::*;

use crate::context::use_snapshot;

/// Five-second "Locked in." interlude after accepting.
#[component]
pub fn CountdownScreen() -> Element {
    let snapshot = use_snapshot();
    let seconds_left = snapshot.read().seconds_left;

    rsx! {
        div { class: "screen-emoji", "🎉" }
        h2 { class: "card-title", "Locked in." }
        p { class: "card-subtitle", "Preparing your confirmation…" }
        div { class: "countdown-dial", role: "timer", "{seconds_left}" }
        p { class: "card-hint", "(Do not refresh)" }
    }
}
