use dioxus::prelude::*;
use valentine_core::FlowEvent;
use valentine_ui::Button;

use crate::context::use_card;

#[component]
pub fn IntroScreen() -> Element {
    let card = use_card();

    rsx! {
        div { class: "screen-emoji", "✨" }
        h1 { class: "card-title", "You already know what's coming..." }
        Button {
            onclick: move |_| card.session.dispatch(FlowEvent::Continue),
            "Continue"
        }
    }
}
