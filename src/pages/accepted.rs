//! Accepted screen
//!
//! Live countdown to the target date and the location card, which unlocks
//! when the target is reached.

use std::rc::Rc;

use dioxus::prelude::*;
use valentine_core::FlowEvent;
use valentine_ui::{Button, ButtonVariant, FlipClock, LocationCard};

use crate::context::{use_card, use_snapshot};

#[component]
pub fn AcceptedScreen() -> Element {
    let card = use_card();
    let snapshot = use_snapshot();

    // The ticker stops when this screen unmounts
    let ticker = use_hook(|| Rc::new(card.session.remaining_ticker()));
    let mut remaining = use_signal(|| ticker.current());
    use_effect(move || {
        let mut rx = ticker.subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let next = *rx.borrow_and_update();
                remaining.set(next);
            }
        });
    });

    let snap = snapshot.read().clone();
    let target = card.session.target();
    let config = card.config.clone();
    let restart = card.session.clone();
    let day_label = target.day_label();

    rsx! {
        div { class: "screen-emoji", "🩷" }
        h2 { class: "card-title", "VALENTINE'S IS COMING" }
        p { class: "card-tagline", "{config.tagline}" }
        p { class: "card-hint", "Countdown to {day_label}:" }

        FlipClock { remaining: remaining() }

        LocationCard {
            unlocked: snap.unlocked,
            pulse: snap.unlock_pulse,
            location: config.location.clone(),
            maps_url: config.maps_url(),
            unlock_hint: target.unlock_hint(),
            reveal_note: Some(config.reveal_note.clone()).filter(|n| !n.is_empty()),
        }

        Button {
            variant: ButtonVariant::Outline,
            onclick: move |_| restart.dispatch(FlowEvent::Restart),
            "Restart"
        }

        if snap.preview {
            p { class: "card-footnote", "Dev preview enabled: ?unlock=1" }
        }
        p { class: "card-footnote", "{config.signature}" }
    }
}
