//! Flip clock
//!
//! Four labelled units (days, hours, minutes, seconds). When a unit's value
//! changes the old digits slide out and the new ones slide in over
//! [`DIGIT_SLIDE`].

use dioxus::prelude::*;
use valentine_core::clock::DIGIT_SLIDE;
use valentine_core::{ClockFace, DeferredSlot, DigitSlide, TimeRemaining};

use crate::task::UiTask;

/// Countdown rendered as four sliding units.
#[component]
pub fn FlipClock(remaining: TimeRemaining) -> Element {
    let face = ClockFace::from(remaining);

    rsx! {
        div { class: "flip-clock", role: "timer",
            for unit in face.units {
                SlideUnit { key: "{unit.label}", label: unit.label, value: unit.value }
            }
        }
    }
}

/// One unit of the clock with its own slide transition.
#[component]
pub fn SlideUnit(label: &'static str, value: String) -> Element {
    let mut slide = use_signal(|| DigitSlide::new(value.clone()));
    let mut settle = use_signal(DeferredSlot::<UiTask>::new);

    use_effect(use_reactive((&value,), move |(value,)| {
        if slide.write().update(&value) {
            let task = spawn(async move {
                tokio::time::sleep(DIGIT_SLIDE).await;
                slide.write().settle();
            });
            settle.write().schedule(task.into());
        }
    }));

    let (current, outgoing) = {
        let slide = slide.read();
        (slide.current().to_string(), slide.outgoing().map(str::to_string))
    };
    let incoming_class = if outgoing.is_some() {
        "flip-digit slide-in"
    } else {
        "flip-digit"
    };

    rsx! {
        div { class: "flip-unit",
            div { class: "flip-window",
                if let Some(old) = outgoing {
                    span { key: "out-{old}", class: "flip-digit slide-out", "{old}" }
                }
                span { key: "in-{current}", class: "{incoming_class}", "{current}" }
            }
            div { class: "flip-label", "{label}" }
        }
    }
}
