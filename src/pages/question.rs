//! Question screen - "Will You ... be my Valentine?"
//!
//! "Yes" grows and "No" shrinks with every decline. The decline button also
//! hops sideways and wiggles, then settles back on its own.

use dioxus::prelude::*;
use valentine_core::particles::hearts;
use valentine_core::{FlowEvent, Nudge, Viewport};
use valentine_ui::{Button, ButtonVariant};

use crate::context::{launch_options, use_card, use_card_particles, use_snapshot};

/// Transform for the decline button: its current nudge, then its scale.
fn decline_transform(nudge: Nudge, scale: f32) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0) scale({});",
        nudge.x, nudge.y, scale
    )
}

#[component]
pub fn QuestionScreen() -> Element {
    let card = use_card();
    let snapshot = use_snapshot();
    let particles = use_card_particles();
    let particles_allowed = use_hook(|| launch_options().capabilities.allows_particles());

    let snap = snapshot.read().clone();
    let yes_style = format!("transform: scale({});", snap.accept_scale);
    let no_style = decline_transform(snap.nudge, snap.decline_scale);
    let no_class = snap.jiggling.then(|| "wiggle".to_string());

    let accept = card.session.clone();
    let decline = card.session.clone();

    rsx! {
        h1 { class: "card-title question",
            "Will You"
            br {}
            span {
                class: "recipient",
                onclick: move |_| {
                    if particles_allowed {
                        particles.launch(hearts(&mut rand::rng(), Viewport::default()));
                    }
                },
                "{card.config.recipient}"
            }
            br {}
            "be my Valentine?"
        }

        div { class: "answer-stack",
            Button {
                style: yes_style,
                onclick: move |_| accept.dispatch(FlowEvent::Accept),
                "Yes 💖"
            }
            Button {
                variant: ButtonVariant::Decline,
                class: no_class,
                style: no_style,
                onclick: move |_| decline.dispatch(FlowEvent::Decline),
                "{snap.decline_label}"
            }
            if let Some(verse) = card.config.verse.as_ref() {
                a {
                    class: "verse-link",
                    href: "{verse.url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "{verse.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_transform_at_rest() {
        assert_eq!(
            decline_transform(Nudge::ZERO, 1.0),
            "transform: translate3d(0px, 0px, 0) scale(1);"
        );
    }

    #[test]
    fn decline_transform_after_presses() {
        let style = decline_transform(Nudge { x: -14, y: 2 }, 0.92);
        assert_eq!(style, "transform: translate3d(-14px, 2px, 0) scale(0.92);");
    }
}
