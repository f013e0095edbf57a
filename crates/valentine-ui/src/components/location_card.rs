//! Location card
//!
//! Locked until the target instant, then reveals the place with a maps link.
//! While `pulse` is set the card plays its unlock animation once.

use dioxus::prelude::*;

use super::button::class_list;

#[derive(Clone, PartialEq, Props)]
pub struct LocationCardProps {
    pub unlocked: bool,
    #[props(default = false)]
    pub pulse: bool,
    pub location: String,
    pub maps_url: String,
    /// Shown while locked, e.g. "Unlocks Feb 14 @ 12:00am"
    pub unlock_hint: String,
    /// Shown under the revealed location
    #[props(default)]
    pub reveal_note: Option<String>,
}

#[component]
pub fn LocationCard(props: LocationCardProps) -> Element {
    let class = class_list("location-card", props.pulse.then_some("unlock-pulse"));

    rsx! {
        section { class: "{class}",
            div { class: "location-heading", "Location" }
            if props.unlocked {
                div { class: "location-value", "📍{props.location}" }
                a {
                    class: "maps-link",
                    href: "{props.maps_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Open in Maps"
                }
                if let Some(note) = props.reveal_note.as_ref() {
                    p { class: "location-note", "{note}" }
                }
            } else {
                div { class: "location-locked",
                    span { class: "location-value", "Locked 🔒" }
                    span { class: "location-hint", "{props.unlock_hint}" }
                }
            }
        }
    }
}
