//! Button Components
//!
//! Button styles used across the card:
//! - Primary: the rose "Continue" and "Yes" buttons
//! - Decline: the shrinking, dodging "No" button
//! - Outline: "Restart"
//! - Ghost: the theme toggle

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled rose button
    #[default]
    Primary,
    /// Muted button that shrinks and wiggles as it is pressed
    Decline,
    /// Bordered secondary action
    Outline,
    /// Borderless pill
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Decline => "btn-decline",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extra classes.
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Inline style, used for scale and nudge transforms
    #[props(default)]
    pub style: Option<String>,
    /// Accessible label when the visible text is not enough
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         onclick: move |_| session.dispatch(FlowEvent::Accept),
///         style: format!("transform: scale({})", snapshot.accept_scale),
///         "Yes 💖"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());
    let style = props.style.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            style: "{style}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Decline.class(), "btn-decline");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_joins_extras() {
        assert_eq!(class_list("btn-decline", None), "btn-decline");
        assert_eq!(class_list("btn-decline", Some("  ")), "btn-decline");
        assert_eq!(class_list("btn-decline", Some("wiggle")), "btn-decline wiggle");
    }
}
