use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;
use valentine_core::particles::{ambient_delay, burst, hearts};
use valentine_core::{CardEffect, DeferredSlot, FlowState, Viewport};
use valentine_ui::{use_particles, ParticleLayer, ThemeToggle, UiTask};

use crate::context::{launch_options, use_theme, Card, ThemePreference};
use crate::pages::{AcceptedScreen, CountdownScreen, IntroScreen, QuestionScreen};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and starts the card. A card that cannot start
/// (an unusable target date) shows a short notice instead.
#[component]
pub fn App() -> Element {
    let card = use_hook(|| match Card::start(&launch_options()) {
        Ok(card) => Some(card),
        Err(e) => {
            tracing::error!("Failed to start card: {}", e);
            None
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(card) = card {
            CardShell { card }
        } else {
            div { class: "card-page",
                div { class: "card-panel",
                    h2 { class: "card-title", "This card can't open right now." }
                }
            }
        }
    }
}

/// Owns the running session for as long as the window is open.
#[component]
fn CardShell(card: Card) -> Element {
    let launch = use_hook(launch_options);
    let session = card.session.clone();

    let mut snapshot = use_signal(|| session.snapshot());
    let (store, initial_theme) = use_hook(|| ThemePreference::open(&launch));
    let theme = use_signal(|| initial_theme);
    let particles = use_particles();
    let mut ambient = use_signal(DeferredSlot::<UiTask>::new);

    use_context_provider(|| card.clone());
    use_context_provider(|| snapshot);
    use_context_provider(|| ThemePreference::new(theme, store));
    use_context_provider(|| particles);

    // Mirror session snapshots into the signal
    let watched = session.clone();
    use_effect(move || {
        let mut rx = watched.subscribe();
        snapshot.set(rx.borrow_and_update().clone());
        spawn(async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                snapshot.set(next);
            }
        });
    });

    // Play one-shot effects
    let effect_source = session.clone();
    use_effect(move || {
        let mut effects = effect_source.effects();
        spawn(async move {
            loop {
                match effects.recv().await {
                    Ok(CardEffect::Burst) => particles.launch(burst(&mut rand::rng(), Viewport::default())),
                    Ok(CardEffect::Haptic(ms)) => tracing::debug!(ms, "no vibration motor, haptic skipped"),
                    Ok(CardEffect::Unlocked) => tracing::info!("Location revealed"),
                    Err(RecvError::Lagged(missed)) => tracing::warn!(missed, "card effects lagged"),
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    // Ambient hearts while counting down or accepted
    let particles_allowed = launch.capabilities.allows_particles();
    use_effect(move || {
        let wanted = particles_allowed && snapshot.read().state.has_ambient_hearts();
        if !wanted {
            ambient.write().cancel();
            return;
        }
        if ambient.peek().is_occupied() {
            return;
        }
        let task = spawn(async move {
            loop {
                particles.launch(hearts(&mut rand::rng(), Viewport::default()));
                let pause = ambient_delay(&mut rand::rng());
                tokio::time::sleep(pause).await;
            }
        });
        ambient.write().schedule(task.into());
    });

    use_drop(move || session.shutdown());

    let state = snapshot.read().state;

    rsx! {
        div { class: "card-page", "data-theme": theme().as_str(),
            ThemeCorner {}
            div { class: "card-panel",
                {match state {
                    FlowState::Intro => rsx! { IntroScreen {} },
                    FlowState::Question => rsx! { QuestionScreen {} },
                    FlowState::Countdown => rsx! { CountdownScreen {} },
                    FlowState::Accepted => rsx! { AcceptedScreen {} },
                }}
            }
            ParticleLayer { particles }
        }
    }
}

#[component]
fn ThemeCorner() -> Element {
    let mut preference = use_theme();
    let theme = (preference.theme)();

    rsx! {
        ThemeToggle { theme, ontoggle: move |_| preference.toggle() }
    }
}
