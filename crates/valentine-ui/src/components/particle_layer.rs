//! Confetti and heart particles.
//!
//! [`Particles`] is a copyable handle to the live particle list. Launching a
//! batch mounts it immediately and unmounts it once the longest particle
//! lifetime has passed; the CSS keyframes do the motion.

use dioxus::prelude::*;
use valentine_core::{Particle, ParticleKind};

/// Handle to the particles currently on screen.
#[derive(Clone, Copy, PartialEq)]
pub struct Particles {
    live: Signal<Vec<Particle>>,
}

impl Particles {
    /// Mount a batch and schedule its removal.
    ///
    /// Must be called from a component scope or a task spawned in one.
    pub fn launch(&self, batch: Vec<Particle>) {
        let Some(lifetime) = batch.iter().map(Particle::lifetime).max() else {
            return;
        };
        let ids: Vec<u64> = batch.iter().map(|p| p.id).collect();
        tracing::trace!(count = ids.len(), ?lifetime, "particles launched");

        let mut live = self.live;
        live.write().extend(batch);
        spawn(async move {
            tokio::time::sleep(lifetime).await;
            live.write().retain(|p| !ids.contains(&p.id));
        });
    }
}

/// Create the particle list for this scope and its children.
pub fn use_particles() -> Particles {
    let live = use_signal(Vec::new);
    Particles { live }
}

fn particle_class(kind: ParticleKind) -> &'static str {
    match kind {
        ParticleKind::Confetti => "particle confetti",
        ParticleKind::Heart => "particle heart",
    }
}

/// Inline style placing one particle and parameterising its keyframes.
pub fn particle_style(p: &Particle) -> String {
    let mut style = format!(
        "left: {:.1}px; opacity: {:.2}; --drift: {:.1}px; --rise: {:.1}px; --rot: {:.1}deg; \
         --end-scale: {:.2}; animation-duration: {}ms; animation-delay: {}ms;",
        p.x, p.opacity, p.drift, p.rise, p.rotate, p.end_scale, p.duration_ms, p.delay_ms
    );
    match p.kind {
        ParticleKind::Confetti => style.push_str(&format!(
            " width: {:.1}px; height: {:.1}px; background: {};",
            p.width, p.height, p.color
        )),
        ParticleKind::Heart => style.push_str(&format!(" font-size: {:.1}px; color: {};", p.width, p.color)),
    }
    style
}

/// Full-window, click-through layer drawing the live particles.
#[component]
pub fn ParticleLayer(particles: Particles) -> Element {
    let live = particles.live.read();

    rsx! {
        div { class: "particle-layer", "aria-hidden": "true",
            for p in live.iter() {
                div { key: "{p.id}", class: particle_class(p.kind), style: particle_style(p),
                    if p.kind == ParticleKind::Heart {
                        "❤"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: ParticleKind) -> Particle {
        Particle {
            id: 1,
            kind,
            x: 120.0,
            width: 10.0,
            height: 16.0,
            color: "#fb7185",
            opacity: 0.9,
            drift: -40.0,
            rise: 600.0,
            rotate: 180.0,
            end_scale: 1.0,
            duration_ms: 1800,
            delay_ms: 250,
        }
    }

    #[test]
    fn confetti_style_sets_size_and_fill() {
        let style = particle_style(&sample(ParticleKind::Confetti));
        assert!(style.contains("left: 120.0px"));
        assert!(style.contains("--drift: -40.0px"));
        assert!(style.contains("animation-duration: 1800ms"));
        assert!(style.contains("animation-delay: 250ms"));
        assert!(style.contains("width: 10.0px; height: 16.0px; background: #fb7185"));
    }

    #[test]
    fn heart_style_uses_font_size() {
        let style = particle_style(&sample(ParticleKind::Heart));
        assert!(style.contains("font-size: 10.0px; color: #fb7185"));
        assert!(!style.contains("background"));
    }
}
