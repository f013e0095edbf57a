//! Cosmetic particles: confetti bursts and floating hearts.
//!
//! Particles are plain data. The UI turns each one into an absolutely
//! positioned element with a CSS animation and removes it once
//! [`Particle::lifetime`] has passed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Extra time a particle element stays mounted after its animation ends
const UNMOUNT_GRACE_MS: u64 = 200;

const BURST_PALETTES: [[&str; 5]; 5] = [
    ["#e0f2fe", "#bae6fd", "#7dd3fc", "#60a5fa", "#38bdf8"], // icy blue
    ["#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6"], // lavender
    ["#ecfeff", "#cffafe", "#99f6e4", "#5eead4", "#2dd4bf"], // mint
    ["#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15"], // champagne
    ["#fff7ed", "#fed7aa", "#fdba74", "#fb923c", "#f97316"], // sunset
];

const HEART_PALETTES: [[&str; 3]; 5] = [
    ["#fb7185", "#fda4af", "#fecdd3"], // rose
    ["#f472b6", "#f9a8d4", "#fbcfe8"], // pink
    ["#fca5a5", "#fecaca", "#fee2e2"], // blush
    ["#60a5fa", "#93c5fd", "#bfdbfe"], // blue
    ["#a78bfa", "#c4b5fd", "#ddd6fe"], // purple
];

/// What the host can do. Missing capabilities silently skip effects.
///
/// The default describes a desktop window: no vibration motor, motion on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub haptics: bool,
    pub reduced_motion: bool,
}

impl Capabilities {
    pub fn allows_haptics(&self) -> bool {
        self.haptics && !self.reduced_motion
    }

    pub fn allows_particles(&self) -> bool {
        !self.reduced_motion
    }
}

/// Window size in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 860.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Confetti,
    Heart,
}

/// One animated particle, launched from just below the bottom edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub kind: ParticleKind,
    /// Horizontal start position in px
    pub x: f32,
    /// Confetti width in px, or heart font size
    pub width: f32,
    /// Confetti height in px (hearts use `width`)
    pub height: f32,
    pub color: &'static str,
    pub opacity: f32,
    pub drift: f32,
    pub rise: f32,
    pub rotate: f32,
    pub end_scale: f32,
    pub duration_ms: u64,
    pub delay_ms: u64,
}

impl Particle {
    /// How long the particle element must stay mounted
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.delay_ms + self.duration_ms + UNMOUNT_GRACE_MS)
    }
}

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

fn between(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

fn percent(rng: &mut impl Rng, lo: u32, hi: u32) -> f32 {
    rng.random_range(lo..=hi) as f32 / 100.0
}

struct Shot {
    count: u32,
    spread: f32,
    min_rise: f32,
    max_rise: f32,
    min_duration: u64,
    max_duration: u64,
    delay_ms: u64,
}

/// A celebratory confetti explosion of 2-4 staggered shots.
pub fn burst(rng: &mut impl Rng, viewport: Viewport) -> Vec<Particle> {
    let palette = BURST_PALETTES.choose(rng).unwrap_or(&BURST_PALETTES[0]);
    let shots = rng.random_range(2..=4);
    let mut particles = Vec::new();

    for i in 0..shots {
        let shot = Shot {
            count: rng.random_range(80..=170),
            spread: (viewport.width * percent(rng, 35, 60)).max(320.0),
            min_rise: (viewport.height * percent(rng, 55, 75)).max(520.0),
            max_rise: (viewport.height * percent(rng, 90, 120)).max(850.0),
            min_duration: rng.random_range(1400..=1800),
            max_duration: rng.random_range(2200..=3000),
            delay_ms: if i == 0 { 0 } else { rng.random_range(250..=900) },
        };

        for _ in 0..shot.count {
            particles.push(Particle {
                id: next_id(),
                kind: ParticleKind::Confetti,
                x: between(rng, 0.0, viewport.width),
                width: between(rng, 6.0, 14.0),
                height: between(rng, 8.0, 22.0),
                color: palette.choose(rng).copied().unwrap_or(palette[0]),
                opacity: between(rng, 0.85, 1.0),
                drift: between(rng, -shot.spread, shot.spread),
                rise: between(rng, shot.min_rise, shot.max_rise),
                rotate: between(rng, -900.0, 900.0),
                end_scale: 1.0,
                duration_ms: rng.random_range(shot.min_duration..=shot.max_duration),
                delay_ms: shot.delay_ms,
            });
        }
    }

    particles
}

/// A handful of hearts drifting up from the bottom edge.
pub fn hearts(rng: &mut impl Rng, viewport: Viewport) -> Vec<Particle> {
    let palette = HEART_PALETTES.choose(rng).unwrap_or(&HEART_PALETTES[0]);
    let count = rng.random_range(3..=6);

    (0..count)
        .map(|_| Particle {
            id: next_id(),
            kind: ParticleKind::Heart,
            x: between(rng, 0.0, viewport.width),
            width: between(rng, 14.0, 28.0),
            height: 0.0,
            color: palette.choose(rng).copied().unwrap_or(palette[0]),
            opacity: between(rng, 0.3, 0.75),
            drift: between(rng, -90.0, 90.0),
            rise: between(rng, 260.0, 640.0),
            rotate: between(rng, -25.0, 25.0),
            end_scale: between(rng, 0.9, 1.25),
            duration_ms: rng.random_range(3200..=5000),
            delay_ms: 0,
        })
        .collect()
}

/// Pause before the next ambient heart wave.
pub fn ambient_delay(rng: &mut impl Rng) -> Duration {
    Duration::from_millis(rng.random_range(2600..=4200))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_sizes_are_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let particles = burst(&mut rng, Viewport::default());
            assert!(particles.len() >= 160 && particles.len() <= 680);
            assert!(particles.iter().all(|p| p.kind == ParticleKind::Confetti));
            assert!(particles.iter().any(|p| p.delay_ms == 0));
            assert!(particles.iter().all(|p| p.delay_ms <= 900));
        }
    }

    #[test]
    fn burst_respects_minimum_travel() {
        let mut rng = StdRng::seed_from_u64(11);
        let particles = burst(&mut rng, Viewport { width: 100.0, height: 100.0 });
        assert!(particles.iter().all(|p| p.rise >= 520.0));
        assert!(particles.iter().all(|p| p.drift.abs() <= 320.0));
    }

    #[test]
    fn hearts_wave() {
        let mut rng = StdRng::seed_from_u64(3);
        let wave = hearts(&mut rng, Viewport::default());
        assert!((3..=6).contains(&wave.len()));
        assert!(wave.iter().all(|p| p.kind == ParticleKind::Heart));
        assert!(wave.iter().all(|p| (14.0..=28.0).contains(&p.width)));
    }

    #[test]
    fn particle_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut ids: Vec<u64> = hearts(&mut rng, Viewport::default())
            .into_iter()
            .chain(hearts(&mut rng, Viewport::default()))
            .map(|p| p.id)
            .collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn ambient_delay_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let d = ambient_delay(&mut rng);
            assert!(d >= Duration::from_millis(2600) && d <= Duration::from_millis(4200));
        }
    }

    #[test]
    fn reduced_motion_disables_everything() {
        let caps = Capabilities {
            haptics: true,
            reduced_motion: true,
        };
        assert!(!caps.allows_haptics());
        assert!(!caps.allows_particles());
        assert!(Capabilities::default().allows_particles());
        assert!(!Capabilities::default().allows_haptics());
    }
}
