//! Ambient schedules and particle spawners.
//!
//! Placement and timing jitter come from the injected RNG. Counts and
//! bounds are fixed, so tests assert structure rather than exact draws.

use std::time::Duration;

use heartline_core::clock::ms;
use heartline_core::effects::{Particle, ParticleBurst, ParticleKind};
use heartline_core::rng::DeterministicRng;
use heartline_core::screen::ScreenState;

/// Sparkles spawned when the match screen appears.
pub const SPARKLE_COUNT: usize = 20;
/// Soft orbs behind the proposal.
pub const BOKEH_COUNT: usize = 8;
/// Drifting particles behind the proposal.
pub const ASK_DRIFT_COUNT: usize = 25;
/// How many of the drifting particles are hearts.
pub const ASK_DRIFT_HEARTS: usize = 4;
/// Confetti pieces on acceptance.
pub const CONFETTI_COUNT: usize = 40;

const BOKEH_PALETTE: u8 = 5;
const CONFETTI_PALETTE: u8 = 6;
const FLOATING_HEARTS: [char; 3] = ['❤', '🩷', '💕'];
const DRIFT_HEARTS: [char; 2] = ['❤', '♥'];

/// One-shot floating hearts after acceptance, measured from the plan reveal.
pub const FLOATING_HEART_BURST: [Duration; 4] = [ms(3500), ms(4200), ms(5000), ms(5600)];

/// When the recurring heart trickle starts, measured from the plan reveal.
pub const TRICKLE_START: Duration = ms(5200);

const TRICKLE_BASE_MS: u32 = 1800;
const TRICKLE_JITTER_MS: u32 = 1400;

/// Gaps of the ambient heartbeat, measured from the proposal lift. It beats
/// every 1.5 s three times, then slows to 2.2 s, and stops after six.
#[must_use]
pub fn heartbeat_schedule() -> [Duration; 6] {
    [ms(1500), ms(1500), ms(1500), ms(2200), ms(2200), ms(2200)]
}

/// Wait before the next trickle heart: 1.8 s plus up to 1.4 s.
pub fn trickle_delay(rng: &mut dyn DeterministicRng) -> Duration {
    ms(u64::from(
        TRICKLE_BASE_MS + rng.next_u32_range(0, TRICKLE_JITTER_MS),
    ))
}

#[allow(clippy::cast_possible_truncation)]
fn between(rng: &mut dyn DeterministicRng, min: f32, max: f32) -> f32 {
    min + rng.next_f64() as f32 * (max - min)
}

fn pick<T: Copy>(rng: &mut dyn DeterministicRng, items: &[T]) -> T {
    let last = u32::try_from(items.len().saturating_sub(1)).unwrap_or(0);
    let i = rng.next_u32_range(0, last) as usize;
    items[i.min(items.len() - 1)]
}

fn palette(rng: &mut dyn DeterministicRng, size: u8) -> u8 {
    u8::try_from(rng.next_u32_range(0, u32::from(size.saturating_sub(1)))).unwrap_or(0)
}

/// Particle kinds that live on `screen` and leave with it.
#[must_use]
pub fn particles_owned_by(screen: ScreenState) -> &'static [ParticleKind] {
    match screen {
        ScreenState::Match => &[ParticleKind::Sparkle],
        ScreenState::Ask => &[ParticleKind::Bokeh, ParticleKind::AskDrift],
        ScreenState::Plan => &[ParticleKind::Confetti, ParticleKind::FloatingHeart],
        ScreenState::Splash | ScreenState::Card | ScreenState::Chat => &[],
    }
}

/// Time until the last particle of `burst` has finished animating.
#[must_use]
pub fn burst_lifetime(burst: &ParticleBurst) -> Duration {
    let longest = burst
        .particles
        .iter()
        .map(|p| u64::from(p.delay_ms) + u64::from(p.duration_ms))
        .max()
        .unwrap_or(0);
    ms(longest)
}

/// Match-screen sparkles.
pub fn sparkle_burst(rng: &mut dyn DeterministicRng) -> ParticleBurst {
    let particles = (0..SPARKLE_COUNT)
        .map(|_| Particle {
            x: between(rng, 0.0, 100.0),
            y: between(rng, 0.0, 100.0),
            size: between(rng, 3.0, 7.0),
            delay_ms: rng.next_u32_range(0, 2000),
            duration_ms: rng.next_u32_range(1500, 3000),
            glyph: None,
            palette: 0,
        })
        .collect();
    ParticleBurst {
        kind: ParticleKind::Sparkle,
        particles,
    }
}

/// Large soft orbs behind the proposal.
pub fn bokeh_orbs(rng: &mut dyn DeterministicRng) -> ParticleBurst {
    let particles = (0..BOKEH_COUNT)
        .map(|_| Particle {
            x: between(rng, 10.0, 90.0),
            y: between(rng, 10.0, 90.0),
            size: between(rng, 40.0, 90.0),
            delay_ms: rng.next_u32_range(0, 2000),
            duration_ms: rng.next_u32_range(4000, 8000),
            glyph: None,
            palette: palette(rng, BOKEH_PALETTE),
        })
        .collect();
    ParticleBurst {
        kind: ParticleKind::Bokeh,
        particles,
    }
}

/// Small drifting particles behind the proposal; the first few are hearts.
pub fn ask_drift(rng: &mut dyn DeterministicRng) -> ParticleBurst {
    let particles = (0..ASK_DRIFT_COUNT)
        .map(|i| {
            let (glyph, size) = if i < ASK_DRIFT_HEARTS {
                (Some(pick(rng, &DRIFT_HEARTS)), between(rng, 6.0, 10.0))
            } else {
                (None, between(rng, 3.0, 8.0))
            };
            Particle {
                x: between(rng, 0.0, 100.0),
                y: between(rng, 0.0, 100.0),
                size,
                delay_ms: rng.next_u32_range(0, 2000),
                duration_ms: rng.next_u32_range(1500, 3500),
                glyph,
                palette: palette(rng, 2),
            }
        })
        .collect();
    ParticleBurst {
        kind: ParticleKind::AskDrift,
        particles,
    }
}

/// Heart confetti falling over the plan.
pub fn confetti_burst(rng: &mut dyn DeterministicRng) -> ParticleBurst {
    let particles = (0..CONFETTI_COUNT)
        .map(|_| Particle {
            x: between(rng, 0.0, 100.0),
            y: 0.0,
            size: between(rng, 10.0, 20.0),
            delay_ms: rng.next_u32_range(0, 600),
            duration_ms: rng.next_u32_range(1500, 3000),
            glyph: Some('❤'),
            palette: palette(rng, CONFETTI_PALETTE),
        })
        .collect();
    ParticleBurst {
        kind: ParticleKind::Confetti,
        particles,
    }
}

/// A single heart rising from the bottom of the plan.
pub fn floating_heart(rng: &mut dyn DeterministicRng) -> ParticleBurst {
    let particle = Particle {
        x: between(rng, 10.0, 90.0),
        y: 100.0,
        size: between(rng, 0.7, 1.4),
        delay_ms: 0,
        duration_ms: rng.next_u32_range(5000, 8000),
        glyph: Some(pick(rng, &FLOATING_HEARTS)),
        palette: 0,
    };
    ParticleBurst {
        kind: ParticleKind::FloatingHeart,
        particles: vec![particle],
    }
}
