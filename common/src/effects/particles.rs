use crate::render::Rgba;
use crate::rng::SessionRng;

pub const PARTICLE_FRAME_MS: u64 = 16;
const CELEBRATION_COUNT: usize = 80;
/// Pixels per second squared, pulling towards the bottom of the canvas.
const GRAVITY: f32 = 420.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Rgba,
    pub life_ms: f32,
    pub max_life_ms: f32,
}

impl Particle {
    /// Remaining life as 0..=1; drawn as opacity.
    pub fn alpha(&self) -> f32 {
        (self.life_ms / self.max_life_ms).clamp(0.0, 1.0)
    }

    pub fn faded_color(&self) -> Rgba {
        self.color
            .with_alpha((self.color.a as f32 * self.alpha()).round() as u8)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Bursts confetti upwards from `origin` (pixels).
    pub fn celebrate(&mut self, origin: (f32, f32), colors: &[Rgba], rng: &mut SessionRng) {
        for _ in 0..CELEBRATION_COUNT {
            let angle: f32 = rng.random_range(-2.6..-0.5);
            let speed: f32 = rng.random_range(120.0..340.0);
            let life: f32 = rng.random_range(700.0..1400.0);
            let color = rng.pick(colors).copied().unwrap_or(Rgba::rgb(255, 255, 255));
            self.particles.push(Particle {
                x: origin.0,
                y: origin.1,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: rng.random_range(2.0..5.0),
                color,
                life_ms: life,
                max_life_ms: life,
            });
        }
    }

    /// Integrates one frame and culls expired particles.
    pub fn step(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        for particle in &mut self.particles {
            particle.vy += GRAVITY * dt;
            particle.x += particle.vx * dt;
            particle.y += particle.vy * dt;
            particle.life_ms -= dt_ms;
        }
        self.particles.retain(|p| p.life_ms > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
