//! Stochastic placement of the floating glyph particle field.

use glam::Vec3;
use rand::Rng;

/// Default number of particles in the field.
pub const DEFAULT_PARTICLE_COUNT: u32 = 80;
/// Default half-extent of the cubic spawn volume.
pub const DEFAULT_SPAWN_RADIUS: f32 = 30.0;
/// Default per-particle angular speed range, radians per second.
pub const DEFAULT_SPEED_RANGE: (f32, f32) = (0.01, 0.03);

/// The six music glyphs a particle can carry. Decorative labels only; the
/// host decides how (or whether) to render the symbol itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// ♫
    BeamedQuavers,
    /// ♪
    Quaver,
    /// ♩
    Crotchet,
    /// ♬
    BeamedSemiquavers,
    /// 𝄞
    TrebleClef,
    /// 𝄢
    BassClef,
}

impl Glyph {
    /// All glyph variants, in spawn-weight order (uniform).
    pub const ALL: [Glyph; 6] = [
        Glyph::BeamedQuavers,
        Glyph::Quaver,
        Glyph::Crotchet,
        Glyph::BeamedSemiquavers,
        Glyph::TrebleClef,
        Glyph::BassClef,
    ];

    /// Collapse the six glyphs onto the two-group color palette. The
    /// mapping is fixed, so a particle's palette is fully determined by
    /// its glyph.
    pub fn palette(self) -> Palette {
        match self {
            Glyph::BeamedQuavers | Glyph::TrebleClef => Palette::Accent,
            _ => Palette::Base,
        }
    }
}

/// Which of the two visual palettes a particle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// The bright highlight color.
    Accent,
    /// The softer fill color.
    Base,
}

/// A single floating particle. Immutable after generation: every frame's
/// pose is a pure function of these seed attributes and elapsed time, so
/// there is no per-particle mutable state anywhere in the engine.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Center of the particle's float orbit.
    pub base_position: Vec3,
    /// Symbolic label, also selects the palette.
    pub glyph: Glyph,
    /// Intrinsic animation rate, always positive.
    pub angular_speed: f32,
    /// Rotation at t = 0, components in [0, 2π).
    pub initial_rotation: Vec3,
}

/// One-shot generator for the particle field.
///
/// Runs once per scene lifetime; the scene caches the result so every frame
/// derives motion from the same base positions. Placement is intentionally
/// entropy-seeded in production (each session gets a fresh sky); tests pass
/// a seeded RNG through [`ParticleFieldGenerator::generate_with`].
#[derive(Clone, Copy, Debug)]
pub struct ParticleFieldGenerator {
    count: u32,
    spawn_radius: f32,
    speed_range: (f32, f32),
}

impl ParticleFieldGenerator {
    /// Create a generator for `count` particles inside a cube of
    /// half-extent `spawn_radius`, with angular speeds drawn from
    /// `speed_range`.
    pub fn new(count: u32, spawn_radius: f32, speed_range: (f32, f32)) -> Self {
        Self {
            count,
            spawn_radius,
            speed_range,
        }
    }

    /// Generate the field with the thread RNG.
    pub fn generate(&self) -> Vec<Particle> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate the field from a caller-supplied RNG. Always produces
    /// exactly `count` particles; a zero count yields an empty vector.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Particle> {
        let (speed_min, speed_max) = self.speed_range;
        let mut particles = Vec::with_capacity(self.count as usize);

        for _ in 0..self.count {
            let base_position = Vec3::new(
                (rng.random::<f32>() - 0.5) * 2.0 * self.spawn_radius,
                (rng.random::<f32>() - 0.5) * 2.0 * self.spawn_radius,
                (rng.random::<f32>() - 0.5) * 2.0 * self.spawn_radius,
            );
            let glyph = Glyph::ALL[rng.random_range(0..Glyph::ALL.len())];
            let angular_speed = speed_min + rng.random::<f32>() * (speed_max - speed_min);
            let initial_rotation = Vec3::new(
                rng.random::<f32>() * std::f32::consts::TAU,
                rng.random::<f32>() * std::f32::consts::TAU,
                rng.random::<f32>() * std::f32::consts::TAU,
            );

            particles.push(Particle {
                base_position,
                glyph,
                angular_speed,
                initial_rotation,
            });
        }

        particles
    }
}

impl Default for ParticleFieldGenerator {
    fn default() -> Self {
        Self::new(
            DEFAULT_PARTICLE_COUNT,
            DEFAULT_SPAWN_RADIUS,
            DEFAULT_SPEED_RANGE,
        )
    }
}
