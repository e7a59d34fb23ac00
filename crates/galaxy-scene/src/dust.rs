//! Ambient stellar dust: a fixed catalog of faint motes in a spherical
//! shell around the scene, with a pure twinkle function for brightness.

use glam::Vec3;
use rand::Rng;

/// Setup options for the dust shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustOptions {
    /// Number of motes in the catalog.
    pub count: u32,
    /// Inner radius of the shell.
    pub radius: f32,
    /// Radial depth of the shell beyond `radius`.
    pub depth: f32,
    /// Rate of the brightness twinkle in [`twinkle`].
    pub twinkle_speed: f32,
}

impl Default for DustOptions {
    fn default() -> Self {
        Self {
            count: 3000,
            radius: 100.0,
            depth: 50.0,
            twinkle_speed: 0.5,
        }
    }
}

/// A single dust mote. Immutable after generation; only its rendered
/// brightness varies over time, via [`twinkle`].
#[derive(Clone, Debug)]
pub struct DustMote {
    /// Position in scene space, within the configured shell.
    pub position: Vec3,
    /// Base brightness in [0, 1], power-law distributed so most motes are
    /// barely visible.
    pub brightness: f32,
    /// Phase offset in [0, 2π) so motes twinkle out of step.
    pub twinkle_phase: f32,
}

/// One-shot generator for the dust catalog.
#[derive(Clone, Copy, Debug)]
pub struct DustGenerator {
    count: u32,
    radius: f32,
    depth: f32,
}

impl DustGenerator {
    pub fn new(count: u32, radius: f32, depth: f32) -> Self {
        Self {
            count,
            radius,
            depth,
        }
    }

    /// Generate the catalog with the thread RNG.
    pub fn generate(&self) -> Vec<DustMote> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate the catalog from a caller-supplied RNG.
    ///
    /// Directions are drawn uniformly on the sphere (the `acos(1 - 2u)`
    /// inclination trick avoids pole clustering), distances uniformly
    /// within the shell.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<DustMote> {
        let mut motes = Vec::with_capacity(self.count as usize);

        for _ in 0..self.count {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
            let direction =
                Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());

            let distance = self.radius + rng.random::<f32>() * self.depth;

            // Power-law brightness: many dim motes, few bright ones.
            let brightness = rng.random::<f32>().powf(4.0).clamp(0.0, 1.0);

            let twinkle_phase = rng.random::<f32>() * std::f32::consts::TAU;

            motes.push(DustMote {
                position: direction * distance,
                brightness,
                twinkle_phase,
            });
        }

        motes
    }
}

/// Rendered brightness of a mote at elapsed time `t`: a slow sinusoid
/// between 50% and 100% of the mote's base brightness, offset by the
/// mote's own phase.
pub fn twinkle(mote: &DustMote, speed: f32, t: f32) -> f32 {
    mote.brightness * (0.75 + 0.25 * (t * speed + mote.twinkle_phase).sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generates_exact_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let motes = DustGenerator::new(3000, 100.0, 50.0).generate_with(&mut rng);
        assert_eq!(motes.len(), 3000);
    }

    #[test]
    fn test_motes_stay_within_shell() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let motes = DustGenerator::new(2000, 100.0, 50.0).generate_with(&mut rng);
        for (i, mote) in motes.iter().enumerate() {
            let distance = mote.position.length();
            assert!(
                (100.0 - 1e-3..=150.0 + 1e-3).contains(&distance),
                "mote {i} at distance {distance} escapes the [100, 150] shell"
            );
        }
    }

    #[test]
    fn test_dust_covers_all_octants() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let motes = DustGenerator::new(4000, 100.0, 50.0).generate_with(&mut rng);
        let mut octant_counts = [0u32; 8];
        for mote in &motes {
            let p = mote.position;
            let octant = ((p.x >= 0.0) as usize)
                | (((p.y >= 0.0) as usize) << 1)
                | (((p.z >= 0.0) as usize) << 2);
            octant_counts[octant] += 1;
        }
        for (i, &count) in octant_counts.iter().enumerate() {
            assert!(
                (250..=850).contains(&count),
                "octant {i} has {count} motes, expected roughly 500"
            );
        }
    }

    #[test]
    fn test_brightness_skews_dim() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let motes = DustGenerator::new(3000, 100.0, 50.0).generate_with(&mut rng);
        let dim = motes.iter().filter(|m| m.brightness < 0.1).count();
        let bright = motes.iter().filter(|m| m.brightness > 0.5).count();
        assert!(
            dim > bright * 3,
            "expected far more dim motes ({dim}) than bright ones ({bright})"
        );
    }

    #[test]
    fn test_twinkle_stays_within_base_brightness() {
        let mote = DustMote {
            position: Vec3::new(120.0, 0.0, 0.0),
            brightness: 0.8,
            twinkle_phase: 1.3,
        };
        for i in 0..500 {
            let b = twinkle(&mote, 0.5, i as f32 * 0.41);
            assert!(
                (0.4 - 1e-5..=0.8 + 1e-5).contains(&b),
                "twinkle brightness {b} escapes [0.5, 1.0] x base"
            );
        }
    }

    #[test]
    fn test_twinkle_is_pure() {
        let mote = DustMote {
            position: Vec3::ZERO,
            brightness: 0.5,
            twinkle_phase: 0.0,
        };
        assert_eq!(
            twinkle(&mote, 0.5, 17.0).to_bits(),
            twinkle(&mote, 0.5, 17.0).to_bits()
        );
    }
}
