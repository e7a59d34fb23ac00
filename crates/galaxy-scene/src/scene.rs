//! Scene composition: setup validation, the cached particle/dust catalogs,
//! and the per-frame pose arena the host consumes read-only.

use glam::Vec2;

use crate::camera::OrbitRig;
use crate::dust::{DustGenerator, DustMote, DustOptions};
use crate::error::SceneError;
use crate::layer::{self, NebulaLayer};
use crate::motion::{self, Pose};
use crate::particle::{self, Particle, ParticleFieldGenerator};

/// Recognized setup options for the backdrop scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    /// Number of glyph particles to place. Must be positive.
    pub particle_count: u32,
    /// Half-extent of the cubic particle spawn volume.
    pub spawn_radius: f32,
    /// Per-particle angular speed range; both ends must be positive and
    /// the range non-empty.
    pub angular_speed_range: (f32, f32),
    /// The two nebula shading colors, blended per surface point by noise.
    pub nebula_colors: [[f32; 3]; 2],
    /// Static nebula layer stack.
    pub layers: Vec<NebulaLayer>,
    /// Stellar dust shell options.
    pub dust: DustOptions,
    /// Camera auto-rotation rate in host-controls units.
    pub camera_auto_rotate_speed: f32,
    /// Camera manual-override damping factor in (0, 1].
    pub camera_damping: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            particle_count: particle::DEFAULT_PARTICLE_COUNT,
            spawn_radius: particle::DEFAULT_SPAWN_RADIUS,
            angular_speed_range: particle::DEFAULT_SPEED_RANGE,
            nebula_colors: [layer::HOT_PINK, layer::DEEP_PURPLE],
            layers: NebulaLayer::default_layers(),
            dust: DustOptions::default(),
            camera_auto_rotate_speed: crate::camera::DEFAULT_AUTO_ROTATE_SPEED,
            camera_damping: crate::camera::DEFAULT_DAMPING,
        }
    }
}

impl SceneOptions {
    /// Reject option sets that would produce degenerate motion.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.particle_count == 0 {
            return Err(SceneError::InvalidParticleCount);
        }
        if self.spawn_radius <= 0.0 {
            return Err(SceneError::InvalidSpawnRadius(self.spawn_radius));
        }
        let (min, max) = self.angular_speed_range;
        if min <= 0.0 || min >= max {
            return Err(SceneError::InvalidSpeedRange { min, max });
        }
        if self.camera_damping <= 0.0 || self.camera_damping > 1.0 {
            return Err(SceneError::InvalidDamping(self.camera_damping));
        }
        if self.camera_auto_rotate_speed <= 0.0 {
            return Err(SceneError::InvalidAutoRotateSpeed(
                self.camera_auto_rotate_speed,
            ));
        }
        Ok(())
    }
}

/// The two configured nebula colors as a shading callback for the host's
/// fragment stage. Pure, so it evaluates identically on CPU and GPU.
#[derive(Clone, Copy, Debug)]
pub struct NebulaShading {
    pub color_primary: [f32; 3],
    pub color_secondary: [f32; 3],
}

impl NebulaShading {
    /// RGBA of the nebula surface at point `uv` and elapsed time `t`.
    pub fn color_at(&self, uv: Vec2, t: f32) -> [f32; 4] {
        galaxy_noise::color_at(uv, t, self.color_primary, self.color_secondary)
    }
}

/// Per-frame output arena. Poses are indexed by entity order: particle `i`
/// of [`Scene::particles`] owns `particles[i]`, layer `i` owns `layers[i]`.
/// Particle poses are local to the `group` frame; the host must nest the
/// transforms, not add them.
#[derive(Clone, Debug, Default)]
pub struct FramePoses {
    /// Shared parent frame of all particles.
    pub group: Pose,
    /// Per-particle local poses.
    pub particles: Vec<Pose>,
    /// Per-layer rigid transforms.
    pub layers: Vec<Pose>,
    /// Base backdrop plane transform.
    pub backdrop: Pose,
    /// Base backdrop plane opacity for this frame.
    pub backdrop_opacity: f32,
}

/// The assembled backdrop scene: immutable catalogs plus the reusable pose
/// arena. Advance it once per rendered frame with the host's elapsed time.
pub struct Scene {
    particles: Vec<Particle>,
    layers: Vec<NebulaLayer>,
    dust: Vec<DustMote>,
    shading: NebulaShading,
    rig: OrbitRig,
    dust_twinkle_speed: f32,
    frame: FramePoses,
}

impl Scene {
    /// Validate `options`, run the one-shot generators, and assemble the
    /// scene. Generation happens exactly once here; recomputing placement
    /// per frame would re-randomize the sky and break the motion contract.
    pub fn new(options: SceneOptions) -> Result<Self, SceneError> {
        options.validate()?;

        let particles = ParticleFieldGenerator::new(
            options.particle_count,
            options.spawn_radius,
            options.angular_speed_range,
        )
        .generate();
        let dust = DustGenerator::new(
            options.dust.count,
            options.dust.radius,
            options.dust.depth,
        )
        .generate();

        log::info!(
            "backdrop scene ready: {} particles, {} nebula layers, {} dust motes",
            particles.len(),
            options.layers.len(),
            dust.len()
        );

        Ok(Self::from_parts(
            particles,
            options.layers,
            dust,
            NebulaShading {
                color_primary: options.nebula_colors[0],
                color_secondary: options.nebula_colors[1],
            },
            OrbitRig::new(options.camera_auto_rotate_speed, options.camera_damping),
            options.dust.twinkle_speed,
        ))
    }

    /// Assemble a scene from pre-generated parts. Unlike [`Scene::new`]
    /// this accepts an empty particle field; `advance` holds for any count
    /// including zero.
    pub fn from_parts(
        particles: Vec<Particle>,
        layers: Vec<NebulaLayer>,
        dust: Vec<DustMote>,
        shading: NebulaShading,
        rig: OrbitRig,
        dust_twinkle_speed: f32,
    ) -> Self {
        let frame = FramePoses {
            particles: Vec::with_capacity(particles.len()),
            layers: Vec::with_capacity(layers.len()),
            ..FramePoses::default()
        };
        Self {
            particles,
            layers,
            dust,
            shading,
            rig,
            dust_twinkle_speed,
            frame,
        }
    }

    /// Recompute every pose for elapsed time `t` and return the arena.
    ///
    /// Synchronous and bounded: pure math over the cached catalogs, no
    /// allocation after the first frame (the vectors keep their capacity).
    pub fn advance(&mut self, t: f32) -> &FramePoses {
        self.frame.group = motion::group_pose(t);

        self.frame.particles.clear();
        self.frame
            .particles
            .extend(self.particles.iter().map(|p| motion::particle_pose(p, t)));

        self.frame.layers.clear();
        self.frame
            .layers
            .extend(self.layers.iter().map(|l| layer::layer_pose(l, t)));

        self.frame.backdrop = layer::backdrop_pose(t);
        self.frame.backdrop_opacity = layer::backdrop_opacity(t);

        &self.frame
    }

    /// The cached particle catalog, in pose-arena order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The static nebula layer stack, in pose-arena order.
    pub fn layers(&self) -> &[NebulaLayer] {
        &self.layers
    }

    /// The static dust catalog.
    pub fn dust(&self) -> &[DustMote] {
        &self.dust
    }

    /// Rendered brightness of dust mote `index` at elapsed time `t`.
    pub fn dust_brightness(&self, index: usize, t: f32) -> f32 {
        crate::dust::twinkle(&self.dust[index], self.dust_twinkle_speed, t)
    }

    /// The shading callback for the host's fragment stage.
    pub fn shading(&self) -> &NebulaShading {
        &self.shading
    }

    /// The camera rig configuration for the host's controls subsystem.
    pub fn orbit_rig(&self) -> OrbitRig {
        self.rig
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_default_options_build_a_scene() {
        let scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        assert_eq!(scene.particles().len(), 80);
        assert_eq!(scene.layers().len(), 2);
        assert_eq!(scene.dust().len(), 3000);
    }

    #[test]
    fn test_zero_particle_count_is_rejected_at_setup() {
        let options = SceneOptions {
            particle_count: 0,
            ..SceneOptions::default()
        };
        assert!(matches!(
            Scene::new(options),
            Err(SceneError::InvalidParticleCount)
        ));
    }

    #[test]
    fn test_degenerate_speed_range_is_rejected() {
        let options = SceneOptions {
            angular_speed_range: (0.03, 0.01),
            ..SceneOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(SceneError::InvalidSpeedRange { .. })
        ));

        let options = SceneOptions {
            angular_speed_range: (0.0, 0.03),
            ..SceneOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(SceneError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn test_out_of_range_damping_is_rejected() {
        for damping in [0.0, -0.5, 1.5] {
            let options = SceneOptions {
                camera_damping: damping,
                ..SceneOptions::default()
            };
            assert!(
                matches!(options.validate(), Err(SceneError::InvalidDamping(_))),
                "damping {damping} should be rejected"
            );
        }
    }

    #[test]
    fn test_advance_fills_one_pose_per_entity() {
        let mut scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        let frame = scene.advance(2.5);
        assert_eq!(frame.particles.len(), 80);
        assert_eq!(frame.layers.len(), 2);
    }

    #[test]
    fn test_advance_tolerates_empty_particle_field() {
        // Hosts that assemble scenes manually may pass an empty field; the
        // composer must not fail or divide by the count.
        let mut scene = Scene::from_parts(
            Vec::new(),
            NebulaLayer::default_layers(),
            Vec::new(),
            NebulaShading {
                color_primary: crate::layer::HOT_PINK,
                color_secondary: crate::layer::DEEP_PURPLE,
            },
            OrbitRig::default(),
            0.5,
        );
        let frame = scene.advance(1.0);
        assert!(frame.particles.is_empty());
        assert_eq!(frame.layers.len(), 2);
        assert!((frame.group.rotation.y - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_group_and_particle_frames_stay_nested() {
        // The group transform must not be folded into particle poses: a
        // particle's local pose is independent of the group's rotation.
        let mut scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        let t = 40.0;
        let (local, group_yaw) = {
            let frame = scene.advance(t);
            (frame.particles[0], frame.group.rotation.y)
        };
        let expected_local = motion::particle_pose(&scene.particles()[0], t);
        assert_eq!(local, expected_local);
        assert!(group_yaw > 0.0, "group frame must carry its own rotation");
    }

    #[test]
    fn test_advance_is_replayable() {
        let mut scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        let first: Vec<Pose> = scene.advance(13.0).particles.to_vec();
        scene.advance(99.0);
        let replay: Vec<Pose> = scene.advance(13.0).particles.to_vec();
        assert_eq!(first, replay, "same t must reproduce the same frame");
    }

    #[test]
    fn test_base_positions_never_mutate_across_frames() {
        let mut scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        let before: Vec<Vec3> = scene.particles().iter().map(|p| p.base_position).collect();
        for i in 0..100 {
            scene.advance(i as f32 * 0.016);
        }
        let after: Vec<Vec3> = scene.particles().iter().map(|p| p.base_position).collect();
        assert_eq!(before, after, "advance must never touch the seed catalog");
    }

    #[test]
    fn test_shading_uses_configured_colors() {
        let scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        let rgba = scene.shading().color_at(Vec2::ZERO, 0.0);
        for ch in 0..3 {
            let lo = crate::layer::HOT_PINK[ch].min(crate::layer::DEEP_PURPLE[ch]);
            let hi = crate::layer::HOT_PINK[ch].max(crate::layer::DEEP_PURPLE[ch]);
            assert!(
                (lo..=hi).contains(&rgba[ch]),
                "channel {ch} escapes the configured palette"
            );
        }
    }

    #[test]
    fn test_orbit_rig_reflects_options() {
        let options = SceneOptions {
            camera_auto_rotate_speed: 0.6,
            camera_damping: 0.1,
            ..SceneOptions::default()
        };
        let scene = Scene::new(options).expect("options are valid");
        let rig = scene.orbit_rig();
        assert_eq!(rig.auto_rotate_speed, 0.6);
        assert_eq!(rig.damping, 0.1);
        assert!(!rig.zoom_enabled && !rig.pan_enabled);
    }

    #[test]
    fn test_dust_brightness_modulates_over_time() {
        let scene = Scene::new(SceneOptions::default()).expect("default options are valid");
        let mote = scene
            .dust()
            .iter()
            .position(|m| m.brightness > 0.05)
            .expect("some mote should be visible");
        let samples: Vec<f32> = (0..100)
            .map(|i| scene.dust_brightness(mote, i as f32 * 0.3))
            .collect();
        let min = samples.iter().cloned().fold(f32::MAX, f32::min);
        let max = samples.iter().cloned().fold(f32::MIN, f32::max);
        assert!(max > min, "twinkle never changed the mote's brightness");
    }
}
