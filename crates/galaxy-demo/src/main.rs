//! Headless demo driver for the galaxy backdrop.
//!
//! Loads `config.ron`, initializes logging, assembles the scene, and drives
//! it with a monotonic clock for a bounded number of frames, logging pose
//! and shading samples along the way. Smoke-tests the animation core
//! without a rendering host attached; a real host would call
//! `Scene::advance` from its per-frame callback instead of this loop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use galaxy_config::Config;
use galaxy_scene::{DustOptions, NebulaLayer, Scene, SceneOptions};
use glam::Vec2;
use tracing::{error, info, warn};

/// Frames to simulate before exiting.
const FRAME_COUNT: u32 = 300;
/// Nominal frame pacing (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("galaxy-backdrop"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn scene_options(config: &Config) -> SceneOptions {
    SceneOptions {
        particle_count: config.scene.particle_count,
        spawn_radius: config.scene.spawn_radius,
        angular_speed_range: (config.scene.speed_min, config.scene.speed_max),
        nebula_colors: [config.nebula.color_primary, config.nebula.color_secondary],
        layers: NebulaLayer::default_layers(),
        dust: DustOptions {
            count: config.dust.count,
            radius: config.dust.radius,
            depth: config.dust.depth,
            twinkle_speed: config.dust.twinkle_speed,
        },
        camera_auto_rotate_speed: config.camera.auto_rotate_speed,
        camera_damping: config.camera.damping,
    }
}

fn main() {
    let config_dir = config_dir();
    let config_result = Config::load_or_create(&config_dir);
    let config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };

    galaxy_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    if let Err(err) = config_result {
        warn!("falling back to default config: {err}");
    }

    let mut scene = match Scene::new(scene_options(&config)) {
        Ok(scene) => scene,
        Err(err) => {
            error!("invalid backdrop configuration: {err}");
            std::process::exit(1);
        }
    };

    let rig = scene.orbit_rig();
    info!(
        auto_rotate_speed = rig.auto_rotate_speed,
        damping = rig.damping,
        "camera rig configured; zoom and pan disabled"
    );

    let start = Instant::now();
    let mut slowest_advance = Duration::ZERO;

    for frame in 0..FRAME_COUNT {
        let t = start.elapsed().as_secs_f32();

        let advance_start = Instant::now();
        let poses = scene.advance(t);
        let group_yaw = poses.group.rotation.y;
        let particle = poses.particles.first().copied().unwrap_or_default();
        let backdrop_opacity = poses.backdrop_opacity;
        slowest_advance = slowest_advance.max(advance_start.elapsed());

        if frame % 60 == 0 {
            let nebula = scene.shading().color_at(Vec2::new(0.5, 0.5), t);
            info!(
                frame,
                t,
                group_yaw,
                particle_y = particle.position.y,
                backdrop_opacity,
                nebula = ?nebula,
                "frame sample"
            );
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    if config.debug.show_frame_stats {
        info!(?slowest_advance, "slowest advance over the run");
    }
    info!("demo finished after {FRAME_COUNT} frames");
}
