//! Translucent nebula layers and the base backdrop plane.

use glam::Vec3;

use crate::motion::Pose;

/// The bright accent color of the default palette (#dc5692).
pub const HOT_PINK: [f32; 3] = [0.863, 0.337, 0.573];
/// The deep fill color of the default palette (#351b5a).
pub const DEEP_PURPLE: [f32; 3] = [0.208, 0.106, 0.353];

/// One decorative nebula layer. Static after scene setup; each frame it
/// gets a rigid rotation plus a small orbit offset from [`layer_pose`].
#[derive(Clone, Debug, PartialEq)]
pub struct NebulaLayer {
    /// Flat tint of the layer surface in sRGB.
    pub base_color: [f32; 3],
    /// Uniform scale of the layer plane.
    pub scale: f32,
    /// Signed spin rate in radians per second. Negative values
    /// counter-rotate the layer against its siblings.
    pub angular_velocity: f32,
}

impl NebulaLayer {
    /// The default two-layer stack: a large pink layer spinning one way and
    /// a smaller purple layer counter-rotating beneath it.
    pub fn default_layers() -> Vec<NebulaLayer> {
        vec![
            NebulaLayer {
                base_color: HOT_PINK,
                scale: 80.0,
                angular_velocity: 0.02,
            },
            NebulaLayer {
                base_color: DEEP_PURPLE,
                scale: 60.0,
                angular_velocity: -0.015,
            },
        ]
    }
}

/// Rigid transform of a nebula layer at elapsed time `t`: spin about Z plus
/// a slow elliptical wander in the layer plane.
pub fn layer_pose(layer: &NebulaLayer, t: f32) -> Pose {
    let w = layer.angular_velocity;
    Pose {
        position: Vec3::new((t * w * 0.5).sin() * 2.0, (t * w * 0.3).cos() * 2.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, t * w),
    }
}

/// Rotation of the base backdrop plane behind all layers.
pub fn backdrop_pose(t: f32) -> Pose {
    Pose {
        position: Vec3::ZERO,
        rotation: Vec3::new(0.0, 0.0, t * 0.1),
    }
}

/// Slow opacity pulse of the base backdrop plane, in [0.2, 0.4].
pub fn backdrop_opacity(t: f32) -> f32 {
    0.3 + t.sin() * 0.1
}
