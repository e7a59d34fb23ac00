//! Closed-form motion: per-particle float/spin and the shared group frame.
//!
//! No integration and no persistent velocity state: every pose is computed
//! directly from elapsed time, so replaying a time value replays the exact
//! frame, and particles can be evaluated in any order (or in parallel).

use glam::Vec3;

use crate::particle::Particle;

/// A position + Euler rotation (radians) describing an entity transform at
/// one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Pose of one particle at elapsed time `t`, in the group's local frame.
///
/// The vertical float is phase-shifted by the particle's own x coordinate
/// so neighbouring particles bob out of step; the horizontal drift runs at
/// half speed and the depth drift at 0.3x, which keeps the path from
/// closing into a visible loop.
pub fn particle_pose(particle: &Particle, t: f32) -> Pose {
    let base = particle.base_position;
    let speed = particle.angular_speed;

    let position = Vec3::new(
        base.x + (t * speed * 0.5).sin() * 1.0,
        base.y + (t * speed + base.x).sin() * 2.0,
        base.z + (t * speed * 0.3).cos() * 1.0,
    );
    let rotation = Vec3::new(
        particle.initial_rotation.x,
        particle.initial_rotation.y,
        particle.initial_rotation.z + t * speed,
    );

    Pose { position, rotation }
}

/// Shared slow rotation of the whole particle group at elapsed time `t`.
///
/// Composed as a parent coordinate frame around each particle's local pose;
/// the two transforms are never flattened into a single formula, so the
/// host must nest them in that order.
pub fn group_pose(t: f32) -> Pose {
    Pose {
        position: Vec3::ZERO,
        rotation: Vec3::new((t * 0.1).sin() * 0.1, t * 0.05, 0.0),
    }
}
