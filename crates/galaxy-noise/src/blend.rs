//! Per-point nebula color evaluation from layered noise samples.

use glam::Vec2;

use crate::value::value_noise;

/// Fixed alpha for every nebula surface point. Kept below 1.0 so the
/// particle field and stellar dust stay visible through the clouds.
pub const NEBULA_ALPHA: f32 = 0.8;

/// Evaluate the nebula color field at surface point `uv` and time `time`.
///
/// Two noise octaves are sampled at different spatial frequencies and
/// temporal drift rates, averaged, and used to blend `color1` toward
/// `color2`. Returns RGBA with the constant [`NEBULA_ALPHA`].
///
/// The function is pure: the host may call it per-fragment on the GPU or
/// per-sample on the CPU and get identical fields.
pub fn color_at(uv: Vec2, time: f32, color1: [f32; 3], color2: [f32; 3]) -> [f32; 4] {
    let n1 = value_noise(uv * 3.0 + Vec2::splat(time * 0.1));
    let n2 = value_noise(uv * 6.0 + Vec2::new(time * 0.2, time * 0.05));
    let blend = 0.5 * n1 + 0.5 * n2;

    [
        color1[0] + (color2[0] - color1[0]) * blend,
        color1[1] + (color2[1] - color1[1]) * blend,
        color1[2] + (color2[2] - color1[2]) * blend,
        NEBULA_ALPHA,
    ]
}
