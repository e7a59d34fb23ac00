//! 2D value noise over hashed lattice corners.

use glam::Vec2;

/// GLSL-style fractional part: always in `[0, 1)`, unlike `f32::fract`
/// which keeps the sign of its input.
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Hash a lattice corner to a pseudo-random value in `[0, 1)`.
///
/// The classic shader hash: `fract(sin(dot(p, (12.9898, 78.233))) * 43758.5453)`.
/// Deterministic, so the same corner always hashes to the same value.
#[inline]
fn hash(p: Vec2) -> f32 {
    fract(p.dot(Vec2::new(12.9898, 78.233)).sin() * 43758.5453)
}

/// Sample smooth 2D value noise at `p`. Returns a value in `[0, 1]`.
///
/// The four integer lattice corners surrounding `p` are hashed and
/// bilinearly interpolated with the smoothstep interpolant
/// `u = f*f*(3 - 2f)`, which kills the derivative discontinuity at cell
/// edges that would otherwise show up as grid artifacts in the nebula.
pub fn value_noise(p: Vec2) -> f32 {
    let cell = p.floor();
    let f = p - cell;

    let a = hash(cell);
    let b = hash(cell + Vec2::X);
    let c = hash(cell + Vec2::Y);
    let d = hash(cell + Vec2::ONE);

    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

    let bottom = a + (b - a) * u.x;
    let top = c + (d - c) * u.x;
    bottom + (top - bottom) * u.y
}
