//! Procedural noise and nebula color blending for the galaxy backdrop.
//!
//! The noise field is a classic 2D value noise: hashed lattice corners
//! interpolated with a smoothstep-shaped weight. It is stateless and
//! deterministic, so the nebula shading it drives can be evaluated on the
//! CPU for tests and ported verbatim to a fragment stage by the host.

pub mod blend;
pub mod value;

pub use blend::{NEBULA_ALPHA, color_at};
pub use value::value_noise;
