//! Scene-animation core for the galaxy backdrop: stochastic particle
//! placement, closed-form sinusoid motion, nebula layer transforms, ambient
//! stellar dust, and the auto-orbit camera rig.
//!
//! Everything here is host-agnostic. The scene owns only immutable records
//! and a reusable pose arena; each frame the host supplies elapsed seconds
//! and reads back fresh poses. No component holds a handle into the host's
//! retained scene graph, so the whole core unit-tests without a renderer.

pub mod camera;
pub mod dust;
pub mod error;
pub mod layer;
pub mod motion;
pub mod particle;
pub mod scene;

pub use camera::OrbitRig;
pub use dust::{DustGenerator, DustMote, DustOptions, twinkle};
pub use error::SceneError;
pub use layer::{NebulaLayer, backdrop_opacity, backdrop_pose, layer_pose};
pub use motion::{Pose, group_pose, particle_pose};
pub use particle::{Glyph, Palette, Particle, ParticleFieldGenerator};
pub use scene::{FramePoses, NebulaShading, Scene, SceneOptions};
