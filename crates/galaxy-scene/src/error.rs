//! Scene setup errors.

/// Errors raised when scene options would produce degenerate motion.
/// Rejected at construction time; per-frame math has no fallible paths.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The configured particle count is zero.
    #[error("particle count must be greater than zero")]
    InvalidParticleCount,

    /// The spawn volume has no extent.
    #[error("spawn radius must be positive, got {0}")]
    InvalidSpawnRadius(f32),

    /// The angular speed range is empty or includes non-positive speeds.
    #[error("angular speed range must satisfy 0 < min < max, got {min}..{max}")]
    InvalidSpeedRange { min: f32, max: f32 },

    /// The camera damping factor is outside (0, 1].
    #[error("camera damping must be in (0, 1], got {0}")]
    InvalidDamping(f32),

    /// The camera auto-rotation rate is not positive.
    #[error("camera auto-rotate speed must be positive, got {0}")]
    InvalidAutoRotateSpeed(f32),
}
