//! Auto-orbit camera rig: the setup record handed to the host's
//! interactive-camera subsystem, plus the pure helpers behind it.
//!
//! The core never drives the camera directly. It configures the rig once at
//! setup; the host's controls own the actual camera state and apply
//! [`OrbitRig::auto_orbit_angle`] and [`OrbitRig::damp_toward`] themselves.

use std::f32::consts::TAU;

/// Default orbit rate. Follows the host-controls convention where a speed
/// of 2.0 completes one orbit in 60 seconds.
pub const DEFAULT_AUTO_ROTATE_SPEED: f32 = 0.3;
/// Default damping factor for manual drag decay.
pub const DEFAULT_DAMPING: f32 = 0.05;

/// Setup-time description of the backdrop camera: continuous slow orbit,
/// damped manual override, zoom and pan disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitRig {
    /// Auto-rotation rate in host-controls units (2.0 = one orbit / 60 s).
    pub auto_rotate_speed: f32,
    /// Per-step damping factor in (0, 1] for manual overrides.
    pub damping: f32,
    /// Always false for the backdrop: the viewpoint distance is fixed.
    pub zoom_enabled: bool,
    /// Always false for the backdrop: the orbit target stays at the origin.
    pub pan_enabled: bool,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            auto_rotate_speed: DEFAULT_AUTO_ROTATE_SPEED,
            damping: DEFAULT_DAMPING,
            zoom_enabled: false,
            pan_enabled: false,
        }
    }
}

impl OrbitRig {
    /// Create a rig with the given orbit rate and damping, zoom and pan
    /// disabled.
    pub fn new(auto_rotate_speed: f32, damping: f32) -> Self {
        Self {
            auto_rotate_speed,
            damping,
            zoom_enabled: false,
            pan_enabled: false,
        }
    }

    /// Azimuth of the unperturbed auto orbit at elapsed time `t`, in
    /// radians. Linear in `t`; one full turn every `60 / (speed / 2)`
    /// seconds.
    pub fn auto_orbit_angle(&self, t: f32) -> f32 {
        t * self.auto_rotate_speed * TAU / 60.0
    }

    /// One damped step moving a manually dragged azimuth back toward
    /// `target`. Applied by the host once per frame, this decays any drag
    /// offset exponentially until the auto orbit takes over again.
    pub fn damp_toward(&self, current: f32, target: f32) -> f32 {
        current + (target - current) * self.damping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig_matches_backdrop_setup() {
        let rig = OrbitRig::default();
        assert_eq!(rig.auto_rotate_speed, 0.3);
        assert_eq!(rig.damping, 0.05);
        assert!(!rig.zoom_enabled);
        assert!(!rig.pan_enabled);
    }

    #[test]
    fn test_auto_orbit_angle_is_linear() {
        let rig = OrbitRig::default();
        let a = rig.auto_orbit_angle(10.0);
        let b = rig.auto_orbit_angle(20.0);
        assert!((b - 2.0 * a).abs() < 1e-6, "orbit angle must be linear in t");
    }

    #[test]
    fn test_full_orbit_period_at_reference_speed() {
        // Speed 2.0 is one full turn per 60 seconds by convention.
        let rig = OrbitRig::new(2.0, DEFAULT_DAMPING);
        assert!((rig.auto_orbit_angle(60.0) - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_damped_override_converges_monotonically() {
        let rig = OrbitRig::default();
        let target = 1.0f32;
        let mut angle = 3.0f32;
        let mut previous_gap = (angle - target).abs();
        for _ in 0..400 {
            angle = rig.damp_toward(angle, target);
            let gap = (angle - target).abs();
            assert!(gap <= previous_gap, "damping must never overshoot outward");
            previous_gap = gap;
        }
        assert!(
            previous_gap < 1e-3,
            "after 400 damped steps the drag offset ({previous_gap}) should have decayed"
        );
    }

    #[test]
    fn test_damping_of_one_snaps_to_target() {
        let rig = OrbitRig::new(0.3, 1.0);
        assert_eq!(rig.damp_toward(5.0, 2.0), 2.0);
    }
}
