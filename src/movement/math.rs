//! Movement domain: angle and smoothing helpers.

/// Linear interpolation by `t`, clamped to [0, 1].
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Wrap an angle once past +-360 degrees, then clamp into [min, max].
pub fn clamp_angle(mut angle: f32, min: f32, max: f32) -> f32 {
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    angle.clamp(min, max)
}

/// Shortest signed difference between two angles in degrees.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Critically damped ease of `current` toward `target` over roughly
/// `smooth_time` seconds. `velocity` carries rate state between calls.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Never overshoot the target
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt.max(1e-6);
    }
    output
}

/// `smooth_damp` along the shortest arc between two angles in degrees.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_angle_wraps_once() {
        assert_eq!(clamp_angle(370.0, f32::MIN, f32::MAX), 10.0);
        assert_eq!(clamp_angle(-365.0, f32::MIN, f32::MAX), -5.0);
        assert_eq!(clamp_angle(45.0, -30.0, 70.0), 45.0);
        assert_eq!(clamp_angle(90.0, -30.0, 70.0), 70.0);
        assert_eq!(clamp_angle(-90.0, -30.0, 70.0), -30.0);
    }

    #[test]
    fn test_delta_angle_shortest_arc() {
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut velocity = 0.0;
        let mut current = 0.0;
        for _ in 0..240 {
            current = smooth_damp(current, 100.0, &mut velocity, 0.12, 1.0 / 60.0);
            assert!(current <= 100.0);
        }
        assert!((current - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_smooth_damp_angle_crosses_wrap() {
        let mut velocity = 0.0;
        // From 350 toward 10 should move upward through 360, not backward
        let next = smooth_damp_angle(350.0, 10.0, &mut velocity, 0.12, 1.0 / 60.0);
        assert!(next > 350.0);
    }
}
