/// Radians of rotation per second of elapsed time.
pub const ROTATION_SPEED: f32 = 0.05;

/// Angle about the vertical axis of the whole cloud after `elapsed_seconds`.
///
/// Grows without bound; callers that need a normalized angle wrap it
/// themselves.
pub fn orientation(elapsed_seconds: f32) -> f32 {
    elapsed_seconds * ROTATION_SPEED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(orientation(0.0), 0.0);
    }

    #[test]
    fn one_radian_after_twenty_seconds() {
        assert!((orientation(20.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn monotonic_and_unwrapped() {
        let angles: Vec<f32> = (0..1000).map(|s| orientation(s as f32)).collect();
        assert!(angles.windows(2).all(|w| w[1] > w[0]));
        assert!(orientation(1000.0) > std::f32::consts::TAU);
    }
}
