use bevy::prelude::*;

/// Frame-rate independent exponential approach of `current` towards `target`.
///
/// The blend factor `1 - e^(-rate * dt)` stays in `[0, 1)`, so the result
/// never passes the target. `dt == 0` returns `current` unchanged.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    if dt <= 0.0 || rate <= 0.0 {
        return current;
    }
    let factor = 1.0 - (-rate * dt).exp();
    current + (target - current) * factor
}

/// Per-axis [`damp`] for 2D values.
#[inline]
pub fn damp_vec2(current: Vec2, target: Vec2, rate: f32, dt: f32) -> Vec2 {
    Vec2::new(
        damp(current.x, target.x, rate, dt),
        damp(current.y, target.y, rate, dt),
    )
}

/// Linear interpolation that returns `a` and `b` exactly at `t == 0` and `t == 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Smoothstep easing `p²(3 - 2p)`, clamped to `[0, 1]`.
#[inline]
pub fn ease(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damp_zero_dt_is_identity() {
        assert_eq!(damp(0.3, 1.0, 2.0, 0.0), 0.3);
    }

    #[test]
    fn damp_never_overshoots() {
        let mut value = 0.0;
        for _ in 0..10_000 {
            let next = damp(value, 1.0, 50.0, 0.5);
            assert!(next >= value);
            assert!(next <= 1.0);
            value = next;
        }
    }

    #[test]
    fn damp_vec2_is_per_axis() {
        let out = damp_vec2(Vec2::ZERO, Vec2::new(1.0, -1.0), 3.0, 0.1);
        assert!(out.x > 0.0 && out.x < 1.0);
        assert!((out.x + out.y).abs() < 1e-6);
    }

    #[test]
    fn ease_boundaries() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(0.5), 0.5);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = ease(0.0);
        for i in 1..=1000 {
            let value = ease(i as f32 / 1000.0);
            assert!(value >= last);
            last = value;
        }
    }
}
