//! Lean: наклон при повороте на бегу

use bevy::prelude::*;

use crate::shared::{approach, normalized_delta_yaw};

pub const LEAN_INTERP_SPEED: f32 = 6.0;
pub const MAX_LEAN: f32 = 90.0;

/// Lean state — yaw rate персонажа, сглаженный и ограниченный
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct Lean {
    pub character_yaw: f32,
    pub character_yaw_last_frame: f32,
    /// Сглаженный yaw delta/sec, ∈ [-90, 90]
    pub yaw_delta: f32,
}

impl Lean {
    pub fn update(&mut self, actor_yaw: f32, delta_time: f32) -> f32 {
        self.character_yaw_last_frame = self.character_yaw;
        self.character_yaw = actor_yaw;

        // dt == 0 (пауза, первый frame) — нечего делить
        if delta_time <= 0.0 {
            return self.yaw_delta;
        }

        let delta = normalized_delta_yaw(self.character_yaw, self.character_yaw_last_frame);
        let target = delta / delta_time;
        let interp = approach(self.yaw_delta, target, delta_time, LEAN_INTERP_SPEED);

        self.yaw_delta = interp.clamp(-MAX_LEAN, MAX_LEAN);
        self.yaw_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lean_no_rotation_stays_zero() {
        let mut lean = Lean::default();
        for _ in 0..10 {
            assert_eq!(lean.update(0.0, 1.0 / 60.0), 0.0);
        }
    }

    #[test]
    fn test_lean_smooths_toward_yaw_rate() {
        let mut lean = Lean::default();
        // 1°/frame при 60 fps = 60°/sec, alpha = 6/60 = 0.1
        let value = lean.update(1.0, 1.0 / 60.0);
        assert!((value - 6.0).abs() < 1e-3, "lean = {}", value);
    }

    #[test]
    fn test_lean_clamped() {
        let mut lean = Lean::default();
        let mut yaw = 0.0;
        for _ in 0..200 {
            yaw += 10.0; // 600°/sec
            let value = lean.update(crate::shared::normalize_axis(yaw), 1.0 / 60.0);
            assert!(value <= MAX_LEAN && value >= -MAX_LEAN);
        }
        assert_eq!(lean.yaw_delta, MAX_LEAN);
    }

    #[test]
    fn test_lean_wraps_across_180() {
        let mut lean = Lean {
            character_yaw: 179.0,
            character_yaw_last_frame: 179.0,
            yaw_delta: 0.0,
        };
        // 179 → -179 = +2°, не -358°
        let value = lean.update(-179.0, 1.0);
        assert!(value > 0.0);
    }

    #[test]
    fn test_lean_zero_delta_time_keeps_value() {
        let mut lean = Lean {
            yaw_delta: 12.0,
            ..default()
        };
        assert_eq!(lean.update(30.0, 0.0), 12.0);
    }
}
