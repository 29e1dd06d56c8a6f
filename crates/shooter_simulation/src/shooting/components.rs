//! Aim components — прицеливание, camera zoom, look sensitivity
//!
//! Architecture:
//! - AimState: aiming флаг + FOV (default / zoomed / current)
//! - LookRates: turn/look-up rates, пересчитываются каждый frame из aiming флага
//! - Hip vs Aiming — два фиксированных tier (без плавного перехода sensitivity)
//!
//! Flow:
//! 1. Player жмет/отпускает RMB → AimIntent event
//! 2. process_aim_intents → AimState.aiming + MovementTuning.max_walk_speed
//! 3. camera_interp_zoom → AimState.current_fov → CameraRig.fov
//! 4. set_look_rates → LookRates (читается apply_look_input)

use bevy::prelude::*;

use crate::config::ShooterConfig;
use crate::shared::approach;

/// Aim state персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimState {
    pub aiming: bool,
    /// FOV камеры на старте (снимается с CameraRig при spawn)
    pub default_fov: f32,
    /// FOV при прицеливании
    pub zoomed_fov: f32,
    /// Текущий интерполированный FOV
    pub current_fov: f32,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            aiming: false,
            default_fov: 90.0,
            zoomed_fov: 45.0,
            current_fov: 90.0,
        }
    }
}

impl AimState {
    pub fn target_fov(&self) -> f32 {
        if self.aiming {
            self.zoomed_fov
        } else {
            self.default_fov
        }
    }

    /// Один шаг camera zoom
    pub fn interp_zoom(&mut self, delta_time: f32, zoom_speed: f32) -> f32 {
        self.current_fov = approach(self.current_fov, self.target_fov(), delta_time, zoom_speed);
        self.current_fov
    }
}

/// Look sensitivity (текущий tier)
///
/// `base_*` — deg/sec для rate input (gamepad stick),
/// `mouse_*` — множитель для mouse delta.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LookRates {
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
    pub mouse_turn_scale: f32,
    pub mouse_look_up_scale: f32,
}

impl Default for LookRates {
    fn default() -> Self {
        Self::hip(&ShooterConfig::default())
    }
}

impl LookRates {
    pub fn hip(config: &ShooterConfig) -> Self {
        Self {
            base_turn_rate: config.hip_turn_rate,
            base_look_up_rate: config.hip_look_up_rate,
            mouse_turn_scale: config.mouse_hip_turn_rate,
            mouse_look_up_scale: config.mouse_hip_look_up_rate,
        }
    }

    pub fn aiming(config: &ShooterConfig) -> Self {
        Self {
            base_turn_rate: config.aiming_turn_rate,
            base_look_up_rate: config.aiming_look_up_rate,
            mouse_turn_scale: config.mouse_aiming_turn_rate,
            mouse_look_up_scale: config.mouse_aiming_look_up_rate,
        }
    }

    pub fn for_aiming(aiming: bool, config: &ShooterConfig) -> Self {
        if aiming {
            Self::aiming(config)
        } else {
            Self::hip(config)
        }
    }

    /// Rate input (-1..1) → градусы yaw/pitch за этот frame
    pub fn rate_to_degrees(&self, turn_rate: f32, look_up_rate: f32, delta_time: f32) -> Vec2 {
        Vec2::new(
            turn_rate * self.base_turn_rate * delta_time,
            look_up_rate * self.base_look_up_rate * delta_time,
        )
    }

    /// Mouse delta → scaled input
    pub fn scale_mouse(&self, turn: f32, look_up: f32) -> Vec2 {
        Vec2::new(turn * self.mouse_turn_scale, look_up * self.mouse_look_up_scale)
    }
}

/// Event: aim button press/release (RMB)
#[derive(Event, Debug, Clone, Copy)]
pub struct AimIntent {
    pub entity: Entity,
    pub pressed: bool,
}

/// Event: look axes за frame (хост собирает из input bindings)
#[derive(Event, Debug, Clone, Copy)]
pub struct LookIntent {
    pub entity: Entity,
    /// Gamepad rate axes (-1..1)
    pub turn_rate: f32,
    pub look_up_rate: f32,
    /// Mouse delta
    pub mouse_turn: f32,
    pub mouse_look_up: f32,
}

/// Event: итоговый controller yaw/pitch input (ECS → хост)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ControllerRotationInput {
    pub entity: Entity,
    pub yaw: f32,
    pub pitch: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_state_default() {
        let aim = AimState::default();
        assert!(!aim.aiming);
        assert_eq!(aim.target_fov(), 90.0);
    }

    #[test]
    fn test_zoom_converges_to_zoomed_fov() {
        let mut aim = AimState {
            aiming: true,
            ..default()
        };

        for _ in 0..60 {
            aim.interp_zoom(1.0 / 60.0, 20.0);
        }
        assert!((aim.current_fov - 45.0).abs() < 1e-2);

        aim.aiming = false;
        aim.interp_zoom(1.0, 20.0);
        assert_eq!(aim.current_fov, 90.0);
    }

    #[test]
    fn test_look_rate_tiers() {
        let config = ShooterConfig::default();
        let hip = LookRates::for_aiming(false, &config);
        let aiming = LookRates::for_aiming(true, &config);

        assert_eq!(hip.base_turn_rate, 90.0);
        assert_eq!(aiming.base_turn_rate, 20.0);
        assert_eq!(hip.mouse_turn_scale, 1.0);
        assert_eq!(aiming.mouse_turn_scale, 0.4);
    }

    #[test]
    fn test_rate_to_degrees() {
        let rates = LookRates::hip(&ShooterConfig::default());
        let delta = rates.rate_to_degrees(1.0, -0.5, 0.5);
        assert_eq!(delta, Vec2::new(45.0, -22.5));
    }
}
