//! ShooterConfig — все tunables персонажа в одном resource
//!
//! Значения по умолчанию hardcoded в `Default` (как AIConfig), хост может
//! переопределить через serde (RON/JSON) и `insert_resource` до `SimulationPlugin`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunables персонажа (aim, combat, crosshair, crouch, items)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    // === Look sensitivity (deg/sec для rate input, множитель для mouse) ===
    pub hip_turn_rate: f32,
    pub hip_look_up_rate: f32,
    pub aiming_turn_rate: f32,
    pub aiming_look_up_rate: f32,
    pub mouse_hip_turn_rate: f32,
    pub mouse_hip_look_up_rate: f32,
    pub mouse_aiming_turn_rate: f32,
    pub mouse_aiming_look_up_rate: f32,

    // === Camera zoom ===
    /// FOV при прицеливании (градусы)
    pub camera_zoomed_fov: f32,
    pub zoom_interp_speed: f32,
    /// Camera interp location = camera + forward * distance + up * elevation
    pub camera_interp_distance: f32,
    pub camera_interp_elevation: f32,

    // === Combat timing ===
    /// Окно "пуля только что вылетела" для crosshair (секунды)
    pub shoot_time_duration: f32,
    /// Интервал автоматического огня (секунды)
    pub automatic_fire_rate: f32,

    // === Traces ===
    /// Смещение crosshair вверх от центра экрана (пиксели)
    pub crosshair_screen_offset: f32,
    pub crosshair_trace_distance: f32,
    /// Muzzle trace продлевается за crosshair target
    pub muzzle_trace_extension: f32,

    // === Ammo ===
    pub starting_9mm_ammo: u32,
    pub starting_ar_ammo: u32,

    // === Movement / crouch ===
    pub base_movement_speed: f32,
    pub crouch_movement_speed: f32,
    pub base_ground_friction: f32,
    pub crouching_ground_friction: f32,
    pub standing_capsule_half_height: f32,
    pub crouching_capsule_half_height: f32,
    pub capsule_interp_speed: f32,

    // === Items ===
    pub item_interp_duration: f32,
    pub item_interp_horizontal_speed: f32,
    pub throw_duration: f32,
    pub throw_impulse: f32,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            hip_turn_rate: 90.0,
            hip_look_up_rate: 90.0,
            aiming_turn_rate: 20.0,
            aiming_look_up_rate: 20.0,
            mouse_hip_turn_rate: 1.0,
            mouse_hip_look_up_rate: 1.0,
            mouse_aiming_turn_rate: 0.4,
            mouse_aiming_look_up_rate: 0.4,

            camera_zoomed_fov: 45.0,
            zoom_interp_speed: 20.0,
            camera_interp_distance: 250.0,
            camera_interp_elevation: 65.0,

            shoot_time_duration: 0.05,
            automatic_fire_rate: 0.1,

            crosshair_screen_offset: 50.0,
            crosshair_trace_distance: 50_000.0,
            muzzle_trace_extension: 1.25,

            starting_9mm_ammo: 85,
            starting_ar_ammo: 240,

            base_movement_speed: 650.0,
            crouch_movement_speed: 300.0,
            base_ground_friction: 2.0,
            crouching_ground_friction: 100.0,
            standing_capsule_half_height: 88.0,
            crouching_capsule_half_height: 44.0,
            capsule_interp_speed: 20.0,

            item_interp_duration: 0.7,
            item_interp_horizontal_speed: 30.0,
            throw_duration: 0.7,
            throw_impulse: 20_000.0,
        }
    }
}
