//! Aim systems: aim button, camera zoom, look rates, look input

use bevy::prelude::*;

use crate::components::{CrouchState, MovementTuning};
use crate::config::ShooterConfig;
use crate::shared::CameraRig;
use crate::shooting::{AimIntent, AimState, ControllerRotationInput, LookIntent, LookRates};

/// System: aim button press/release
///
/// Press → aiming + walk speed снижается до crouch speed.
/// Release → base speed, но только если не сидим (crouch speed остается).
pub fn process_aim_intents(
    mut events: EventReader<AimIntent>,
    mut characters: Query<(&mut AimState, &mut MovementTuning, &CrouchState)>,
    config: Res<ShooterConfig>,
) {
    for intent in events.read() {
        let Ok((mut aim, mut tuning, crouch)) = characters.get_mut(intent.entity) else {
            continue;
        };

        aim.aiming = intent.pressed;

        if intent.pressed {
            tuning.max_walk_speed = config.crouch_movement_speed;
        } else if !crouch.crouching {
            tuning.max_walk_speed = config.base_movement_speed;
        }
    }
}

/// System: camera zoom (FOV → target каждый frame)
pub fn camera_interp_zoom(
    mut characters: Query<(&mut AimState, &mut CameraRig)>,
    config: Res<ShooterConfig>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (mut aim, mut camera) in characters.iter_mut() {
        camera.fov = aim.interp_zoom(delta, config.zoom_interp_speed);
    }
}

/// System: look sensitivity tier из aiming флага
pub fn set_look_rates(
    mut characters: Query<(&AimState, &mut LookRates)>,
    config: Res<ShooterConfig>,
) {
    for (aim, mut rates) in characters.iter_mut() {
        let next = LookRates::for_aiming(aim.aiming, &config);
        // Не трогаем компонент зря — Changed<LookRates> только при смене tier
        if *rates != next {
            *rates = next;
        }
    }
}

/// System: look axes → controller rotation input для хоста
///
/// Rate axes масштабируются по времени (deg/sec), mouse — нет.
pub fn apply_look_input(
    mut events: EventReader<LookIntent>,
    characters: Query<&LookRates>,
    mut rotation_events: EventWriter<ControllerRotationInput>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for intent in events.read() {
        let Ok(rates) = characters.get(intent.entity) else {
            continue;
        };

        let from_rate = rates.rate_to_degrees(intent.turn_rate, intent.look_up_rate, delta);
        let from_mouse = rates.scale_mouse(intent.mouse_turn, intent.mouse_look_up);
        let total = from_rate + from_mouse;

        if total == Vec2::ZERO {
            continue;
        }

        rotation_events.write(ControllerRotationInput {
            entity: intent.entity,
            yaw: total.x,
            pitch: total.y,
        });
    }
}
