//! Movement systems: crouch toggle, jump, capsule interpolation

use bevy::prelude::*;

use crate::components::{CapsuleState, CrouchState, KinematicState, MovementTuning};
use crate::config::ShooterConfig;
use crate::movement::{CrouchIntent, JumpIntent, JumpRequested};

/// Speed + friction для стойки
pub fn stance_tuning(crouching: bool, config: &ShooterConfig) -> MovementTuning {
    if crouching {
        MovementTuning {
            max_walk_speed: config.crouch_movement_speed,
            ground_friction: config.crouching_ground_friction,
        }
    } else {
        MovementTuning {
            max_walk_speed: config.base_movement_speed,
            ground_friction: config.base_ground_friction,
        }
    }
}

/// System: crouch toggle
///
/// В воздухе флаг не меняется, но tuning все равно пересчитывается
/// из текущей стойки (сбрасывает aim speed).
pub fn process_crouch_intents(
    mut events: EventReader<CrouchIntent>,
    mut characters: Query<(&KinematicState, &mut CrouchState, &mut MovementTuning)>,
    config: Res<ShooterConfig>,
) {
    for intent in events.read() {
        let Ok((kinematic, mut crouch, mut tuning)) = characters.get_mut(intent.entity) else {
            continue;
        };

        if !kinematic.falling {
            crouch.crouching = !crouch.crouching;
        }

        *tuning = stance_tuning(crouch.crouching, &config);
    }
}

/// System: jump
///
/// Сидя → встаем (base speed), friction не трогаем.
pub fn process_jump_intents(
    mut events: EventReader<JumpIntent>,
    mut characters: Query<(&mut CrouchState, &mut MovementTuning)>,
    mut jumps: EventWriter<JumpRequested>,
    config: Res<ShooterConfig>,
) {
    for intent in events.read() {
        let Ok((mut crouch, mut tuning)) = characters.get_mut(intent.entity) else {
            continue;
        };

        if crouch.crouching {
            crouch.crouching = false;
            tuning.max_walk_speed = config.base_movement_speed;
        } else {
            jumps.write(JumpRequested {
                entity: intent.entity,
            });
        }
    }
}

/// System: capsule half-height → target стойки
pub fn interp_capsule_half_height(
    mut characters: Query<(&CrouchState, &mut CapsuleState)>,
    config: Res<ShooterConfig>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (crouch, mut capsule) in characters.iter_mut() {
        let target = if crouch.crouching {
            config.crouching_capsule_half_height
        } else {
            config.standing_capsule_half_height
        };

        capsule.interp_half_height(target, delta, config.capsule_interp_speed);
    }
}
