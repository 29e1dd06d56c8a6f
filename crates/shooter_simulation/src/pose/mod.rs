//! Pose domain — animation-facing параметры персонажа
//!
//! ECS не оценивает позу сам — считает параметры, которые pose system хоста
//! читает каждый frame (blend spaces, aim offsets, turn-in-place, lean):
//! - TurnInPlace (root yaw offset + recoil weight)
//! - Lean (сглаженный yaw rate)
//! - speed / in_air / accelerating / movement offset yaw
//! - OffsetState (какой aim offset выбрать)

pub mod turn_in_place;
pub mod lean;

#[cfg(test)]
mod turn_in_place_tests;

pub use turn_in_place::*;
pub use lean::*;

use bevy::prelude::*;

use crate::animation::{AnimCurves, ROTATION_CURVE, TURNING_CURVE};
use crate::combat::CombatState;
use crate::components::{CrouchState, KinematicState};
use crate::shared::{normalized_delta_yaw, yaw_from_direction};
use crate::shooting::AimState;

/// Какой aim offset использовать
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum OffsetState {
    Aiming,
    #[default]
    Hip,
    Reloading,
    InAir,
}

impl OffsetState {
    /// Priority: Reloading → InAir → Aiming → Hip
    pub fn select(reloading: bool, in_air: bool, aiming: bool) -> Self {
        if reloading {
            OffsetState::Reloading
        } else if in_air {
            OffsetState::InAir
        } else if aiming {
            OffsetState::Aiming
        } else {
            OffsetState::Hip
        }
    }
}

/// Pose параметры персонажа (ECS → animation)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PoseState {
    /// Planar speed
    pub speed: f32,
    pub in_air: bool,
    pub accelerating: bool,
    /// Yaw между направлением движения и aim rotation (strafe blend)
    pub movement_offset_yaw: f32,
    /// Последний offset пока двигались (для jog stop анимаций)
    pub last_movement_offset_yaw: f32,
    pub aiming: bool,
    pub reloading: bool,
    pub crouching: bool,
    pub offset_state: OffsetState,
    /// Aim pitch для aim offset
    pub pitch: f32,
    pub turn_in_place: TurnInPlace,
    pub lean: Lean,
}

/// Входные данные за frame (снимок ECS компонентов)
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseInputs {
    pub kinematic: KinematicState,
    pub aiming: bool,
    pub reloading: bool,
    pub crouching: bool,
    pub turning_curve: f32,
    pub rotation_curve: f32,
}

impl PoseState {
    /// Полное обновление pose параметров за frame
    pub fn update(&mut self, inputs: PoseInputs, delta_time: f32) {
        let kinematic = inputs.kinematic;

        self.speed = kinematic.planar_speed();
        self.in_air = kinematic.falling;
        self.accelerating = kinematic.is_accelerating();
        self.aiming = inputs.aiming;
        self.reloading = inputs.reloading;
        self.crouching = inputs.crouching;

        let movement_yaw = yaw_from_direction(kinematic.velocity);
        self.movement_offset_yaw = normalized_delta_yaw(movement_yaw, kinematic.aim_yaw);
        if kinematic.velocity.length() > 0.0 {
            self.last_movement_offset_yaw = self.movement_offset_yaw;
        }

        self.offset_state = OffsetState::select(self.reloading, self.in_air, self.aiming);

        self.pitch = kinematic.aim_pitch;
        self.turn_in_place.update(TurnInPlaceInputs {
            planar_speed: self.speed,
            in_air: self.in_air,
            actor_yaw: kinematic.actor_yaw,
            turning_curve: inputs.turning_curve,
            rotation_curve: inputs.rotation_curve,
        });
        self.turn_in_place.update_recoil_weight(RecoilInputs {
            crouching: self.crouching,
            reloading: self.reloading,
            aiming: self.aiming,
        });

        self.lean.update(kinematic.actor_yaw, delta_time);
    }

    pub fn root_yaw_offset(&self) -> f32 {
        self.turn_in_place.root_yaw_offset
    }

    pub fn recoil_weight(&self) -> f32 {
        self.turn_in_place.recoil_weight
    }
}

/// System: animation properties (последний шаг frame)
pub fn update_animation_properties(
    mut characters: Query<(
        &KinematicState,
        &AimState,
        &CombatState,
        &CrouchState,
        &AnimCurves,
        &mut PoseState,
    )>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (kinematic, aim, combat, crouch, curves, mut pose) in characters.iter_mut() {
        pose.update(
            PoseInputs {
                kinematic: *kinematic,
                aiming: aim.aiming,
                reloading: *combat == CombatState::Reloading,
                crouching: crouch.crouching,
                turning_curve: curves.get(TURNING_CURVE),
                rotation_curve: curves.get(ROTATION_CURVE),
            },
            delta,
        );
    }
}
