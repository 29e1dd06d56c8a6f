//! Базовые компоненты персонажа: ShooterCharacter, KinematicState

use bevy::prelude::*;

use crate::animation::AnimCurves;
use crate::combat::{AmmoInventory, CharacterAssets, CombatState, CombatTimers, FireTrigger};
use crate::components::{CapsuleState, CrouchState, EquippedWeapon, HandAnchor, ItemTrace, MovementTuning};
use crate::crosshair::CrosshairSpread;
use crate::pose::PoseState;
use crate::shared::CameraRig;
use crate::shooting::{AimState, LookRates};

/// Персонаж-стрелок — aggregate root для всей per-frame симуляции
///
/// Все остальные компоненты добавляются через Required Components,
/// стартовые значения (ammo, FOV, speed) проставляет `spawn_shooter_character`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    KinematicState,
    MovementTuning,
    CrouchState,
    CapsuleState,
    CameraRig,
    AimState,
    LookRates,
    CombatState,
    CombatTimers,
    FireTrigger,
    AmmoInventory,
    CharacterAssets,
    EquippedWeapon,
    ItemTrace,
    HandAnchor,
    CrosshairSpread,
    PoseState,
    AnimCurves
)]
pub struct ShooterCharacter;

/// Kinematic state персонажа (пишет хост каждый frame)
///
/// Movement provider владеет velocity/rotation; ECS только читает.
/// Углы в градусах, yaw вокруг +Y (yaw 0 = -Z).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct KinematicState {
    /// Текущая velocity (world space)
    pub velocity: Vec3,
    /// Текущее ускорение от input (world space)
    pub acceleration: Vec3,
    /// В воздухе (прыжок, падение)
    pub falling: bool,
    /// Yaw актора (root rotation)
    pub actor_yaw: f32,
    /// Base aim rotation (controller) — yaw
    pub aim_yaw: f32,
    /// Base aim rotation (controller) — pitch
    pub aim_pitch: f32,
}

impl KinematicState {
    /// Горизонтальная скорость
    pub fn planar_speed(&self) -> f32 {
        crate::shared::planar_speed(self.velocity)
    }

    pub fn is_accelerating(&self) -> bool {
        self.acceleration.length() > 0.0
    }
}
