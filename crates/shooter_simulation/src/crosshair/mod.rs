//! Crosshair spread model
//!
//! Четыре независимых фактора (velocity, in air, aim, shooting), каждый
//! приближается к своему target, сумма → один multiplier для HUD:
//!
//! `spread = 0.5 + velocity + in_air - aim + shooting`
//!
//! Shooting factor держится пока открыто короткое окно после выстрела
//! (`firing_bullet`), окно закрывает one-shot timer в `CombatTimers`.

use bevy::prelude::*;

use crate::components::KinematicState;
use crate::shared::{approach, map_range_clamped};
use crate::shooting::AimState;

/// Скорость, при которой velocity factor достигает 1.0
pub const WALK_SPEED_RANGE: (f32, f32) = (0.0, 600.0);

pub const IN_AIR_TARGET: f32 = 2.25;
pub const IN_AIR_SPREAD_SPEED: f32 = 2.25;
pub const LANDED_SPREAD_SPEED: f32 = 30.0;

pub const AIM_TARGET: f32 = 0.3;
pub const AIM_SPREAD_SPEED: f32 = 30.0;

pub const SHOOTING_TARGET: f32 = 0.3;
pub const SHOOTING_SPREAD_SPEED: f32 = 60.0;

pub const BASE_SPREAD: f32 = 0.5;

/// Входные данные модели за один frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpreadInputs {
    pub planar_speed: f32,
    pub falling: bool,
    pub aiming: bool,
}

/// Crosshair spread state
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CrosshairSpread {
    pub velocity_factor: f32,
    pub in_air_factor: f32,
    pub aim_factor: f32,
    pub shooting_factor: f32,
    /// Итоговый multiplier (читает HUD)
    pub multiplier: f32,
    /// Окно "пуля только что вылетела" открыто
    pub firing_bullet: bool,
}

impl Default for CrosshairSpread {
    fn default() -> Self {
        Self {
            velocity_factor: 0.0,
            in_air_factor: 0.0,
            aim_factor: 0.0,
            shooting_factor: 0.0,
            multiplier: BASE_SPREAD,
            firing_bullet: false,
        }
    }
}

impl CrosshairSpread {
    /// Один шаг модели, возвращает новый multiplier
    pub fn update(&mut self, inputs: SpreadInputs, delta_time: f32) -> f32 {
        self.velocity_factor = map_range_clamped(inputs.planar_speed, WALK_SPEED_RANGE, (0.0, 1.0));

        self.in_air_factor = if inputs.falling {
            approach(self.in_air_factor, IN_AIR_TARGET, delta_time, IN_AIR_SPREAD_SPEED)
        } else {
            approach(self.in_air_factor, 0.0, delta_time, LANDED_SPREAD_SPEED)
        };

        let aim_target = if inputs.aiming { AIM_TARGET } else { 0.0 };
        self.aim_factor = approach(self.aim_factor, aim_target, delta_time, AIM_SPREAD_SPEED);

        let shooting_target = if self.firing_bullet { SHOOTING_TARGET } else { 0.0 };
        self.shooting_factor =
            approach(self.shooting_factor, shooting_target, delta_time, SHOOTING_SPREAD_SPEED);

        self.multiplier = BASE_SPREAD + self.velocity_factor + self.in_air_factor - self.aim_factor
            + self.shooting_factor;
        self.multiplier
    }

    /// Открыть окно выстрела (закрывается timer'ом)
    pub fn start_bullet_fire(&mut self) {
        self.firing_bullet = true;
    }

    pub fn finish_bullet_fire(&mut self) {
        self.firing_bullet = false;
    }
}

/// System: crosshair spread каждый frame
pub fn calculate_crosshair_spread(
    mut characters: Query<(&KinematicState, &AimState, &mut CrosshairSpread)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (kinematic, aim, mut spread) in characters.iter_mut() {
        spread.update(
            SpreadInputs {
                planar_speed: kinematic.planar_speed(),
                falling: kinematic.falling,
                aiming: aim.aiming,
            },
            delta,
        );
    }
}
