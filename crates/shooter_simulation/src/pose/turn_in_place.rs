//! Turn-in-place: root yaw offset + recoil weight
//!
//! Пока персонаж стоит, root (капсула) поворачивается вместе с controller,
//! а нижняя часть тела отстает на `root_yaw_offset`. Когда pose system
//! проигрывает turn-in-place анимацию (curve "Turning" > 0), curve "Rotation"
//! съедает offset обратно к нулю.

use bevy::prelude::*;

use crate::shared::normalize_axis;

/// Максимальный offset после поворота (градусы)
pub const MAX_TURN_OFFSET: f32 = 90.0;

/// Входные данные turn-in-place за frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TurnInPlaceInputs {
    pub planar_speed: f32,
    pub in_air: bool,
    pub actor_yaw: f32,
    /// Curve "Turning" (> 0 → идет turn-in-place анимация)
    pub turning_curve: f32,
    /// Curve "Rotation"
    pub rotation_curve: f32,
}

/// Флаги для recoil weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoilInputs {
    pub crouching: bool,
    pub reloading: bool,
    pub aiming: bool,
}

/// Turn-in-place state
///
/// Инварианты:
/// - `root_yaw_offset ∈ [-180, 180]` после fold
/// - `|root_yaw_offset| <= 90` после коррекции curve'ом
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TurnInPlace {
    pub character_yaw: f32,
    pub character_yaw_last_frame: f32,
    pub rotation_curve: f32,
    pub rotation_curve_last_frame: f32,
    pub root_yaw_offset: f32,
    pub turning_in_place: bool,
    /// Насколько сильно upper-body recoil смешивается с позой
    pub recoil_weight: f32,
}

impl Default for TurnInPlace {
    fn default() -> Self {
        Self {
            character_yaw: 0.0,
            character_yaw_last_frame: 0.0,
            rotation_curve: 0.0,
            rotation_curve_last_frame: 0.0,
            root_yaw_offset: 0.0,
            turning_in_place: false,
            recoil_weight: 1.0,
        }
    }
}

impl TurnInPlace {
    /// Один шаг turn-in-place (без recoil weight)
    pub fn update(&mut self, inputs: TurnInPlaceInputs) {
        // Двигаемся или в воздухе — коррекция не нужна
        if inputs.planar_speed > 0.0 || inputs.in_air {
            self.reset(inputs.actor_yaw);
            return;
        }

        self.character_yaw_last_frame = self.character_yaw;
        self.character_yaw = inputs.actor_yaw;
        let yaw_delta = self.character_yaw - self.character_yaw_last_frame;

        self.root_yaw_offset = normalize_axis(self.root_yaw_offset - yaw_delta);

        if inputs.turning_curve > 0.0 {
            self.turning_in_place = true;
            self.rotation_curve_last_frame = self.rotation_curve;
            self.rotation_curve = inputs.rotation_curve;

            let delta_rotation = self.rotation_curve - self.rotation_curve_last_frame;

            // > 0 → поворот влево, < 0 → вправо
            if self.root_yaw_offset > 0.0 {
                self.root_yaw_offset -= delta_rotation;
            } else {
                self.root_yaw_offset += delta_rotation;
            }

            let abs_offset = self.root_yaw_offset.abs();
            if abs_offset > MAX_TURN_OFFSET {
                let excess = abs_offset - MAX_TURN_OFFSET;
                if self.root_yaw_offset > 0.0 {
                    self.root_yaw_offset -= excess;
                } else {
                    self.root_yaw_offset += excess;
                }
            }
        } else {
            self.turning_in_place = false;
        }
    }

    fn reset(&mut self, actor_yaw: f32) {
        self.root_yaw_offset = 0.0;
        self.character_yaw = actor_yaw;
        self.character_yaw_last_frame = actor_yaw;
        self.rotation_curve = 0.0;
        self.rotation_curve_last_frame = 0.0;
        self.turning_in_place = false;
    }

    /// Пересчитать recoil weight по текущему turning флагу
    pub fn update_recoil_weight(&mut self, flags: RecoilInputs) -> f32 {
        self.recoil_weight = recoil_weight(self.turning_in_place, flags);
        self.recoil_weight
    }
}

/// Recoil weight — priority table сверху вниз
///
/// | turning | crouching | reloading / aiming        | weight |
/// |---------|-----------|---------------------------|--------|
/// | да      | –         | reloading                 | 1.0    |
/// | да      | –         | не reloading              | 0.0    |
/// | нет     | да        | reloading                 | 1.0    |
/// | нет     | да        | не reloading              | 0.1    |
/// | нет     | нет       | aiming или reloading      | 1.0    |
/// | нет     | нет       | ни то ни другое           | 0.5    |
pub fn recoil_weight(turning_in_place: bool, flags: RecoilInputs) -> f32 {
    match (turning_in_place, flags.crouching) {
        (true, _) if flags.reloading => 1.0,
        (true, _) => 0.0,
        (false, true) if flags.reloading => 1.0,
        (false, true) => 0.1,
        (false, false) if flags.aiming || flags.reloading => 1.0,
        (false, false) => 0.5,
    }
}
