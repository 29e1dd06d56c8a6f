//! Movement компоненты: tuning для movement provider, crouch, capsule

use bevy::prelude::*;

use crate::shared::approach;

/// Параметры движения, которые ECS пишет для movement provider
///
/// Хост читает каждый frame и применяет к CharacterMovement
/// (max walk speed, ground friction).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementTuning {
    pub max_walk_speed: f32,
    pub ground_friction: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_walk_speed: 650.0,
            ground_friction: 2.0,
        }
    }
}

/// Crouch флаг (ECS единственный writer)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CrouchState {
    pub crouching: bool,
}

/// Capsule half-height + компенсирующий mesh offset
///
/// Когда capsule сжимается, mesh сдвигается вверх на ту же величину —
/// ноги визуально остаются на земле.
///
/// Инвариант: `half_height + mesh_offset == начальная half_height`
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CapsuleState {
    /// Текущая (интерполированная) half-height
    pub half_height: f32,
    /// Накопленный local vertical offset mesh
    pub mesh_offset: f32,
    /// Offset, добавленный в последнем frame (0 в равновесии)
    pub last_mesh_offset_delta: f32,
}

impl Default for CapsuleState {
    fn default() -> Self {
        Self::new(88.0)
    }
}

impl CapsuleState {
    pub fn new(half_height: f32) -> Self {
        Self {
            half_height,
            mesh_offset: 0.0,
            last_mesh_offset_delta: 0.0,
        }
    }

    /// Один шаг интерполяции к target half-height
    ///
    /// Возвращает mesh offset этого frame (отрицательная delta высоты).
    pub fn interp_half_height(&mut self, target: f32, delta_time: f32, rate: f32) -> f32 {
        let interp = approach(self.half_height, target, delta_time, rate);

        // Отрицательная при приседании, положительная при вставании
        let delta_half_height = interp - self.half_height;
        let mesh_offset = -delta_half_height;

        self.mesh_offset += mesh_offset;
        self.last_mesh_offset_delta = mesh_offset;
        self.half_height = interp;

        mesh_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capsule_converges_to_crouch_height() {
        let mut capsule = CapsuleState::new(88.0);

        for _ in 0..120 {
            capsule.interp_half_height(44.0, 1.0 / 60.0, 20.0);
        }

        assert!((capsule.half_height - 44.0).abs() < 1e-3);
        assert!((capsule.mesh_offset - 44.0).abs() < 1e-3);
        assert!(capsule.last_mesh_offset_delta.abs() < 1e-3);
    }

    #[test]
    fn test_capsule_offset_tracks_height() {
        let mut capsule = CapsuleState::new(88.0);
        let offset = capsule.interp_half_height(44.0, 0.5, 1.0);

        // alpha = 0.5 → 88 → 66, mesh поднимается на 22
        assert_eq!(capsule.half_height, 66.0);
        assert_eq!(offset, 22.0);
        assert_eq!(capsule.half_height + capsule.mesh_offset, 88.0);
    }

    #[test]
    fn test_capsule_stand_up_lowers_mesh() {
        let mut capsule = CapsuleState::new(44.0);
        let offset = capsule.interp_half_height(88.0, 1.0, 20.0);

        assert_eq!(capsule.half_height, 88.0);
        assert_eq!(offset, -44.0);
    }

    #[test]
    fn test_capsule_equilibrium_no_offset() {
        let mut capsule = CapsuleState::new(88.0);
        let offset = capsule.interp_half_height(88.0, 1.0 / 60.0, 20.0);
        assert_eq!(offset, 0.0);
        assert_eq!(capsule.mesh_offset, 0.0);
    }
}
