//! Equipment компоненты персонажа
//!
//! # Архитектура
//!
//! **EquippedWeapon** — handle на weapon entity в руках (не владение!):
//! - World владеет weapon entity, персонаж хранит только `Entity`
//! - `None` → безоружен, fire/reload short-circuit
//!
//! **ItemTrace** — trace под crosshair для pickup widget:
//! - `overlapped_item_count` > 0 → trace каждый frame
//! - `hit_item` / `hit_item_last_frame` — handles, не владение

use bevy::prelude::*;

/// Оружие в руках (weak handle)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct EquippedWeapon(pub Option<Entity>);

impl EquippedWeapon {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }
}

/// Состояние item trace персонажа
///
/// Инвариант: `overlapped_item_count >= 0`, `should_trace == (count > 0)`
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ItemTrace {
    /// Сколько item sphere сейчас overlap'ят персонажа
    pub overlapped_item_count: u32,
    /// Trace включен (есть overlap)
    pub should_trace: bool,
    /// Item под crosshair в этом frame
    pub hit_item: Option<Entity>,
    /// Item под crosshair в прошлом frame
    pub hit_item_last_frame: Option<Entity>,
}

impl ItemTrace {
    /// Изменить overlap counter (clamp на 0)
    pub fn increment_overlapped_item_count(&mut self, amount: i32) {
        let next = self.overlapped_item_count as i64 + amount as i64;
        if next <= 0 {
            self.overlapped_item_count = 0;
            self.should_trace = false;
        } else {
            self.overlapped_item_count = next.min(u32::MAX as i64) as u32;
            self.should_trace = true;
        }
    }

    /// Сбросить оба handle (после swap pickup prompt не должен висеть)
    pub fn clear(&mut self) {
        self.hit_item = None;
        self.hit_item_last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_counter_clamps_at_zero() {
        let mut trace = ItemTrace::default();

        trace.increment_overlapped_item_count(1);
        trace.increment_overlapped_item_count(1);
        assert_eq!(trace.overlapped_item_count, 2);
        assert!(trace.should_trace);

        trace.increment_overlapped_item_count(-3);
        assert_eq!(trace.overlapped_item_count, 0);
        assert!(!trace.should_trace);
    }

    #[test]
    fn test_overlap_counter_partial_decrement_keeps_tracing() {
        let mut trace = ItemTrace::default();
        trace.increment_overlapped_item_count(3);
        trace.increment_overlapped_item_count(-1);
        assert_eq!(trace.overlapped_item_count, 2);
        assert!(trace.should_trace);
    }

    #[test]
    fn test_clear_trace_handles() {
        let mut trace = ItemTrace {
            hit_item: Some(Entity::from_raw(1)),
            hit_item_last_frame: Some(Entity::from_raw(2)),
            ..default()
        };
        trace.clear();
        assert_eq!(trace.hit_item, None);
        assert_eq!(trace.hit_item_last_frame, None);
    }
}
