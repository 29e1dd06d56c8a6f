//! Equipment system events
//!
//! # Architecture
//!
//! **Pickup flow:**
//! - `ItemOverlapChanged` (хост) → overlap counter → item trace вкл/выкл
//! - `SelectIntent` (хост) → traced item начинает лететь к камере
//! - `ItemPickupFinished` (внутреннее) → equip sound + swap
//!
//! **Drop:**
//! - `WeaponThrown` (ECS → хост) → physics impulse на выброшенное оружие

use bevy::prelude::*;

/// Персонаж вошел / вышел из pickup sphere предмета
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemOverlapChanged {
    /// Персонаж
    pub entity: Entity,
    pub item: Entity,
    /// `true` → begin overlap, `false` → end overlap
    pub overlapping: bool,
}

impl ItemOverlapChanged {
    /// Delta для overlap counter
    pub fn amount(&self) -> i32 {
        if self.overlapping {
            1
        } else {
            -1
        }
    }
}

/// Select button (подобрать предмет под crosshair)
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectIntent {
    pub entity: Entity,
}

/// Item долетел до камеры — персонаж его получает
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPickupFinished {
    pub character: Entity,
    pub item: Entity,
}

/// Оружие выброшено (хост применяет impulse к physics body)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct WeaponThrown {
    pub weapon: Entity,
    pub impulse: Vec3,
}
