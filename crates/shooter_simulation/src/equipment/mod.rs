//! Equipment module — item trace, pickup, swap
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Хост шлет overlap / select events
//! - Systems обновляют ItemTrace, ItemState, EquippedWeapon
//! - Changed<Attachment> / PickupWidget → визуал у хоста
//!
//! **Weapon lifecycle:**
//! - Equip → Attachment ("RightHandSocket") + ItemState::Equipped
//! - Drop → удалить Attachment, ItemState::Falling, `WeaponThrown` impulse
//! - Swap → drop + equip + сброс item trace handles
//!
//! **Reload clip:**
//! - GrabClip / ReleaseClip notifies → HandAnchor + `Weapon::moving_clip`

use bevy::prelude::*;

pub mod events;
pub mod systems;

// Re-exports
pub use events::*;
pub use systems::*;

/// Equipment plugin (события)
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ItemOverlapChanged>()
            .add_event::<SelectIntent>()
            .add_event::<ItemPickupFinished>()
            .add_event::<WeaponThrown>();
    }
}
