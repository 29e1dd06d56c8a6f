//! Item System — предметы в мире (подбираемое оружие)
//!
//! # Архитектура
//!
//! **Item** entity (оружие на земле или в руках):
//! - `Item` — имя для HUD
//! - `ItemState` — lifecycle (Pickup → EquipInterping → Equipped → Falling → Pickup)
//! - `PickupWidget` — "нажми E" prompt, видимость пишет ECS, рендерит хост
//! - `ItemSounds` — pickup / equip звуки
//!
//! **Transient компоненты:**
//! - `ItemInterp` — item летит к камере после Select (0.7 сек)
//! - `ThrownWeapon` — выброшенное оружие падает (0.7 сек), потом снова Pickup
//!
//! # Lifecycle
//!
//! ```text
//! Pickup ──Select──▶ EquipInterping ──interp done──▶ Equipped
//!   ▲                                                   │
//!   └──── throw timer ◀── Falling ◀──── drop (swap) ────┘
//! ```

use bevy::prelude::*;

/// Предмет в мире
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(ItemState, PickupWidget, Transform)]
pub struct Item {
    pub name: String,
}

impl Default for Item {
    fn default() -> Self {
        Self::new("Item")
    }
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lifecycle state предмета
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum ItemState {
    /// Лежит в мире, можно подобрать
    #[default]
    Pickup,
    /// Летит к камере после Select
    EquipInterping,
    /// В инвентаре (не в руках)
    PickedUp,
    /// В руке персонажа
    Equipped,
    /// Выброшен, падает
    Falling,
}

impl ItemState {
    /// Pickup prompt допустим только для лежащего предмета
    pub fn allows_pickup_widget(self) -> bool {
        self == ItemState::Pickup
    }
}

/// Pickup prompt над предметом
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PickupWidget {
    pub visible: bool,
}

/// Сменить state предмета (prompt прячется вне Pickup)
pub fn set_item_state(state: &mut ItemState, widget: &mut PickupWidget, next: ItemState) {
    *state = next;
    if !next.allows_pickup_widget() {
        widget.visible = false;
    }
}

/// Звуки предмета (`None` → звук не назначен)
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ItemSounds {
    pub pickup_sound: Option<String>,
    pub equip_sound: Option<String>,
}

impl ItemSounds {
    pub fn standard() -> Self {
        Self {
            pickup_sound: Some("PickupSound".into()),
            equip_sound: Some("EquipSound".into()),
        }
    }
}

/// Item летит к camera interp location персонажа
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ItemInterp {
    /// Кто подбирает
    pub character: Entity,
    /// Позиция в момент Select
    pub start: Vec3,
    /// Секунды с начала interp
    pub elapsed: f32,
}

impl ItemInterp {
    pub fn new(character: Entity, start: Vec3) -> Self {
        Self {
            character,
            start,
            elapsed: 0.0,
        }
    }
}

/// Выброшенное оружие (таймер падения)
#[derive(Component, Debug, Clone)]
pub struct ThrownWeapon {
    pub timer: Timer,
}

impl ThrownWeapon {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
        }
    }
}
