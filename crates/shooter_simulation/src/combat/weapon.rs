//! Weapon компоненты и combat события
//!
//! Архитектура:
//! - Weapon entity: `Weapon` + `Item` + `ItemState` + `PickupWidget` + `WeaponSockets`
//! - Персонаж держит только handle (`EquippedWeapon`)
//! - Хост пишет world transform сокетов (`WeaponSockets`) каждый frame
//! - ECS пишет montage / sound / emitter события, хост их исполняет

use bevy::prelude::*;

use crate::animation::START_FIRE_SECTION;
use crate::item_system::{Item, ItemSounds};

/// Тип патронов (ключ в `AmmoInventory`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub enum AmmoType {
    NineMm,
    AssaultRifle,
}

/// Пресеты оружия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum WeaponType {
    SubmachineGun,
    AssaultRifle,
}

/// Ranged weapon state
///
/// Инвариант: `ammo <= magazine_capacity`
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Item, ItemSounds, WeaponSockets)]
pub struct Weapon {
    pub weapon_type: WeaponType,
    pub ammo_type: AmmoType,
    /// Патроны в магазине
    pub ammo: u32,
    pub magazine_capacity: u32,
    /// Section fire montage
    pub fire_section: String,
    /// Section reload montage (своя для каждого типа)
    pub reload_section: String,
    /// Bone магазина на weapon mesh
    pub clip_bone: String,
    /// Магазин сейчас в левой руке (reload анимация)
    pub moving_clip: bool,
}

impl Weapon {
    /// Полный магазин по пресету
    pub fn new(weapon_type: WeaponType) -> Self {
        match weapon_type {
            WeaponType::SubmachineGun => Self {
                weapon_type,
                ammo_type: AmmoType::NineMm,
                ammo: 30,
                magazine_capacity: 30,
                fire_section: START_FIRE_SECTION.into(),
                reload_section: "Reload SMG".into(),
                clip_bone: "smg_clip".into(),
                moving_clip: false,
            },
            WeaponType::AssaultRifle => Self {
                weapon_type,
                ammo_type: AmmoType::AssaultRifle,
                ammo: 30,
                magazine_capacity: 30,
                fire_section: START_FIRE_SECTION.into(),
                reload_section: "Reload AR".into(),
                clip_bone: "ar_clip".into(),
                moving_clip: false,
            },
        }
    }

    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo.min(self.magazine_capacity);
        self
    }

    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    pub fn clip_is_full(&self) -> bool {
        self.ammo >= self.magazine_capacity
    }

    /// Свободное место в магазине
    pub fn empty_space(&self) -> u32 {
        self.magazine_capacity.saturating_sub(self.ammo)
    }

    pub fn decrement_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }

    /// Зарядить патроны, возвращает сколько реально вошло
    pub fn reload_ammo(&mut self, amount: u32) -> u32 {
        let loaded = amount.min(self.empty_space());
        self.ammo += loaded;
        loaded
    }
}

/// World transforms сокетов оружия (пишет хост)
///
/// `None` → сокета/bone нет на mesh, соответствующий эффект пропускается.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WeaponSockets {
    /// "BarrelSocket" — откуда летит пуля и muzzle flash
    pub barrel: Option<Transform>,
    /// Bone магазина (для clip grab)
    pub clip_bone: Option<Transform>,
}

/// Fire button зажат (для auto fire)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct FireTrigger {
    pub held: bool,
}

/// Assets персонажа для стрельбы и перезарядки
///
/// `None` → asset не назначен, событие не отправляется (как пустой слот в редакторе).
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterAssets {
    pub fire_sound: Option<String>,
    pub muzzle_flash: Option<String>,
    pub impact_particles: Option<String>,
    pub beam_particles: Option<String>,
    pub hip_fire_montage: Option<String>,
    pub reload_montage: Option<String>,
}

impl CharacterAssets {
    /// Стандартный набор (все слоты заполнены)
    pub fn standard() -> Self {
        Self {
            fire_sound: Some("FireSound".into()),
            muzzle_flash: Some("MuzzleFlash".into()),
            impact_particles: Some("ImpactParticles".into()),
            beam_particles: Some("BeamParticles".into()),
            hip_fire_montage: Some("HipFireMontage".into()),
            reload_montage: Some("ReloadMontage".into()),
        }
    }
}

/// Event: fire button press/release (LMB)
#[derive(Event, Debug, Clone, Copy)]
pub struct FireIntent {
    pub entity: Entity,
    pub pressed: bool,
}

/// Event: reload button
#[derive(Event, Debug, Clone, Copy)]
pub struct ReloadIntent {
    pub entity: Entity,
}

/// Внутренний запрос выстрела (fire button или auto-fire reset)
#[derive(Event, Debug, Clone, Copy)]
pub struct FireWeaponRequest {
    pub entity: Entity,
}

/// Внутренний запрос перезарядки (пустой магазин после auto-fire reset)
#[derive(Event, Debug, Clone, Copy)]
pub struct ReloadWeaponRequest {
    pub entity: Entity,
}

/// Event: успешный выстрел (ECS → хост)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct WeaponFired {
    pub shooter: Entity,
    pub weapon: Entity,
    /// Патроны в магазине после выстрела
    pub ammo_left: u32,
    /// Точка попадания muzzle trace (`None` → луч ни во что не попал)
    pub beam_end: Option<Vec3>,
}
