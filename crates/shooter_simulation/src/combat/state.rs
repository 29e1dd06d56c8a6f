//! Combat state machine: состояние + guards для fire/reload
//!
//! Переходы:
//! - Unoccupied → FireTimerInProgress (выстрел) → Unoccupied (auto-fire timer)
//! - Unoccupied → Reloading (reload) → Unoccupied (FinishReloading notify)
//!
//! Единственный writer `CombatState` — combat системы.

use bevy::prelude::*;
use thiserror::Error;

use crate::combat::{AmmoInventory, Weapon};

/// Текущее combat состояние персонажа (ровно одно активно)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum CombatState {
    #[default]
    Unoccupied,
    FireTimerInProgress,
    Reloading,
    Equipping,
    Stunned,
}

/// Почему действие отклонено (наружу — просто "ничего не изменилось")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("no weapon equipped")]
    NoWeapon,

    #[error("combat state is {0:?}")]
    Busy(CombatState),

    #[error("magazine is empty")]
    NoAmmo,

    #[error("no carried ammo for the weapon's ammo type")]
    NoCarriedAmmo,

    #[error("magazine is already full")]
    MagazineFull,

    #[error("character has no hand anchor")]
    NoHandAnchor,
}

/// Fire guard: оружие → Unoccupied → патроны в магазине
pub fn check_fire(state: CombatState, weapon: Option<&Weapon>) -> Result<(), ActionRejected> {
    let weapon = weapon.ok_or(ActionRejected::NoWeapon)?;

    if state != CombatState::Unoccupied {
        return Err(ActionRejected::Busy(state));
    }

    if !weapon.has_ammo() {
        return Err(ActionRejected::NoAmmo);
    }

    Ok(())
}

/// Reload guard: Unoccupied → оружие → есть запас → магазин не полный
pub fn check_reload(
    state: CombatState,
    weapon: Option<&Weapon>,
    inventory: &AmmoInventory,
) -> Result<(), ActionRejected> {
    if state != CombatState::Unoccupied {
        return Err(ActionRejected::Busy(state));
    }

    let weapon = weapon.ok_or(ActionRejected::NoWeapon)?;

    if !inventory.has_carried(weapon.ammo_type) {
        return Err(ActionRejected::NoCarriedAmmo);
    }

    if weapon.clip_is_full() {
        return Err(ActionRejected::MagazineFull);
    }

    Ok(())
}
