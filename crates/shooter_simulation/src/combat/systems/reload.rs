//! Reload systems: reload button / пустой магазин → Reloading → FinishReloading notify

use bevy::prelude::*;

use crate::animation::{AnimNotify, AnimNotifyKind, MontageCommand};
use crate::combat::{
    check_reload, AmmoInventory, CharacterAssets, CombatState, ReloadIntent, ReloadWeaponRequest, Weapon,
};
use crate::components::EquippedWeapon;

/// System: начать перезарядку
///
/// Источники: reload button (`ReloadIntent`) и auto-fire reset с пустым
/// магазином (`ReloadWeaponRequest`).
pub fn reload_weapon(
    mut intents: EventReader<ReloadIntent>,
    mut requests: EventReader<ReloadWeaponRequest>,
    mut characters: Query<(&mut CombatState, &EquippedWeapon, &AmmoInventory, &CharacterAssets)>,
    weapons: Query<&Weapon>,
    mut montages: EventWriter<MontageCommand>,
) {
    let entities = intents
        .read()
        .map(|intent| intent.entity)
        .chain(requests.read().map(|request| request.entity));

    for entity in entities {
        let Ok((mut state, equipped, inventory, assets)) = characters.get_mut(entity) else {
            continue;
        };

        let weapon = equipped.get().and_then(|weapon| weapons.get(weapon).ok());

        if let Err(reason) = check_reload(*state, weapon, inventory) {
            crate::logger::log(&format!("Reload rejected for {:?}: {}", entity, reason));
            continue;
        }
        let Some(weapon) = weapon else {
            continue;
        };

        *state = CombatState::Reloading;

        if let Some(montage) = &assets.reload_montage {
            montages.write(MontageCommand {
                entity,
                montage: montage.clone(),
                section: weapon.reload_section.clone(),
            });
        }

        crate::logger::log(&format!(
            "{:?} reloading ({}/{}, carried {})",
            entity,
            weapon.ammo,
            weapon.magazine_capacity,
            inventory.carried(weapon.ammo_type)
        ));
    }
}

/// System: FinishReloading notify → перенос патронов + Unoccupied
///
/// Notify вне Reloading игнорируется (устаревший notify от прерванного montage).
pub fn finish_reloading(
    mut notifies: EventReader<AnimNotify>,
    mut characters: Query<(&mut CombatState, &EquippedWeapon, &mut AmmoInventory)>,
    mut weapons: Query<&mut Weapon>,
) {
    for notify in notifies.read() {
        if notify.kind != AnimNotifyKind::FinishReloading {
            continue;
        }

        let Ok((mut state, equipped, mut inventory)) = characters.get_mut(notify.entity) else {
            continue;
        };

        if *state != CombatState::Reloading {
            continue;
        }

        *state = CombatState::Unoccupied;

        let Some(weapon_entity) = equipped.get() else {
            continue;
        };
        let Ok(mut weapon) = weapons.get_mut(weapon_entity) else {
            continue;
        };

        let moved = inventory.transfer_to_magazine(&mut weapon);

        crate::logger::log(&format!(
            "{:?} finished reloading: +{} → {}/{}",
            notify.entity, moved, weapon.ammo, weapon.magazine_capacity
        ));
    }
}
