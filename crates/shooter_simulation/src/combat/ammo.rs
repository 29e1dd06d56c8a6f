//! Ammo inventory — запас патронов персонажа по типам
//!
//! Ключи фиксируются при spawn (9mm, AR), counts никогда не уходят в минус.
//! Перезарядка переносит `min(empty space, carried)` — сумма
//! (магазин + запас) сохраняется.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::combat::{AmmoType, Weapon};
use crate::config::ShooterConfig;

/// Запас патронов (ammo type → count)
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct AmmoInventory {
    carried: HashMap<AmmoType, u32>,
}

impl AmmoInventory {
    pub fn from_counts(counts: &[(AmmoType, u32)]) -> Self {
        Self {
            carried: counts.iter().copied().collect(),
        }
    }

    /// Стартовый запас из config
    pub fn starting(config: &ShooterConfig) -> Self {
        Self::from_counts(&[
            (AmmoType::NineMm, config.starting_9mm_ammo),
            (AmmoType::AssaultRifle, config.starting_ar_ammo),
        ])
    }

    /// Сколько патронов типа в запасе (0 если тип не заведен)
    pub fn carried(&self, ammo_type: AmmoType) -> u32 {
        self.carried.get(&ammo_type).copied().unwrap_or(0)
    }

    pub fn has_carried(&self, ammo_type: AmmoType) -> bool {
        self.carried(ammo_type) > 0
    }

    pub fn contains(&self, ammo_type: AmmoType) -> bool {
        self.carried.contains_key(&ammo_type)
    }

    /// Перенести патроны из запаса в магазин
    ///
    /// Тип не заведен → ничего не делает. Возвращает количество перенесенных.
    pub fn transfer_to_magazine(&mut self, weapon: &mut Weapon) -> u32 {
        let Some(carried) = self.carried.get_mut(&weapon.ammo_type) else {
            return 0;
        };

        let amount = weapon.empty_space().min(*carried);
        let loaded = weapon.reload_ammo(amount);
        *carried -= loaded;
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::WeaponType;

    #[test]
    fn test_starting_ammo() {
        let inventory = AmmoInventory::starting(&ShooterConfig::default());
        assert_eq!(inventory.carried(AmmoType::NineMm), 85);
        assert_eq!(inventory.carried(AmmoType::AssaultRifle), 240);
    }

    #[test]
    fn test_empty_magazine_takes_all_carried() {
        // 0/30 + 7 в запасе → 7/30, запас 0
        let mut inventory = AmmoInventory::from_counts(&[(AmmoType::NineMm, 7)]);
        let mut weapon = Weapon::new(WeaponType::SubmachineGun).with_ammo(0);

        let moved = inventory.transfer_to_magazine(&mut weapon);

        assert_eq!(moved, 7);
        assert_eq!(weapon.ammo, 7);
        assert_eq!(inventory.carried(AmmoType::NineMm), 0);
    }

    #[test]
    fn test_transfer_never_overfills() {
        let mut inventory = AmmoInventory::from_counts(&[(AmmoType::NineMm, 85)]);
        let mut weapon = Weapon::new(WeaponType::SubmachineGun).with_ammo(12);

        inventory.transfer_to_magazine(&mut weapon);

        assert_eq!(weapon.ammo, 30);
        assert_eq!(inventory.carried(AmmoType::NineMm), 67);
    }

    #[test]
    fn test_transfer_conserves_total() {
        for (in_mag, carried) in [(0, 0), (0, 100), (29, 1), (10, 5), (30, 40)] {
            let mut inventory = AmmoInventory::from_counts(&[(AmmoType::NineMm, carried)]);
            let mut weapon = Weapon::new(WeaponType::SubmachineGun).with_ammo(in_mag);

            inventory.transfer_to_magazine(&mut weapon);

            assert_eq!(weapon.ammo + inventory.carried(AmmoType::NineMm), in_mag + carried);
            assert!(weapon.ammo <= weapon.magazine_capacity);
        }
    }

    #[test]
    fn test_unknown_ammo_type_noop() {
        let mut inventory = AmmoInventory::from_counts(&[(AmmoType::NineMm, 50)]);
        let mut weapon = Weapon::new(WeaponType::AssaultRifle).with_ammo(0);

        assert_eq!(inventory.transfer_to_magazine(&mut weapon), 0);
        assert_eq!(weapon.ammo, 0);
        assert!(!inventory.contains(AmmoType::AssaultRifle));
    }
}
