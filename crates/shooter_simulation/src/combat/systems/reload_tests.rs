//! Tests for reload systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::animation::{AnimNotify, AnimNotifyKind, MontageCommand};
    use crate::combat::{AmmoInventory, AmmoType, CombatState, FireIntent, ReloadIntent, Weapon};
    use crate::components::EquippedWeapon;
    use crate::config::ShooterConfig;
    use crate::{advance_frame, create_stepped_app, spawn_shooter_character};

    const DT: f32 = 0.06;

    fn setup() -> (App, Entity, Entity) {
        let mut app = create_stepped_app(42);
        let config = app.world().resource::<ShooterConfig>().clone();
        let shooter = spawn_shooter_character(&mut app.world_mut().commands(), &config, Transform::default());
        app.world_mut().flush();

        let weapon = app.world().get::<EquippedWeapon>(shooter).unwrap().get().unwrap();
        (app, shooter, weapon)
    }

    fn state(app: &App, shooter: Entity) -> CombatState {
        *app.world().get::<CombatState>(shooter).unwrap()
    }

    fn finish_reloading(app: &mut App, entity: Entity) {
        app.world_mut().send_event(AnimNotify {
            entity,
            kind: AnimNotifyKind::FinishReloading,
        });
    }

    fn reload_montages(app: &App) -> Vec<MontageCommand> {
        app.world()
            .resource::<Events<MontageCommand>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    #[test]
    fn test_reload_moves_all_carried_into_empty_magazine() {
        let (mut app, shooter, weapon) = setup();
        app.world_mut().get_mut::<Weapon>(weapon).unwrap().ammo = 0;
        app.world_mut()
            .entity_mut(shooter)
            .insert(AmmoInventory::from_counts(&[(AmmoType::NineMm, 7)]));

        app.world_mut().send_event(ReloadIntent { entity: shooter });
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Reloading);
        let montages = reload_montages(&app);
        assert_eq!(montages.len(), 1);
        assert_eq!(montages[0].montage, "ReloadMontage");
        assert_eq!(montages[0].section, "Reload SMG");

        // Патроны переносятся только по notify
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 0);

        finish_reloading(&mut app, shooter);
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Unoccupied);
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 7);
        let inventory = app.world().get::<AmmoInventory>(shooter).unwrap();
        assert_eq!(inventory.carried(AmmoType::NineMm), 0);
    }

    #[test]
    fn test_reload_partial_magazine() {
        let (mut app, shooter, weapon) = setup();
        app.world_mut().get_mut::<Weapon>(weapon).unwrap().ammo = 12;

        app.world_mut().send_event(ReloadIntent { entity: shooter });
        advance_frame(&mut app, DT);
        finish_reloading(&mut app, shooter);
        advance_frame(&mut app, DT);

        // 85 в запасе, 18 свободно
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 30);
        let inventory = app.world().get::<AmmoInventory>(shooter).unwrap();
        assert_eq!(inventory.carried(AmmoType::NineMm), 67);
    }

    #[test]
    fn test_reload_rejected_when_full() {
        let (mut app, shooter, _) = setup();

        app.world_mut().send_event(ReloadIntent { entity: shooter });
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Unoccupied);
        assert!(reload_montages(&app).is_empty());
    }

    #[test]
    fn test_reload_rejected_without_carried_ammo() {
        let (mut app, shooter, weapon) = setup();
        app.world_mut().get_mut::<Weapon>(weapon).unwrap().ammo = 3;
        app.world_mut()
            .entity_mut(shooter)
            .insert(AmmoInventory::from_counts(&[(AmmoType::NineMm, 0)]));

        app.world_mut().send_event(ReloadIntent { entity: shooter });
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Unoccupied);
        assert!(reload_montages(&app).is_empty());
    }

    #[test]
    fn test_stray_finish_notify_is_ignored() {
        let (mut app, shooter, weapon) = setup();
        app.world_mut().get_mut::<Weapon>(weapon).unwrap().ammo = 10;

        finish_reloading(&mut app, shooter);
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Unoccupied);
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 10);
        let inventory = app.world().get::<AmmoInventory>(shooter).unwrap();
        assert_eq!(inventory.carried(AmmoType::NineMm), 85);
    }

    #[test]
    fn test_empty_magazine_auto_reloads() {
        let (mut app, shooter, weapon) = setup();
        app.world_mut().get_mut::<Weapon>(weapon).unwrap().ammo = 1;

        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: true,
        });
        advance_frame(&mut app, DT);
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 0);

        // Auto-fire reset через 0.1 → пустой магазин → reload
        advance_frame(&mut app, DT);
        advance_frame(&mut app, DT);
        assert_eq!(state(&app, shooter), CombatState::Reloading);

        finish_reloading(&mut app, shooter);
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Unoccupied);
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 30);
        let inventory = app.world().get::<AmmoInventory>(shooter).unwrap();
        assert_eq!(inventory.carried(AmmoType::NineMm), 55);
    }

    #[test]
    fn test_fire_during_reload_is_rejected() {
        let (mut app, shooter, weapon) = setup();
        app.world_mut().get_mut::<Weapon>(weapon).unwrap().ammo = 5;

        app.world_mut().send_event(ReloadIntent { entity: shooter });
        advance_frame(&mut app, DT);

        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: true,
        });
        advance_frame(&mut app, DT);

        assert_eq!(state(&app, shooter), CombatState::Reloading);
        assert_eq!(app.world().get::<Weapon>(weapon).unwrap().ammo, 5);
    }
}
