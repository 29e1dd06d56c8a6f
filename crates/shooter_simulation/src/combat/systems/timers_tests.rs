//! Tests for combat timers (auto-fire reset).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{
        auto_fire_follow_up, AutoFireFollowUp, CombatState, CombatTimers, FireIntent, Weapon, WeaponType,
    };
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

    fn ammo(app: &App, weapon: Entity) -> u32 {
        app.world().get::<Weapon>(weapon).unwrap().ammo
    }

    #[test]
    fn test_follow_up_table() {
        let loaded = Weapon::new(WeaponType::SubmachineGun);
        let empty = Weapon::new(WeaponType::SubmachineGun).with_ammo(0);

        assert_eq!(auto_fire_follow_up(Some(&loaded), true), AutoFireFollowUp::Fire);
        assert_eq!(auto_fire_follow_up(Some(&loaded), false), AutoFireFollowUp::None);
        assert_eq!(auto_fire_follow_up(Some(&empty), true), AutoFireFollowUp::Reload);
        assert_eq!(auto_fire_follow_up(Some(&empty), false), AutoFireFollowUp::Reload);
        // Без оружия — reload (дальше его отклонит guard)
        assert_eq!(auto_fire_follow_up(None, true), AutoFireFollowUp::Reload);
    }

    #[test]
    fn test_start_timers() {
        let mut timers = CombatTimers::default();
        assert!(timers.auto_fire.is_none());

        timers.start_auto_fire(0.1);
        timers.start_crosshair_shot(0.05);

        assert!((timers.auto_fire.as_ref().unwrap().duration().as_secs_f32() - 0.1).abs() < 1e-6);
        assert!((timers.crosshair_shot.as_ref().unwrap().duration().as_secs_f32() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_held_trigger_fires_every_interval() {
        let (mut app, shooter, weapon) = setup();

        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: true,
        });
        advance_frame(&mut app, DT);
        assert_eq!(ammo(&app, weapon), 29);

        // 0.06 — таймер еще идет
        advance_frame(&mut app, DT);
        assert_eq!(ammo(&app, weapon), 29);

        // 0.12 — reset + следующий выстрел в том же frame
        advance_frame(&mut app, DT);
        assert_eq!(ammo(&app, weapon), 28);
        assert_eq!(
            *app.world().get::<CombatState>(shooter).unwrap(),
            CombatState::FireTimerInProgress
        );

        for _ in 0..4 {
            advance_frame(&mut app, DT);
        }
        assert_eq!(ammo(&app, weapon), 26);
    }

    #[test]
    fn test_release_stops_auto_fire() {
        let (mut app, shooter, weapon) = setup();

        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: true,
        });
        advance_frame(&mut app, DT);

        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: false,
        });
        for _ in 0..5 {
            advance_frame(&mut app, DT);
        }

        assert_eq!(ammo(&app, weapon), 29);
        assert_eq!(*app.world().get::<CombatState>(shooter).unwrap(), CombatState::Unoccupied);
        assert!(app.world().get::<CombatTimers>(shooter).unwrap().auto_fire.is_none());
    }

    #[test]
    fn test_reset_keeps_stunned_state() {
        let (mut app, shooter, _) = setup();

        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: true,
        });
        advance_frame(&mut app, DT);
        app.world_mut().send_event(FireIntent {
            entity: shooter,
            pressed: false,
        });

        *app.world_mut().get_mut::<CombatState>(shooter).unwrap() = CombatState::Stunned;
        advance_frame(&mut app, DT);
        advance_frame(&mut app, DT);

        assert_eq!(*app.world().get::<CombatState>(shooter).unwrap(), CombatState::Stunned);
    }
}
