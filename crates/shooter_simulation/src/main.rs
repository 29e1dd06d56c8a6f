//! Headless симуляция персонажа-стрелка
//!
//! Спавнит персонажа с SMG, зажимает fire до пустого магазина,
//! затем доигрывает reload (FinishReloading notify вместо анимации).

use bevy::prelude::*;
use shooter_simulation::*;

fn main() {
    let seed = 42;
    println!("Starting shooter headless simulation (seed: {})", seed);

    let mut app = create_stepped_app(seed);

    let config = app.world().resource::<ShooterConfig>().clone();
    let shooter = spawn_shooter_character(&mut app.world_mut().commands(), &config, Transform::default());
    app.world_mut().flush();

    app.world_mut().send_event(FireIntent {
        entity: shooter,
        pressed: true,
    });

    // 60 FPS, 3 секунды
    for tick in 0..180 {
        advance_frame(&mut app, 1.0 / 60.0);

        let Some(state) = app.world().get::<CombatState>(shooter).copied() else {
            eprintln!("Shooter {:?} despawned", shooter);
            break;
        };

        // Пустой магазин → auto-fire reset запросил reload, доигрываем montage
        if state == CombatState::Reloading {
            app.world_mut().send_event(FireIntent {
                entity: shooter,
                pressed: false,
            });
            app.world_mut().send_event(AnimNotify {
                entity: shooter,
                kind: AnimNotifyKind::FinishReloading,
            });
        }

        if tick % 30 == 0 {
            let weapon = app
                .world()
                .get::<EquippedWeapon>(shooter)
                .and_then(|equipped| equipped.get())
                .and_then(|weapon| app.world().get::<Weapon>(weapon));
            let ammo = weapon.map(|weapon| weapon.ammo).unwrap_or(0);
            let spread = app
                .world()
                .get::<CrosshairSpread>(shooter)
                .map(|spread| spread.multiplier)
                .unwrap_or(0.0);

            println!("Tick {}: {:?}, ammo {}, spread {:.2}", tick, state, ammo, spread);
        }
    }

    println!("Simulation complete!");
}
