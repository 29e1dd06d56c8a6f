//! Fire systems: fire button → fire request → выстрел

use bevy::prelude::*;

use crate::animation::MontageCommand;
use crate::combat::{
    beam_end_location, check_fire, CharacterAssets, CombatState, CombatTimers, FireIntent,
    FireTrigger, FireWeaponRequest, TraceProvider, Weapon, WeaponFired, WeaponSockets,
};
use crate::components::EquippedWeapon;
use crate::config::ShooterConfig;
use crate::crosshair::CrosshairSpread;
use crate::effects::{PlaySound, SpawnEmitter};
use crate::shared::CameraRig;

/// System: fire button press/release
///
/// Press → trigger held + fire request, release → только trigger.
pub fn process_fire_intents(
    mut events: EventReader<FireIntent>,
    mut characters: Query<&mut FireTrigger>,
    mut fire_requests: EventWriter<FireWeaponRequest>,
) {
    for intent in events.read() {
        let Ok(mut trigger) = characters.get_mut(intent.entity) else {
            crate::logger::log_error(&format!("FireIntent: entity {:?} has no FireTrigger", intent.entity));
            continue;
        };

        trigger.held = intent.pressed;

        if intent.pressed {
            fire_requests.write(FireWeaponRequest {
                entity: intent.entity,
            });
        }
    }
}

/// System: выстрел
///
/// Guard (оружие → Unoccupied → патроны), затем:
/// 1. fire sound
/// 2. bullet: muzzle flash + beam trace + impact/beam эффекты
/// 3. hip fire montage ("StartFire") + crosshair shot window
/// 4. ammo − 1
/// 5. FireTimerInProgress + auto-fire timer
pub fn fire_weapon(
    mut requests: EventReader<FireWeaponRequest>,
    mut characters: Query<(
        &mut CombatState,
        &mut CombatTimers,
        &mut CrosshairSpread,
        &EquippedWeapon,
        &CameraRig,
        &CharacterAssets,
    )>,
    mut weapons: Query<(&mut Weapon, Option<&WeaponSockets>)>,
    tracer: Res<TraceProvider>,
    config: Res<ShooterConfig>,
    mut sounds: EventWriter<PlaySound>,
    mut emitters: EventWriter<SpawnEmitter>,
    mut montages: EventWriter<MontageCommand>,
    mut fired_events: EventWriter<WeaponFired>,
) {
    for request in requests.read() {
        let shooter = request.entity;
        let Ok((mut state, mut timers, mut spread, equipped, camera, assets)) = characters.get_mut(shooter) else {
            continue;
        };

        let weapon_entity = equipped.get();
        let weapon_data = match weapon_entity {
            Some(entity) => weapons.get_mut(entity).ok(),
            None => None,
        };

        let guard = check_fire(*state, weapon_data.as_ref().map(|(weapon, _)| &**weapon));
        if let Err(reason) = guard {
            crate::logger::log(&format!("Fire rejected for {:?}: {}", shooter, reason));
            continue;
        }

        let (Some(weapon_entity), Some((mut weapon, sockets))) = (weapon_entity, weapon_data) else {
            continue;
        };

        if let Some(sound) = &assets.fire_sound {
            sounds.write(PlaySound::at_2d(sound.clone()));
        }

        // Bullet — только если у оружия есть BarrelSocket
        let mut beam_end = None;
        if let Some(barrel) = sockets.and_then(|sockets| sockets.barrel) {
            if let Some(flash) = &assets.muzzle_flash {
                emitters.write(SpawnEmitter::at(flash.clone(), barrel));
            }

            let beam = beam_end_location(tracer.tracer(), camera, barrel.translation, &config);
            if beam.found {
                beam_end = Some(beam.location);

                if let Some(impact) = &assets.impact_particles {
                    emitters.write(SpawnEmitter::at(impact.clone(), Transform::from_translation(beam.location)));
                }
                if let Some(beam_particles) = &assets.beam_particles {
                    emitters.write(SpawnEmitter {
                        effect: beam_particles.clone(),
                        transform: barrel,
                        beam_target: Some(beam.location),
                    });
                }
            }
        }

        if let Some(montage) = &assets.hip_fire_montage {
            montages.write(MontageCommand {
                entity: shooter,
                montage: montage.clone(),
                section: weapon.fire_section.clone(),
            });
        }
        spread.start_bullet_fire();
        timers.start_crosshair_shot(config.shoot_time_duration);

        weapon.decrement_ammo();

        *state = CombatState::FireTimerInProgress;
        timers.start_auto_fire(config.automatic_fire_rate);

        fired_events.write(WeaponFired {
            shooter,
            weapon: weapon_entity,
            ammo_left: weapon.ammo,
            beam_end,
        });

        crate::logger::log(&format!(
            "{:?} fired {:?} ({} left), beam end {:?}",
            shooter, weapon_entity, weapon.ammo, beam_end
        ));
    }
}
