//! Equipment system implementations
//!
//! # Systems
//!
//! **Item trace:**
//! - `process_item_overlaps` — overlap counter
//! - `trace_for_items` — pickup widget под crosshair
//!
//! **Pickup:**
//! - `process_select_intents` — старт interp к камере
//! - `interp_item_pickup` — item летит к camera interp location
//! - `get_pickup_item` — equip sound + swap
//!
//! **Weapon lifecycle:**
//! - `equip_weapon` / `drop_weapon` — helpers (attach, detach + throw)
//! - `tick_thrown_weapons` — Falling → Pickup
//! - `handle_clip_notifies` — магазин в левую руку и обратно

use bevy::prelude::*;
use rand::Rng;

use crate::{
    animation::{AnimNotify, AnimNotifyKind},
    combat::{trace_under_crosshairs, ActionRejected, TraceProvider, Weapon, WeaponSockets},
    components::{Attachment, EquippedWeapon, HandAnchor, ItemTrace, LEFT_HAND_SOCKET},
    config::ShooterConfig,
    effects::PlaySound,
    equipment::events::*,
    item_system::{set_item_state, Item, ItemInterp, ItemSounds, ItemState, PickupWidget, ThrownWeapon},
    log, log_error,
    shared::{approach, ease_out_cubic, CameraRig},
    DeterministicRng,
};

/// Наклон throw направления вокруг forward оружия (градусы)
pub const THROW_TILT_DEGREES: f32 = -20.0;

/// Максимальный случайный поворот throw направления вокруг вертикали (градусы)
pub const THROW_MAX_SPREAD_DEGREES: f32 = 30.0;

// ============================================================================
// Helpers
// ============================================================================

/// Throw impulse
///
/// Оружие выравнивается по yaw (pitch/roll сбрасываются), затем right vector
/// наклоняется на -20° вокруг forward и поворачивается на `spread_degrees`
/// вокруг вертикали.
///
/// Возвращает (новая rotation оружия, impulse).
pub fn throw_impulse(rotation: Quat, spread_degrees: f32, strength: f32) -> (Quat, Vec3) {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    let flat = Quat::from_rotation_y(yaw);

    let forward = flat * Vec3::NEG_Z;
    let right = flat * Vec3::X;

    let tilted = Quat::from_axis_angle(forward, THROW_TILT_DEGREES.to_radians()) * right;
    let direction = Quat::from_axis_angle(Vec3::Y, spread_degrees.to_radians()) * tilted;

    (flat, direction * strength)
}

/// Equip: attach к "RightHandSocket", item state Equipped
pub fn equip_weapon(
    commands: &mut Commands,
    character: Entity,
    equipped: &mut EquippedWeapon,
    weapon: Entity,
    state: &mut ItemState,
    widget: &mut PickupWidget,
) {
    commands
        .entity(weapon)
        .insert(Attachment::right_hand(character))
        .remove::<ThrownWeapon>();

    set_item_state(state, widget, ItemState::Equipped);
    equipped.0 = Some(weapon);
}

/// Drop: detach (world transform сохраняется), Falling, throw
///
/// Возвращает impulse для physics provider.
pub fn drop_weapon(
    commands: &mut Commands,
    weapon: Entity,
    state: &mut ItemState,
    widget: &mut PickupWidget,
    transform: &mut Transform,
    spread_degrees: f32,
    config: &ShooterConfig,
) -> Vec3 {
    commands
        .entity(weapon)
        .remove::<Attachment>()
        .insert(ThrownWeapon::new(config.throw_duration));

    set_item_state(state, widget, ItemState::Falling);

    let (rotation, impulse) = throw_impulse(transform.rotation, spread_degrees, config.throw_impulse);
    transform.rotation = rotation;
    impulse
}

fn hide_widget(widgets: &mut Query<(&mut PickupWidget, &ItemState)>, item: Entity) {
    if let Ok((mut widget, _)) = widgets.get_mut(item) {
        widget.visible = false;
    }
}

// ============================================================================
// Item trace
// ============================================================================

/// Process overlap begin/end (pickup sphere предмета)
pub fn process_item_overlaps(
    mut events: EventReader<ItemOverlapChanged>,
    mut characters: Query<&mut ItemTrace>,
) {
    for event in events.read() {
        let Ok(mut trace) = characters.get_mut(event.entity) else {
            log_error(&format!("Entity {:?} missing ItemTrace", event.entity));
            continue;
        };

        trace.increment_overlapped_item_count(event.amount());
    }
}

/// Trace под crosshair → pickup widget
///
/// Пока есть overlap: widget traced предмета показан, widget прошлого
/// (если hit сменился) спрятан. Overlap закончился → прячем последний.
pub fn trace_for_items(
    mut characters: Query<(&mut ItemTrace, &CameraRig)>,
    mut widgets: Query<(&mut PickupWidget, &ItemState)>,
    tracer: Res<TraceProvider>,
    config: Res<ShooterConfig>,
) {
    for (mut trace, camera) in characters.iter_mut() {
        if !trace.should_trace {
            if let Some(last) = trace.hit_item_last_frame {
                hide_widget(&mut widgets, last);
            }
            trace.clear();
            continue;
        }

        let hit_entity = trace_under_crosshairs(tracer.tracer(), camera, &config)
            .and_then(|crosshair| crosshair.hit)
            .and_then(|hit| hit.entity);

        // Только лежащие предметы
        trace.hit_item = hit_entity.filter(|entity| {
            widgets
                .get(*entity)
                .is_ok_and(|(_, state)| state.allows_pickup_widget())
        });

        if let Some(item) = trace.hit_item {
            if let Ok((mut widget, _)) = widgets.get_mut(item) {
                widget.visible = true;
            }
        }

        if let Some(last) = trace.hit_item_last_frame {
            if trace.hit_item != Some(last) {
                hide_widget(&mut widgets, last);
            }
        }

        trace.hit_item_last_frame = trace.hit_item;
    }
}

// ============================================================================
// Pickup
// ============================================================================

/// Select → traced предмет летит к камере
pub fn process_select_intents(
    mut commands: Commands,
    mut events: EventReader<SelectIntent>,
    characters: Query<&ItemTrace>,
    mut items: Query<(&mut ItemState, &mut PickupWidget, &Transform, Option<&ItemSounds>), With<Item>>,
    mut sound_events: EventWriter<PlaySound>,
) {
    for intent in events.read() {
        let Ok(trace) = characters.get(intent.entity) else {
            continue;
        };
        let Some(item) = trace.hit_item else {
            continue;
        };
        let Ok((mut state, mut widget, transform, sounds)) = items.get_mut(item) else {
            continue;
        };

        if *state != ItemState::Pickup {
            continue;
        }

        commands
            .entity(item)
            .insert(ItemInterp::new(intent.entity, transform.translation));
        set_item_state(&mut state, &mut widget, ItemState::EquipInterping);

        if let Some(sound) = sounds.and_then(|sounds| sounds.pickup_sound.clone()) {
            sound_events.write(PlaySound::at_2d(sound));
        }

        log(&format!("{:?} picking up {:?}", intent.entity, item));
    }
}

/// Item interp к camera interp location
///
/// Горизонталь — approach (rate 30), вертикаль — ease-out cubic от стартовой
/// высоты. По окончании `item_interp_duration` → `ItemPickupFinished`.
pub fn interp_item_pickup(
    mut commands: Commands,
    mut items: Query<(Entity, &mut ItemInterp, &mut Transform, &mut ItemState)>,
    cameras: Query<&CameraRig>,
    config: Res<ShooterConfig>,
    time: Res<Time>,
    mut finished: EventWriter<ItemPickupFinished>,
) {
    let delta = time.delta_secs();

    for (item, mut interp, mut transform, mut state) in items.iter_mut() {
        interp.elapsed += delta;

        let Ok(camera) = cameras.get(interp.character) else {
            // Персонаж пропал — предмет снова лежит
            commands.entity(item).remove::<ItemInterp>();
            *state = ItemState::Pickup;
            continue;
        };

        let target = camera.interp_location(config.camera_interp_distance, config.camera_interp_elevation);
        let progress = if config.item_interp_duration > 0.0 {
            (interp.elapsed / config.item_interp_duration).min(1.0)
        } else {
            1.0
        };

        let current = transform.translation;
        transform.translation = Vec3::new(
            approach(current.x, target.x, delta, config.item_interp_horizontal_speed),
            interp.start.y + ease_out_cubic(progress) * (target.y - interp.start.y),
            approach(current.z, target.z, delta, config.item_interp_horizontal_speed),
        );

        if progress >= 1.0 {
            commands.entity(item).remove::<ItemInterp>();
            finished.write(ItemPickupFinished {
                character: interp.character,
                item,
            });
        }
    }
}

/// Персонаж получает предмет: equip sound, оружие → swap
///
/// Swap: drop текущего (throw) → equip нового → сброс trace handles.
pub fn get_pickup_item(
    mut commands: Commands,
    mut events: EventReader<ItemPickupFinished>,
    mut characters: Query<(&mut EquippedWeapon, &mut ItemTrace)>,
    mut items: Query<
        (&mut ItemState, &mut PickupWidget, &mut Transform, Option<&ItemSounds>, Has<Weapon>),
        With<Item>,
    >,
    mut rng: ResMut<DeterministicRng>,
    config: Res<ShooterConfig>,
    mut sound_events: EventWriter<PlaySound>,
    mut thrown_events: EventWriter<WeaponThrown>,
) {
    for event in events.read() {
        let Ok((mut equipped, mut trace)) = characters.get_mut(event.character) else {
            continue;
        };
        let Ok((_, _, _, sounds, is_weapon)) = items.get(event.item) else {
            continue;
        };

        if let Some(sound) = sounds.and_then(|sounds| sounds.equip_sound.clone()) {
            sound_events.write(PlaySound::at_2d(sound));
        }

        if !is_weapon {
            if let Ok((mut state, mut widget, ..)) = items.get_mut(event.item) {
                set_item_state(&mut state, &mut widget, ItemState::PickedUp);
            }
            continue;
        }

        // Drop текущего оружия
        if let Some(old) = equipped.get().filter(|old| *old != event.item) {
            if let Ok((mut state, mut widget, mut transform, ..)) = items.get_mut(old) {
                let spread = rng.rng.gen_range(0.0..THROW_MAX_SPREAD_DEGREES);
                let impulse = drop_weapon(
                    &mut commands,
                    old,
                    &mut state,
                    &mut widget,
                    &mut transform,
                    spread,
                    &config,
                );
                thrown_events.write(WeaponThrown { weapon: old, impulse });
            }
        }

        if let Ok((mut state, mut widget, ..)) = items.get_mut(event.item) {
            equip_weapon(
                &mut commands,
                event.character,
                &mut equipped,
                event.item,
                &mut state,
                &mut widget,
            );
        }

        trace.clear();

        log(&format!("{:?} equipped {:?}", event.character, event.item));
    }
}

// ============================================================================
// Weapon lifecycle
// ============================================================================

/// Throw timer: Falling → Pickup
pub fn tick_thrown_weapons(
    mut commands: Commands,
    mut thrown: Query<(Entity, &mut ThrownWeapon, &mut ItemState)>,
    time: Res<Time>,
) {
    for (weapon, mut throw, mut state) in thrown.iter_mut() {
        throw.timer.tick(time.delta());
        if !throw.timer.finished() {
            continue;
        }

        commands.entity(weapon).remove::<ThrownWeapon>();
        if *state == ItemState::Falling {
            *state = ItemState::Pickup;
        }
    }
}

/// Clip grab / release notifies из reload montage
///
/// Grab: hand anchor → "hand_l" в world transform clip bone, `moving_clip = true`.
/// Release: `moving_clip = false`.
pub fn handle_clip_notifies(
    mut notifies: EventReader<AnimNotify>,
    mut characters: Query<(&EquippedWeapon, Option<&mut HandAnchor>)>,
    mut weapons: Query<(&mut Weapon, &WeaponSockets)>,
) {
    for notify in notifies.read() {
        let grab = match notify.kind {
            AnimNotifyKind::GrabClip => true,
            AnimNotifyKind::ReleaseClip => false,
            AnimNotifyKind::FinishReloading => continue,
        };

        let Ok((equipped, anchor)) = characters.get_mut(notify.entity) else {
            continue;
        };
        let weapon_data = match equipped.get() {
            Some(weapon) => weapons.get_mut(weapon).ok(),
            None => None,
        };
        let Some((mut weapon, sockets)) = weapon_data else {
            log(&format!("Clip notify for {:?}: {}", notify.entity, ActionRejected::NoWeapon));
            continue;
        };

        if !grab {
            weapon.moving_clip = false;
            continue;
        }

        let Some(mut anchor) = anchor else {
            log(&format!("Clip grab for {:?}: {}", notify.entity, ActionRejected::NoHandAnchor));
            continue;
        };
        let Some(clip_transform) = sockets.clip_bone else {
            continue;
        };

        anchor.attach(LEFT_HAND_SOCKET, clip_transform);
        weapon.moving_clip = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_impulse_tilts_right_vector_up() {
        let (rotation, impulse) = throw_impulse(Quat::IDENTITY, 0.0, 20_000.0);

        assert!(rotation.angle_between(Quat::IDENTITY) < 1e-5);
        assert!((impulse.length() - 20_000.0).abs() < 1e-1);
        // Вправо (+X) и немного вверх
        assert!(impulse.x > 0.0);
        assert!(impulse.y > 0.0);
        let tilt = impulse.y.atan2(impulse.x).to_degrees();
        assert!((tilt - 20.0).abs() < 1e-3, "tilt = {}", tilt);
    }

    #[test]
    fn test_throw_impulse_flattens_pitch() {
        let pitched = Quat::from_rotation_y(0.5) * Quat::from_rotation_x(0.7);
        let (rotation, _) = throw_impulse(pitched, 0.0, 1.0);

        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.5).abs() < 1e-4);
        assert!(pitch.abs() < 1e-5);
        assert!(roll.abs() < 1e-5);
    }

    #[test]
    fn test_throw_spread_rotates_about_vertical() {
        let (_, straight) = throw_impulse(Quat::IDENTITY, 0.0, 1.0);
        let (_, spread) = throw_impulse(Quat::IDENTITY, 30.0, 1.0);

        // Вертикальная компонента не меняется
        assert!((straight.y - spread.y).abs() < 1e-5);
        let horizontal_angle = Vec2::new(straight.x, straight.z)
            .angle_to(Vec2::new(spread.x, spread.z))
            .to_degrees()
            .abs();
        assert!((horizontal_angle - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_overlap_amount() {
        let event = ItemOverlapChanged {
            entity: Entity::from_raw(1),
            item: Entity::from_raw(2),
            overlapping: true,
        };
        assert_eq!(event.amount(), 1);
        assert_eq!(ItemOverlapChanged { overlapping: false, ..event }.amount(), -1);
    }
}
