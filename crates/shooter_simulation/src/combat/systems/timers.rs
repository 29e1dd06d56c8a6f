//! Combat timers: auto-fire reset + crosshair shot window
//!
//! Timer callbacks исполняются inline в начале следующих frames
//! (первые системы в chain), никакого отдельного timer manager.

use bevy::prelude::*;

use crate::combat::{CombatState, FireTrigger, FireWeaponRequest, ReloadWeaponRequest, Weapon};
use crate::components::EquippedWeapon;
use crate::crosshair::CrosshairSpread;

/// One-shot таймеры персонажа (`None` → не запущен)
#[derive(Component, Debug, Clone, Default)]
pub struct CombatTimers {
    /// FireTimerInProgress → Unoccupied
    pub auto_fire: Option<Timer>,
    /// Закрывает окно `firing_bullet` для crosshair
    pub crosshair_shot: Option<Timer>,
}

impl CombatTimers {
    pub fn start_auto_fire(&mut self, seconds: f32) {
        self.auto_fire = Some(Timer::from_seconds(seconds, TimerMode::Once));
    }

    pub fn start_crosshair_shot(&mut self, seconds: f32) {
        self.crosshair_shot = Some(Timer::from_seconds(seconds, TimerMode::Once));
    }
}

/// Что сделать после auto-fire reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoFireFollowUp {
    None,
    Fire,
    Reload,
}

/// Auto-fire reset: патроны есть + кнопка зажата → fire, магазин пуст → reload
pub fn auto_fire_follow_up(weapon: Option<&Weapon>, trigger_held: bool) -> AutoFireFollowUp {
    let has_ammo = weapon.is_some_and(Weapon::has_ammo);

    if !has_ammo {
        AutoFireFollowUp::Reload
    } else if trigger_held {
        AutoFireFollowUp::Fire
    } else {
        AutoFireFollowUp::None
    }
}

/// Tick timer, `true` → сработал (и снят)
fn tick_once(slot: &mut Option<Timer>, delta: std::time::Duration) -> bool {
    let Some(timer) = slot.as_mut() else {
        return false;
    };

    timer.tick(delta);
    if timer.finished() {
        *slot = None;
        return true;
    }
    false
}

/// System: tick combat timers
pub fn tick_combat_timers(
    mut characters: Query<(
        Entity,
        &mut CombatTimers,
        &mut CombatState,
        &mut CrosshairSpread,
        &FireTrigger,
        &EquippedWeapon,
    )>,
    weapons: Query<&Weapon>,
    mut fire_requests: EventWriter<FireWeaponRequest>,
    mut reload_requests: EventWriter<ReloadWeaponRequest>,
    time: Res<Time>,
) {
    let delta = time.delta();

    for (entity, mut timers, mut state, mut spread, trigger, equipped) in characters.iter_mut() {
        if tick_once(&mut timers.crosshair_shot, delta) {
            spread.finish_bullet_fire();
        }

        if !tick_once(&mut timers.auto_fire, delta) {
            continue;
        }

        // Stunned / Equipping во время таймера не перетираем
        if *state == CombatState::FireTimerInProgress {
            *state = CombatState::Unoccupied;
        }

        let weapon = equipped.get().and_then(|weapon| weapons.get(weapon).ok());
        match auto_fire_follow_up(weapon, trigger.held) {
            AutoFireFollowUp::Fire => {
                fire_requests.write(FireWeaponRequest { entity });
            }
            AutoFireFollowUp::Reload => {
                reload_requests.write(ReloadWeaponRequest { entity });
            }
            AutoFireFollowUp::None => {}
        }
    }
}
