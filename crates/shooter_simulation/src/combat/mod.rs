//! Combat domain — стрельба, перезарядка, патроны
//!
//! ECS ответственность:
//! - CombatState (единственный writer — combat системы)
//! - Weapon ammo + AmmoInventory (сумма сохраняется при reload)
//! - Fire / reload guards (`ActionRejected`)
//! - Bullet trace через `TraceProvider` (collision у хоста)
//!
//! Хост ответственность:
//! - Montage playback (`MontageCommand`) + notifies (`AnimNotify`)
//! - Socket transforms (`WeaponSockets`), звук / particles
//!
//! Системы добавляются в общий per-frame chain `SimulationPlugin`.

use bevy::prelude::*;

pub mod ammo;
pub mod state;
pub mod systems;
pub mod trace;
pub mod weapon;

// Re-export основных типов
pub use ammo::AmmoInventory;
pub use state::{check_fire, check_reload, ActionRejected, CombatState};
pub use systems::*;
pub use trace::{
    beam_end_location, trace_under_crosshairs, BeamEnd, CrosshairTrace, FnTracer, LineTracer, NoCollision,
    TraceChannel, TraceHit, TraceProvider,
};
pub use weapon::{
    AmmoType, CharacterAssets, FireIntent, FireTrigger, FireWeaponRequest, ReloadIntent, ReloadWeaponRequest, Weapon,
    WeaponFired, WeaponSockets, WeaponType,
};

/// Combat Plugin — события + collision provider
///
/// `TraceProvider` по умолчанию `NoCollision`, хост заменяет через
/// `insert_resource(TraceProvider::new(...))` до или после plugin.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FireIntent>()
            .add_event::<ReloadIntent>()
            .add_event::<FireWeaponRequest>()
            .add_event::<ReloadWeaponRequest>()
            .add_event::<WeaponFired>()
            .init_resource::<TraceProvider>();
    }
}
