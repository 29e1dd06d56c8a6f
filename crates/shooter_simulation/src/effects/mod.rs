//! Audio/particle side effects (ECS → хост, fire-and-forget)
//!
//! ECS только пишет события, хост проигрывает звук / спавнит emitter.
//! Ответ не нужен — ни одна система не ждет результата.

use bevy::prelude::*;

/// Event: проиграть звук
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySound {
    /// Sound asset (например "FireSound")
    pub sound: String,
    /// `None` → 2D звук, `Some` → 3D в точке
    pub location: Option<Vec3>,
}

impl PlaySound {
    pub fn at_2d(sound: impl Into<String>) -> Self {
        Self {
            sound: sound.into(),
            location: None,
        }
    }
}

/// Event: заспавнить particle emitter
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SpawnEmitter {
    /// Particle asset (например "MuzzleFlash")
    pub effect: String,
    pub transform: Transform,
    /// Для beam эффектов — параметр "Target" (конец луча)
    pub beam_target: Option<Vec3>,
}

impl SpawnEmitter {
    pub fn at(effect: impl Into<String>, transform: Transform) -> Self {
        Self {
            effect: effect.into(),
            transform,
            beam_target: None,
        }
    }
}

/// Регистрация событий эффектов
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySound>().add_event::<SpawnEmitter>();
    }
}
