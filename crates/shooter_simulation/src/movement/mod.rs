//! Movement domain — стойка и capsule
//!
//! Содержит:
//! - CrouchIntent / JumpIntent (input events), JumpRequested (→ хост)
//! - Crouch toggle (speed + friction для movement provider)
//! - Capsule half-height interpolation с компенсацией mesh offset
//!
//! Компоненты (MovementTuning, CrouchState, CapsuleState) — в `components::movement`.

use bevy::prelude::*;

pub mod events;
pub mod systems;

// Re-export all events and systems
pub use events::*;
pub use systems::*;

/// Movement plugin (события)
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CrouchIntent>()
            .add_event::<JumpIntent>()
            .add_event::<JumpRequested>();
    }
}
