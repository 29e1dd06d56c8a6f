//! Shooting domain — прицеливание (player)
//!
//! Содержит:
//! - AimState (aiming флаг + camera FOV zoom)
//! - LookRates (hip / aiming sensitivity tiers)
//! - AimIntent, LookIntent (input events), ControllerRotationInput (output)

pub mod components;
pub mod systems;

// Re-export all components and systems
pub use components::*;
pub use systems::*;

use bevy::prelude::*;

/// Shooting plugin (aim / look события)
pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AimIntent>()
            .add_event::<LookIntent>()
            .add_event::<ControllerRotationInput>();
    }
}
