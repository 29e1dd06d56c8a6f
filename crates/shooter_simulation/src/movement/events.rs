//! Movement events

use bevy::prelude::*;

/// Event: crouch button (toggle)
#[derive(Event, Debug, Clone, Copy)]
pub struct CrouchIntent {
    pub entity: Entity,
}

/// Event: намерение прыгнуть (jump button)
///
/// Сидя — встаем вместо прыжка, стоя — `JumpRequested` хосту.
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Event: прыжок (ECS → movement provider)
///
/// Хост проверяет is_on_floor() и применяет jump velocity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpRequested {
    pub entity: Entity,
}
