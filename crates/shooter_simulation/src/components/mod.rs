//! ECS Components персонажа
//!
//! Организация по доменам:
//! - actor: aggregate root (ShooterCharacter) + kinematic state от хоста
//! - movement: tuning для movement provider, crouch, capsule
//! - attachment: item в socket, hand anchor
//! - equipment: handle на оружие, item trace

pub mod actor;
pub mod movement;
pub mod attachment;
pub mod equipment;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use attachment::*;
pub use equipment::*;
