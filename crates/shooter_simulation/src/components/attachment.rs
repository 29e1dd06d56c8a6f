//! Attachment компоненты: оружие в руке, hand anchor для clip grab

use bevy::prelude::*;

/// Socket правой руки (оружие)
pub const RIGHT_HAND_SOCKET: &str = "RightHandSocket";

/// Socket левой руки (магазин во время reload)
pub const LEFT_HAND_SOCKET: &str = "hand_l";

/// Attachment — item привязан к socket персонажа
///
/// Висит на item entity. Хост читает `Changed<Attachment>` и делает
/// attach mesh к socket. Удаление компонента = detach с сохранением world transform.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    /// Персонаж-владелец
    pub parent: Entity,
    /// Socket на skeletal mesh владельца (например "RightHandSocket")
    pub socket: String,
}

impl Attachment {
    /// Attachment для оружия в правой руке
    pub fn right_hand(parent: Entity) -> Self {
        Self {
            parent,
            socket: RIGHT_HAND_SOCKET.into(),
        }
    }
}

/// Hand scene node — anchor, за которым следует магазин во время reload
///
/// `socket == None` → anchor не привязан ни к чему.
/// Персонаж без этого компонента не может делать clip grab (short-circuit).
#[derive(Component, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct HandAnchor {
    pub socket: Option<String>,
    pub world_transform: Transform,
}

impl HandAnchor {
    /// Привязать anchor к socket и поставить в world transform
    pub fn attach(&mut self, socket: &str, world_transform: Transform) {
        self.socket = Some(socket.to_string());
        self.world_transform = world_transform;
    }
}
