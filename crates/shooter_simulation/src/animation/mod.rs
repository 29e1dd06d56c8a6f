//! Animation provider interface
//!
//! ECS не проигрывает анимации — только отдает команды и принимает callbacks:
//! - `MontageCommand` (ECS → хост): play montage + jump to section
//! - `AnimNotify` (хост → ECS): notifies из montage (reload finished, clip grab/release)
//! - `AnimCurves` (хост → ECS): значения named curves этого frame

use bevy::prelude::*;
use std::collections::HashMap;

/// Curve "Turning" — > 0 пока проигрывается turn-in-place анимация
pub const TURNING_CURVE: &str = "Turning";

/// Curve "Rotation" — накопленный поворот root в turn-in-place анимации
pub const ROTATION_CURVE: &str = "Rotation";

/// Section fire montage для стрельбы с бедра
pub const START_FIRE_SECTION: &str = "StartFire";

/// Event: проиграть montage и прыгнуть в section
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MontageCommand {
    pub entity: Entity,
    /// Asset montage (например "HipFireMontage")
    pub montage: String,
    /// Section внутри montage
    pub section: String,
}

/// Notifies из montage (хост → ECS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AnimNotifyKind {
    /// Reload montage дошел до конца — переносим патроны
    FinishReloading,
    /// Рука взяла магазин
    GrabClip,
    /// Магазин вставлен обратно
    ReleaseClip,
}

/// Event: notify из montage
#[derive(Event, Debug, Clone, Copy)]
pub struct AnimNotify {
    pub entity: Entity,
    pub kind: AnimNotifyKind,
}

/// Sampled curve values (пишет хост каждый frame)
///
/// Отсутствующая curve = 0.0 (как у AnimInstance без активного montage).
#[derive(Component, Debug, Clone, Default)]
pub struct AnimCurves {
    pub values: HashMap<String, f32>,
}

impl AnimCurves {
    pub fn get(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), value);
    }
}

/// Animation plugin (montage commands + notifies)
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MontageCommand>().add_event::<AnimNotify>();
    }
}
