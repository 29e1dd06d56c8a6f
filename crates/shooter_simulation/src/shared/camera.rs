//! Camera rig компонент (follow camera персонажа)
//!
//! Хост пишет transform и viewport каждый frame, ECS пишет `fov`
//! (camera zoom) — хост применяет его к камере.

use bevy::prelude::*;

/// Follow camera персонажа
///
/// # Конвенции
/// - `transform` — world transform камеры (Bevy: forward = -Z)
/// - `fov` — горизонтальный FOV в градусах
/// - `viewport` — размер viewport в пикселях (0 → deprojection невозможна)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    pub transform: Transform,
    pub fov: f32,
    pub viewport: Vec2,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            fov: 90.0,
            viewport: Vec2::new(1920.0, 1080.0),
        }
    }
}

/// Луч из камеры (world space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl CameraRig {
    pub fn location(&self) -> Vec3 {
        self.transform.translation
    }

    pub fn forward(&self) -> Vec3 {
        *self.transform.forward()
    }

    /// Deproject screen point (пиксели, y вниз) → world ray
    ///
    /// Возвращает `None` если viewport пустой или FOV вырожденный.
    pub fn deproject(&self, screen: Vec2) -> Option<WorldRay> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        if self.fov <= 0.0 || self.fov >= 180.0 {
            return None;
        }

        let ndc_x = 2.0 * screen.x / self.viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / self.viewport.y;

        let tan_half_h = (self.fov.to_radians() * 0.5).tan();
        let tan_half_v = tan_half_h * self.viewport.y / self.viewport.x;

        let direction = self.forward()
            + *self.transform.right() * (ndc_x * tan_half_h)
            + *self.transform.up() * (ndc_y * tan_half_v);

        Some(WorldRay {
            origin: self.location(),
            direction: direction.try_normalize()?,
        })
    }

    /// Луч через crosshair (центр экрана, сдвинутый вверх на `offset_px`)
    pub fn crosshair_ray(&self, offset_px: f32) -> Option<WorldRay> {
        let center = self.viewport * 0.5;
        self.deproject(Vec2::new(center.x, center.y - offset_px))
    }

    /// Точка перед камерой, куда прилетает подбираемый item
    ///
    /// `camera + forward * distance + up * elevation` (up = world up, не camera up)
    pub fn interp_location(&self, distance: f32, elevation: f32) -> Vec3 {
        self.location() + self.forward() * distance + Vec3::Y * elevation
    }
}
