//! Interpolation filters — общие для всех per-frame моделей
//!
//! Используются: FOV zoom, crosshair factors, lean, capsule height, item pickup interp.
//! Все углы в градусах.

use bevy::prelude::*;

/// Экспоненциальное приближение к target
///
/// `next = current + (target - current) * clamp(delta_time * rate, 0, 1)`
///
/// - `delta_time * rate >= 1` → возвращает ровно `target`
/// - `delta_time == 0` или `rate == 0` → возвращает `current`
/// - `current == target` → fixed point
pub fn approach(current: f32, target: f32, delta_time: f32, rate: f32) -> f32 {
    let alpha = (delta_time * rate).clamp(0.0, 1.0);
    if alpha >= 1.0 {
        return target;
    }
    current + (target - current) * alpha
}

/// Линейный map value из [in_min, in_max] в [out_min, out_max] с clamp
pub fn map_range_clamped(value: f32, in_range: (f32, f32), out_range: (f32, f32)) -> f32 {
    let (in_min, in_max) = in_range;
    let (out_min, out_max) = out_range;

    if (in_max - in_min).abs() <= f32::EPSILON {
        return if value < in_min { out_min } else { out_max };
    }

    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Нормализация угла в (-180, 180]
pub fn normalize_axis(angle: f32) -> f32 {
    let mut angle = angle % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Кратчайшая разница углов `a - b` (в градусах, (-180, 180])
pub fn normalized_delta_yaw(a: f32, b: f32) -> f32 {
    normalize_axis(a - b)
}

/// Yaw направления (градусы)
///
/// Конвенция Bevy: Y-up, forward = -Z. Yaw — поворот вокруг +Y,
/// yaw 0 смотрит в -Z, yaw 90 смотрит в -X.
/// Для нулевого горизонтального вектора возвращает 0.
pub fn yaw_from_direction(direction: Vec3) -> f32 {
    if direction.x.abs() <= f32::EPSILON && direction.z.abs() <= f32::EPSILON {
        return 0.0;
    }
    (-direction.x).atan2(-direction.z).to_degrees()
}

/// Горизонтальная (planar) скорость — vertical компонента отброшена
pub fn planar_speed(velocity: Vec3) -> f32 {
    Vec2::new(velocity.x, velocity.z).length()
}

/// Ease-out cubic curve
///
/// Smooth deceleration: fast start, slow finish
/// - t=0.0 → 0.0
/// - t=0.5 → 0.875
/// - t=1.0 → 1.0
///
/// Formula: (t-1)³ + 1
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}
