//! Line trace provider + crosshair / muzzle traces
//!
//! ECS не владеет collision — хост регистрирует свою реализацию `LineTracer`
//! через `TraceProvider`. По умолчанию `NoCollision` (headless, тесты):
//! ни один луч ни во что не попадает.

use bevy::prelude::*;

use crate::config::ShooterConfig;
use crate::shared::CameraRig;

/// Collision channel для трассировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceChannel {
    Visibility,
}

/// Blocking hit трассировки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    pub location: Vec3,
    /// Entity, в которую попали (`None` → геометрия мира без entity)
    pub entity: Option<Entity>,
}

/// Collision provider: "line trace" с первым blocking hit
pub trait LineTracer: Send + Sync {
    fn line_trace(&self, start: Vec3, end: Vec3, channel: TraceChannel) -> Option<TraceHit>;
}

/// Пустой мир — лучи никогда не попадают
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl LineTracer for NoCollision {
    fn line_trace(&self, _start: Vec3, _end: Vec3, _channel: TraceChannel) -> Option<TraceHit> {
        None
    }
}

/// Tracer из замыкания (хост-адаптеры, тесты)
pub struct FnTracer<F>(pub F);

impl<F> LineTracer for FnTracer<F>
where
    F: Fn(Vec3, Vec3, TraceChannel) -> Option<TraceHit> + Send + Sync,
{
    fn line_trace(&self, start: Vec3, end: Vec3, channel: TraceChannel) -> Option<TraceHit> {
        (self.0)(start, end, channel)
    }
}

/// Resource: активный collision provider
#[derive(Resource)]
pub struct TraceProvider {
    tracer: Box<dyn LineTracer>,
}

impl Default for TraceProvider {
    fn default() -> Self {
        Self::new(NoCollision)
    }
}

impl TraceProvider {
    pub fn new(tracer: impl LineTracer + 'static) -> Self {
        Self {
            tracer: Box::new(tracer),
        }
    }

    pub fn tracer(&self) -> &dyn LineTracer {
        self.tracer.as_ref()
    }
}

/// Результат crosshair trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairTrace {
    pub hit: Option<TraceHit>,
    /// Точка попадания или конец луча
    pub location: Vec3,
}

/// Trace из crosshair (центр экрана − offset) вперед на `crosshair_trace_distance`
///
/// `None` → deprojection невозможна (пустой viewport).
pub fn trace_under_crosshairs(
    tracer: &dyn LineTracer,
    camera: &CameraRig,
    config: &ShooterConfig,
) -> Option<CrosshairTrace> {
    let ray = camera.crosshair_ray(config.crosshair_screen_offset)?;

    let start = ray.origin;
    let end = start + ray.direction * config.crosshair_trace_distance;

    let hit = tracer.line_trace(start, end, TraceChannel::Visibility);
    let location = hit.map(|hit| hit.location).unwrap_or(end);

    Some(CrosshairTrace { hit, location })
}

/// Куда прилетает пуля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamEnd {
    /// Muzzle trace попал во что-то blocking
    pub found: bool,
    pub location: Vec3,
}

/// Beam end: crosshair target → muzzle trace с продлением ×1.25
///
/// Между стволом и crosshair target может оказаться препятствие —
/// тогда пуля останавливается на нем. `found` только при blocking hit muzzle trace.
pub fn beam_end_location(
    tracer: &dyn LineTracer,
    camera: &CameraRig,
    muzzle: Vec3,
    config: &ShooterConfig,
) -> BeamEnd {
    let target = match trace_under_crosshairs(tracer, camera, config) {
        Some(crosshair) => crosshair.location,
        // Нет viewport — целимся прямо по forward камеры
        None => camera.location() + camera.forward() * config.crosshair_trace_distance,
    };

    let start_to_end = target - muzzle;
    let trace_end = muzzle + start_to_end * config.muzzle_trace_extension;

    match tracer.line_trace(muzzle, trace_end, TraceChannel::Visibility) {
        Some(hit) => BeamEnd {
            found: true,
            location: hit.location,
        },
        None => BeamEnd {
            found: false,
            location: target,
        },
    }
}
