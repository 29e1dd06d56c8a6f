//! Shooter Simulation Core
//!
//! ECS-симуляция персонажа-стрелка на Bevy 0.16 (per-frame gameplay layer)
//!
//! HOST ARCHITECTURE:
//! - ECS = gameplay state (combat state machine, ammo, aim, crouch, pose параметры)
//! - Хост (движок) = физика, рендер, анимация, звук, collision
//!
//! Хост пишет: KinematicState, CameraRig (transform/viewport), AnimCurves, WeaponSockets, intent events.
//! ECS пишет: MovementTuning, CameraRig.fov, PoseState, CrosshairSpread, command/effect events.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod animation;
pub mod combat;
pub mod components;
pub mod config;
pub mod crosshair;
pub mod effects;
pub mod equipment;
pub mod item_system;
pub mod logger;
pub mod movement;
pub mod pose;
pub mod shared;
pub mod shooting;

// Re-export базовых компонентов для удобства
pub use animation::{AnimCurves, AnimNotify, AnimNotifyKind, AnimationPlugin, MontageCommand};
pub use combat::{
    ActionRejected, AmmoInventory, AmmoType, CharacterAssets, CombatPlugin, CombatState, CombatTimers, FireIntent,
    FireTrigger, LineTracer, ReloadIntent, TraceHit, TraceProvider, Weapon, WeaponFired, WeaponSockets, WeaponType,
};
pub use components::*;
pub use config::ShooterConfig;
pub use crosshair::CrosshairSpread;
pub use effects::{EffectsPlugin, PlaySound, SpawnEmitter};
pub use equipment::{EquipmentPlugin, ItemOverlapChanged, SelectIntent, WeaponThrown};
pub use item_system::{Item, ItemSounds, ItemState, PickupWidget};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use movement::{CrouchIntent, JumpIntent, JumpRequested, MovementPlugin};
pub use pose::{OffsetState, PoseState};
pub use shared::CameraRig;
pub use shooting::{AimIntent, AimState, ControllerRotationInput, LookIntent, LookRates, ShootingPlugin};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Порядок выполнения (Update, строго последовательно):
/// 1. Timers — auto-fire reset, crosshair shot window, throw fall
/// 2. Intents — aim, look, fire, crouch, jump, overlap, select, anim notifies
/// 3. Actions — fire / reload requests
/// 4. Per-frame models — zoom, look rates, crosshair, item trace, capsule
/// 5. Item pickup — interp к камере, swap
/// 6. Pose — turn-in-place, lean, offset state
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Хост может заранее вставить свой config / seed
        app.init_resource::<ShooterConfig>();
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        // Подсистемы (события + resources)
        app.add_plugins((
            AnimationPlugin,
            EffectsPlugin,
            ShootingPlugin,
            CombatPlugin,
            MovementPlugin,
            EquipmentPlugin,
        ));

        app.add_systems(
            Update,
            (
                // Фаза 1: Timers
                (combat::tick_combat_timers, equipment::tick_thrown_weapons).chain(),
                // Фаза 2: Intents
                (
                    shooting::process_aim_intents,
                    shooting::apply_look_input,
                    combat::process_fire_intents,
                    movement::process_crouch_intents,
                    movement::process_jump_intents,
                    equipment::process_item_overlaps,
                    equipment::process_select_intents,
                    equipment::handle_clip_notifies,
                    combat::finish_reloading,
                )
                    .chain(),
                // Фаза 3: Fire / reload
                (combat::fire_weapon, combat::reload_weapon).chain(),
                // Фаза 4: Per-frame models
                (
                    shooting::camera_interp_zoom,
                    shooting::set_look_rates,
                    crosshair::calculate_crosshair_spread,
                    equipment::trace_for_items,
                    movement::interp_capsule_half_height,
                )
                    .chain(),
                // Фаза 5: Item pickup
                (equipment::interp_item_pickup, equipment::get_pickup_item).chain(),
                // Фаза 6: Pose
                pose::update_animation_properties,
            )
                .chain(), // Последовательное выполнение
        );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (real time)
///
/// SimulationPlugin добавляет вызывающий (host или тест).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Создаёт App с ручным шагом времени (тесты, replay)
///
/// Без TimePlugin: `Time` двигается только через `advance_frame`.
pub fn create_stepped_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.insert_resource(Time::<()>::default())
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Один frame с фиксированным delta
pub fn advance_frame(app: &mut App, delta_seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(delta_seconds));
    app.update();
}

/// Spawn оружия, лежащего в мире (state Pickup)
pub fn spawn_weapon(commands: &mut Commands, weapon: Weapon, transform: Transform) -> Entity {
    let name = match weapon.weapon_type {
        WeaponType::SubmachineGun => "SubmachineGun",
        WeaponType::AssaultRifle => "AssaultRifle",
    };

    commands
        .spawn((
            Item::new(name),
            weapon,
            transform,
            ItemSounds::standard(),
            WeaponSockets {
                barrel: Some(transform),
                clip_bone: Some(transform),
            },
        ))
        .id()
}

/// Spawn персонажа со стартовыми патронами и SMG в руке
pub fn spawn_shooter_character(commands: &mut Commands, config: &ShooterConfig, transform: Transform) -> Entity {
    let camera = CameraRig {
        transform,
        ..default()
    };

    let character = commands
        .spawn((
            ShooterCharacter,
            transform,
            camera,
            AimState {
                aiming: false,
                default_fov: camera.fov,
                zoomed_fov: config.camera_zoomed_fov,
                current_fov: camera.fov,
            },
            LookRates::hip(config),
            MovementTuning {
                max_walk_speed: config.base_movement_speed,
                ground_friction: config.base_ground_friction,
            },
            CapsuleState::new(config.standing_capsule_half_height),
            AmmoInventory::starting(config),
            CharacterAssets::standard(),
        ))
        .id();

    let weapon = spawn_weapon(commands, Weapon::new(WeaponType::SubmachineGun), transform);
    commands
        .entity(weapon)
        .insert((Attachment::right_hand(character), ItemState::Equipped));
    commands.entity(character).insert(EquippedWeapon(Some(weapon)));

    log_info(&format!("Spawned shooter {:?} with weapon {:?}", character, weapon));

    character
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
