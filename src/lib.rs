//! World Scripts - tick-driven behavior scripts for a 3D environment
//!
//! Core modules:
//! - `behaviors`: the scripts themselves (zone toggles, value persistence,
//!   exit disable, active-state mimic)
//! - `scene`: objects, actors, and zone bounds
//! - `scheduler`: delayed-callback queue (fire-and-forget, no cancellation)
//! - `store`: per-actor durable key-value store
//! - `ui`: slider/toggle widget handles
//! - `host`: single-actor driver wiring it all together

pub mod behaviors;
pub mod host;
pub mod scene;
pub mod scheduler;
pub mod store;
pub mod ui;

pub use behaviors::{
    ActiveMimic, Behavior, BehaviorId, ExitDisable, ScheduledTask, SliderPersistence, TaskKind,
    TogglePersistence, ZoneToggle,
};
pub use host::Host;
pub use scene::{ActorId, ObjectId, Scene, ZoneBounds};
pub use scheduler::Scheduler;
pub use store::{ActorStore, StoredValue};
pub use ui::{SliderId, ToggleId, Ui};

/// Shared tuning constants
pub mod consts {
    /// Fixed host timestep (60 Hz)
    pub const TICK_DT: f64 = 1.0 / 60.0;

    /// Minimum slider movement that counts as a real edit; smaller drifts
    /// are floating-point noise and must not hit the store
    pub const VALUE_EPSILON: f32 = 0.001;

    /// Seconds between activation and the one-shot zone reconciliation
    pub const DEFAULT_INITIAL_CHECK_DELAY: f64 = 5.0;

    /// Seconds between the primary and secondary toggle tiers
    pub const DEFAULT_SECONDARY_DELAY: f64 = 1.0;
}
