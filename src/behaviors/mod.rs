//! Behavior scripts
//!
//! Each behavior is an independent leaf: it owns its own state, holds
//! handles into the scene/UI, and is driven entirely by the host through
//! activation, enter/exit/restore events, fired scheduled tasks, and a
//! once-per-tick poll.

mod exit_disable;
mod mimic;
mod persistence;
mod zone_toggle;

pub use exit_disable::ExitDisable;
pub use mimic::ActiveMimic;
pub use persistence::{SliderPersistence, TogglePersistence};
pub use zone_toggle::ZoneToggle;

use crate::scene::{ObjectId, Scene};

/// Identifies one behavior instance registered with a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub(crate) usize);

/// A delayed action addressed to one behavior instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub target: BehaviorId,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// One-shot startup reconciliation against the zone bounds
    InitialCheck,
    /// Delayed secondary-tier enable, guarded on presence at fire time
    SecondaryEnable,
    /// Delayed secondary-tier disable, guarded on absence at fire time
    SecondaryDisable,
}

/// The registered behavior kinds, dispatched over by the host
#[derive(Debug)]
pub enum Behavior {
    ZoneToggle(ZoneToggle),
    ExitDisable(ExitDisable),
    Slider(SliderPersistence),
    Toggle(TogglePersistence),
    Mimic(ActiveMimic),
}

/// Present entries of a best-effort target sequence. Absent entries are
/// expected during scene authoring and are not an error.
pub(crate) fn present(targets: &[Option<ObjectId>]) -> impl Iterator<Item = ObjectId> + '_ {
    targets.iter().filter_map(|t| *t)
}

/// Apply an enabled state to every present entry of a target sequence
pub(crate) fn set_all_active(scene: &mut Scene, targets: &[Option<ObjectId>], active: bool) {
    for id in present(targets) {
        scene.set_active(id, active);
    }
}
