//! Single-actor cooperative host
//!
//! Owns the scene, UI, store, scheduler, and registered behaviors, and
//! drives them the way an engine would: fixed ticks that first fire due
//! scheduled tasks, then turn local-actor movement into enter/exit
//! crossings (exactly once per boundary change), then poll every behavior.

use glam::Vec3;

use crate::behaviors::{Behavior, BehaviorId, TaskKind};
use crate::scene::{Scene, ZoneBounds};
use crate::scheduler::Scheduler;
use crate::store::ActorStore;
use crate::ui::Ui;

pub struct Host {
    pub scene: Scene,
    pub ui: Ui,
    pub store: ActorStore,
    scheduler: Scheduler<crate::behaviors::ScheduledTask>,
    behaviors: Vec<Behavior>,
    /// Last known zone containment per behavior, for crossing detection.
    /// `None` until primed so a pre-existing presence never counts as an
    /// enter crossing.
    was_inside: Vec<Option<bool>>,
}

impl Host {
    pub fn new(scene: Scene, ui: Ui, store: ActorStore) -> Self {
        Self {
            scene,
            ui,
            store,
            scheduler: Scheduler::new(),
            behaviors: Vec::new(),
            was_inside: Vec::new(),
        }
    }

    /// Seconds of simulated time since host start
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// Register a behavior instance
    pub fn add(&mut self, mut behavior: Behavior) -> BehaviorId {
        let id = BehaviorId(self.behaviors.len());
        if let Behavior::ZoneToggle(toggle) = &mut behavior {
            toggle.id = id;
        }
        self.behaviors.push(behavior);
        self.was_inside.push(None);
        id
    }

    pub fn behavior(&self, id: BehaviorId) -> Option<&Behavior> {
        self.behaviors.get(id.0)
    }

    /// Activate every registered behavior, then prime crossing detection so
    /// an actor already inside a zone does not produce a spurious enter.
    pub fn activate(&mut self) {
        for behavior in &mut self.behaviors {
            match behavior {
                Behavior::ZoneToggle(toggle) => {
                    toggle.on_activate(&mut self.scene, &mut self.scheduler)
                }
                Behavior::ExitDisable(exit) => exit.on_activate(),
                Behavior::Slider(binding) => {
                    binding.on_activate(&mut self.ui, &mut self.store, &self.scene)
                }
                Behavior::Toggle(binding) => {
                    binding.on_activate(&mut self.ui, &mut self.store, &self.scene)
                }
                Behavior::Mimic(_) => {}
            }
        }
        for i in 0..self.behaviors.len() {
            let inside = self.containment(i);
            self.was_inside[i] = inside;
        }
    }

    /// The local actor's persisted data became available
    pub fn player_restored(&mut self) {
        let Some(actor) = self.scene.local_actor() else {
            log::warn!("host: restore event with no local actor");
            return;
        };
        for behavior in &mut self.behaviors {
            match behavior {
                Behavior::Slider(binding) => {
                    binding.on_restore(actor, &mut self.ui, &mut self.store, &self.scene)
                }
                Behavior::Toggle(binding) => {
                    binding.on_restore(actor, &mut self.ui, &mut self.store, &self.scene)
                }
                _ => {}
            }
        }
    }

    pub fn move_local_actor(&mut self, pos: Vec3) {
        if let Some(actor) = self.scene.local_actor() {
            self.scene.move_actor(actor, pos);
        } else {
            log::warn!("host: cannot move, no local actor");
        }
    }

    /// Advance one tick: fire due tasks, dispatch crossings, poll
    pub fn tick(&mut self, dt: f64) {
        for task in self.scheduler.advance(dt) {
            let Some(Behavior::ZoneToggle(toggle)) = self.behaviors.get_mut(task.target.0) else {
                continue;
            };
            match task.kind {
                TaskKind::InitialCheck => toggle.reconcile(&mut self.scene, &mut self.scheduler),
                TaskKind::SecondaryEnable => toggle.secondary_enable(&mut self.scene),
                TaskKind::SecondaryDisable => toggle.secondary_disable(&mut self.scene),
            }
        }

        self.dispatch_crossings();

        for behavior in &mut self.behaviors {
            match behavior {
                Behavior::Slider(binding) => binding.poll(&self.ui, &mut self.store, &self.scene),
                Behavior::Toggle(binding) => binding.poll(&self.ui, &mut self.store, &self.scene),
                Behavior::Mimic(mimic) => mimic.poll(&mut self.scene),
                _ => {}
            }
        }
    }

    /// Tick repeatedly at a fixed step for roughly `seconds`
    pub fn run_for(&mut self, seconds: f64, dt: f64) {
        let steps = (seconds / dt).round() as u64;
        for _ in 0..steps {
            self.tick(dt);
        }
    }

    /// Zone bounds a behavior watches, if it watches one at all
    fn watched_zone(&self, index: usize) -> Option<ZoneBounds> {
        match self.behaviors.get(index)? {
            Behavior::ZoneToggle(toggle) if !toggle.is_inert() => toggle.zone,
            Behavior::ExitDisable(exit) if !exit.is_inert() => exit.zone,
            _ => None,
        }
    }

    fn containment(&self, index: usize) -> Option<bool> {
        let zone = self.watched_zone(index)?;
        let actor = self.scene.local_actor()?;
        let pos = self.scene.actor_position(actor)?;
        Some(zone.contains(pos))
    }

    /// Compare current containment against the last tick and dispatch one
    /// enter or exit per boundary change.
    fn dispatch_crossings(&mut self) {
        let Some(actor) = self.scene.local_actor() else {
            return;
        };
        for i in 0..self.behaviors.len() {
            let Some(inside) = self.containment(i) else {
                continue;
            };
            let previous = self.was_inside[i];
            self.was_inside[i] = Some(inside);
            let crossed = match previous {
                Some(prev) => prev != inside,
                None => false, // first observation primes only
            };
            if !crossed {
                continue;
            }
            match &mut self.behaviors[i] {
                Behavior::ZoneToggle(toggle) => {
                    if inside {
                        toggle.on_enter(actor, &mut self.scene, &mut self.scheduler);
                    } else {
                        toggle.on_exit(actor, &mut self.scene, &mut self.scheduler);
                    }
                }
                Behavior::ExitDisable(exit) => {
                    if !inside {
                        exit.on_exit(actor, &mut self.scene);
                    }
                }
                _ => {}
            }
        }
    }
}
