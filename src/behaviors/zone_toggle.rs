//! Zone presence toggle
//!
//! Keeps two tiers of dependent objects consistent with whether the local
//! actor occupies a zone. The primary tier reacts immediately on crossings;
//! the secondary tier follows after a delay so a fast in-and-out traversal
//! does not flicker dependent effects. Scheduled secondary actions cannot be
//! cancelled, so each one re-checks `presence` at fire time and drops itself
//! if the actor has since crossed the other way.
//!
//! A one-shot reconciliation runs `initial_check_delay` seconds after
//! activation to cover the actor already standing inside the zone when the
//! behavior starts (no crossing event will ever fire for that case).

use crate::behaviors::{BehaviorId, ScheduledTask, TaskKind, set_all_active};
use crate::scene::{ActorId, ObjectId, Scene, ZoneBounds};
use crate::scheduler::Scheduler;

#[derive(Debug)]
pub struct ZoneToggle {
    pub(crate) id: BehaviorId,
    /// Bounds source for the reconciliation containment test. `None` is a
    /// configuration error discovered at reconcile time.
    pub zone: Option<ZoneBounds>,
    /// First tier: toggled immediately on enter/exit
    pub primary: Vec<Option<ObjectId>>,
    /// Second tier: toggled `secondary_delay` seconds after the crossing
    pub secondary: Vec<Option<ObjectId>>,
    pub initial_check_delay: f64,
    pub secondary_delay: f64,
    presence: bool,
    inert: bool,
}

impl ZoneToggle {
    pub fn new(zone: Option<ZoneBounds>) -> Self {
        Self {
            id: BehaviorId(0),
            zone,
            primary: Vec::new(),
            secondary: Vec::new(),
            initial_check_delay: crate::consts::DEFAULT_INITIAL_CHECK_DELAY,
            secondary_delay: crate::consts::DEFAULT_SECONDARY_DELAY,
            presence: false,
            inert: false,
        }
    }

    /// True while the local actor is known to be inside the zone
    pub fn presence(&self) -> bool {
        self.presence
    }

    /// True once a configuration error has permanently disabled the behavior
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Fail-open start: enable both tiers, then schedule the one-shot
    /// reconciliation for actors already inside the zone.
    pub fn on_activate(&mut self, scene: &mut Scene, sched: &mut Scheduler<ScheduledTask>) {
        set_all_active(scene, &self.primary, true);
        set_all_active(scene, &self.secondary, true);
        sched.schedule_after(
            self.initial_check_delay,
            ScheduledTask {
                target: self.id,
                kind: TaskKind::InitialCheck,
            },
        );
    }

    /// One-shot containment check, routing into the enter or exit path.
    /// Missing bounds source is a configuration error: reported once, then
    /// the behavior stays inert for good.
    pub fn reconcile(&mut self, scene: &mut Scene, sched: &mut Scheduler<ScheduledTask>) {
        if self.inert {
            return;
        }
        let Some(actor) = scene.local_actor() else {
            log::warn!("zone toggle: no local actor, skipping initial check");
            return;
        };
        let Some(zone) = self.zone else {
            log::error!("zone toggle: no bounds source assigned, disabling behavior");
            self.inert = true;
            return;
        };
        let Some(pos) = scene.actor_position(actor) else {
            log::warn!("zone toggle: local actor has no position, skipping initial check");
            return;
        };
        if zone.contains(pos) {
            self.on_enter(actor, scene, sched);
        } else {
            self.on_exit(actor, scene, sched);
        }
    }

    /// Crossing into the zone. Only the local actor is observed.
    pub fn on_enter(
        &mut self,
        actor: ActorId,
        scene: &mut Scene,
        sched: &mut Scheduler<ScheduledTask>,
    ) {
        if self.inert || !scene.is_local(actor) {
            return;
        }
        self.presence = true;
        set_all_active(scene, &self.primary, true);
        sched.schedule_after(
            self.secondary_delay,
            ScheduledTask {
                target: self.id,
                kind: TaskKind::SecondaryEnable,
            },
        );
    }

    /// Crossing out of the zone. Only the local actor is observed.
    pub fn on_exit(
        &mut self,
        actor: ActorId,
        scene: &mut Scene,
        sched: &mut Scheduler<ScheduledTask>,
    ) {
        if self.inert || !scene.is_local(actor) {
            return;
        }
        self.presence = false;
        set_all_active(scene, &self.primary, false);
        sched.schedule_after(
            self.secondary_delay,
            ScheduledTask {
                target: self.id,
                kind: TaskKind::SecondaryDisable,
            },
        );
    }

    /// Delayed secondary enable. No-op unless the actor is still inside.
    pub fn secondary_enable(&self, scene: &mut Scene) {
        if self.presence {
            set_all_active(scene, &self.secondary, true);
        }
    }

    /// Delayed secondary disable. No-op unless the actor is still outside.
    pub fn secondary_disable(&self, scene: &mut Scene) {
        if !self.presence {
            set_all_active(scene, &self.secondary, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn zone() -> ZoneBounds {
        ZoneBounds::from_center_size(Vec3::ZERO, Vec3::splat(10.0))
    }

    struct Fixture {
        scene: Scene,
        sched: Scheduler<ScheduledTask>,
        toggle: ZoneToggle,
        actor: ActorId,
        primary: ObjectId,
        secondary: ObjectId,
    }

    fn fixture(actor_pos: Vec3) -> Fixture {
        let mut scene = Scene::new();
        let primary = scene.spawn_object("door_light", false);
        let secondary = scene.spawn_object("door_audio", false);
        let actor = scene.add_actor(actor_pos);
        scene.set_local_actor(actor);

        let mut toggle = ZoneToggle::new(Some(zone()));
        toggle.primary = vec![Some(primary)];
        toggle.secondary = vec![Some(secondary)];
        Fixture {
            scene,
            sched: Scheduler::new(),
            toggle,
            actor,
            primary,
            secondary,
        }
    }

    /// Run every task currently due after advancing by `dt`
    fn pump(f: &mut Fixture, dt: f64) {
        for task in f.sched.advance(dt) {
            match task.kind {
                TaskKind::InitialCheck => f.toggle.reconcile(&mut f.scene, &mut f.sched),
                TaskKind::SecondaryEnable => f.toggle.secondary_enable(&mut f.scene),
                TaskKind::SecondaryDisable => f.toggle.secondary_disable(&mut f.scene),
            }
        }
    }

    #[test]
    fn test_activate_fails_open_and_arms_check() {
        let mut f = fixture(Vec3::splat(100.0));
        f.toggle.on_activate(&mut f.scene, &mut f.sched);
        assert!(f.scene.is_active(f.primary));
        assert!(f.scene.is_active(f.secondary));
        assert_eq!(f.sched.pending(), 1);
    }

    #[test]
    fn test_initial_check_actor_outside_turns_all_off() {
        // initial_check_delay=5, secondary_delay=1, actor
        // starts outside; everything must be off by t=6.
        let mut f = fixture(Vec3::splat(100.0));
        f.toggle.on_activate(&mut f.scene, &mut f.sched);

        pump(&mut f, 5.0); // reconcile: primary off, secondary scheduled
        assert!(!f.scene.is_active(f.primary));
        assert!(f.scene.is_active(f.secondary));

        pump(&mut f, 1.0); // secondary disable fires, presence still false
        assert!(!f.scene.is_active(f.secondary));
    }

    #[test]
    fn test_initial_check_actor_inside_keeps_all_on() {
        let mut f = fixture(Vec3::ZERO);
        f.toggle.on_activate(&mut f.scene, &mut f.sched);
        pump(&mut f, 5.0);
        pump(&mut f, 1.0);
        assert!(f.toggle.presence());
        assert!(f.scene.is_active(f.primary));
        assert!(f.scene.is_active(f.secondary));
    }

    #[test]
    fn test_enter_is_primary_now_secondary_later() {
        let mut f = fixture(Vec3::splat(100.0));
        f.scene.set_active(f.primary, false);
        f.scene.set_active(f.secondary, false);

        f.toggle.on_enter(f.actor, &mut f.scene, &mut f.sched);
        assert!(f.scene.is_active(f.primary));
        assert!(!f.scene.is_active(f.secondary));

        pump(&mut f, 1.0);
        assert!(f.scene.is_active(f.secondary));
    }

    #[test]
    fn test_fast_in_and_out_leaves_secondary_off() {
        // Enter then exit within less than secondary_delay: the stale
        // enable must drop itself, the disable must win.
        let mut f = fixture(Vec3::splat(100.0));
        f.toggle.on_enter(f.actor, &mut f.scene, &mut f.sched);
        pump(&mut f, 0.5);
        f.toggle.on_exit(f.actor, &mut f.scene, &mut f.sched);

        pump(&mut f, 0.5); // stale enable fires: presence false, no-op
        assert!(!f.scene.is_active(f.secondary));
        pump(&mut f, 0.5); // disable fires: presence false, applies
        assert!(!f.scene.is_active(f.secondary));
        assert!(!f.scene.is_active(f.primary));
    }

    #[test]
    fn test_fast_out_and_in_leaves_secondary_on() {
        let mut f = fixture(Vec3::ZERO);
        f.toggle.on_enter(f.actor, &mut f.scene, &mut f.sched);
        pump(&mut f, 1.0);
        assert!(f.scene.is_active(f.secondary));

        f.toggle.on_exit(f.actor, &mut f.scene, &mut f.sched);
        pump(&mut f, 0.5);
        f.toggle.on_enter(f.actor, &mut f.scene, &mut f.sched);

        pump(&mut f, 0.5); // stale disable: presence true, no-op
        assert!(f.scene.is_active(f.secondary));
        pump(&mut f, 0.5); // enable: presence true, applies
        assert!(f.scene.is_active(f.secondary));
    }

    #[test]
    fn test_non_local_actor_ignored() {
        let mut f = fixture(Vec3::splat(100.0));
        let stranger = f.scene.add_actor(Vec3::ZERO);
        f.toggle.on_enter(stranger, &mut f.scene, &mut f.sched);
        assert!(!f.toggle.presence());
        assert!(!f.scene.is_active(f.primary));
        assert_eq!(f.sched.pending(), 0);
    }

    #[test]
    fn test_missing_bounds_goes_inert() {
        let mut f = fixture(Vec3::ZERO);
        f.toggle.zone = None;
        f.toggle.on_activate(&mut f.scene, &mut f.sched);
        pump(&mut f, 5.0);
        assert!(f.toggle.is_inert());

        // Inert behavior ignores later crossings
        f.toggle.on_enter(f.actor, &mut f.scene, &mut f.sched);
        assert!(!f.toggle.presence());
    }

    #[test]
    fn test_absent_target_entries_are_skipped() {
        let mut f = fixture(Vec3::splat(100.0));
        f.toggle.primary = vec![None, Some(f.primary), None];
        f.toggle.secondary = vec![None];
        f.toggle.on_enter(f.actor, &mut f.scene, &mut f.sched);
        assert!(f.scene.is_active(f.primary));
        pump(&mut f, 1.0);
    }
}
