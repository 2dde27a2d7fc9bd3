//! One-way exit disable
//!
//! Turns a list of objects off when the local actor leaves the zone, and
//! optionally the zone's own host object with them. There is no enter
//! counterpart; something else re-enables the objects (or the scene resets).

use crate::behaviors::set_all_active;
use crate::scene::{ActorId, ObjectId, Scene, ZoneBounds};

#[derive(Debug)]
pub struct ExitDisable {
    /// Trigger region watched for the exit crossing
    pub zone: Option<ZoneBounds>,
    pub targets: Vec<Option<ObjectId>>,
    /// Also disable the object hosting this behavior on exit
    pub disable_self: bool,
    pub self_object: Option<ObjectId>,
    inert: bool,
}

impl ExitDisable {
    pub fn new(zone: Option<ZoneBounds>) -> Self {
        Self {
            zone,
            targets: Vec::new(),
            disable_self: true,
            self_object: None,
            inert: false,
        }
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Missing trigger region is a configuration error: reported once, then
    /// the behavior never reacts.
    pub fn on_activate(&mut self) {
        if self.zone.is_none() {
            log::error!("exit disable: no trigger bounds assigned, disabling behavior");
            self.inert = true;
        }
    }

    pub fn on_exit(&mut self, actor: ActorId, scene: &mut Scene) {
        if self.inert || !scene.is_local(actor) {
            return;
        }
        set_all_active(scene, &self.targets, false);
        if self.disable_self
            && let Some(own) = self.self_object
        {
            scene.set_active(own, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn zone() -> ZoneBounds {
        ZoneBounds::from_center_size(Vec3::ZERO, Vec3::splat(4.0))
    }

    #[test]
    fn test_exit_disables_targets_and_self() {
        let mut scene = Scene::new();
        let lamp = scene.spawn_object("lamp", true);
        let door = scene.spawn_object("door", true);
        let own = scene.spawn_object("hallway_trigger", true);
        let actor = scene.add_actor(Vec3::ZERO);
        scene.set_local_actor(actor);

        let mut behavior = ExitDisable::new(Some(zone()));
        behavior.targets = vec![Some(lamp), None, Some(door)];
        behavior.self_object = Some(own);
        behavior.on_activate();

        behavior.on_exit(actor, &mut scene);
        assert!(!scene.is_active(lamp));
        assert!(!scene.is_active(door));
        assert!(!scene.is_active(own));
    }

    #[test]
    fn test_self_kept_when_disable_self_off() {
        let mut scene = Scene::new();
        let own = scene.spawn_object("trigger", true);
        let actor = scene.add_actor(Vec3::ZERO);
        scene.set_local_actor(actor);

        let mut behavior = ExitDisable::new(Some(zone()));
        behavior.disable_self = false;
        behavior.self_object = Some(own);
        behavior.on_activate();
        behavior.on_exit(actor, &mut scene);
        assert!(scene.is_active(own));
    }

    #[test]
    fn test_non_local_exit_ignored() {
        let mut scene = Scene::new();
        let lamp = scene.spawn_object("lamp", true);
        let local = scene.add_actor(Vec3::ZERO);
        let stranger = scene.add_actor(Vec3::ZERO);
        scene.set_local_actor(local);

        let mut behavior = ExitDisable::new(Some(zone()));
        behavior.targets = vec![Some(lamp)];
        behavior.on_activate();
        behavior.on_exit(stranger, &mut scene);
        assert!(scene.is_active(lamp));
    }

    #[test]
    fn test_missing_zone_goes_inert() {
        let mut scene = Scene::new();
        let lamp = scene.spawn_object("lamp", true);
        let actor = scene.add_actor(Vec3::ZERO);
        scene.set_local_actor(actor);

        let mut behavior = ExitDisable::new(None);
        behavior.targets = vec![Some(lamp)];
        behavior.on_activate();
        assert!(behavior.is_inert());

        behavior.on_exit(actor, &mut scene);
        assert!(scene.is_active(lamp));
    }
}
