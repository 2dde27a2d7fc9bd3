//! Active-state mimic
//!
//! Mirrors "any reference object is active" onto a target list once per
//! tick, optionally inverted. Targets are only written when their state
//! actually differs, so other writers are not fought over unchanged frames.

use crate::behaviors::present;
use crate::scene::{ObjectId, Scene};

#[derive(Debug, Default)]
pub struct ActiveMimic {
    pub reference: Vec<Option<ObjectId>>,
    pub targets: Vec<Option<ObjectId>>,
    /// Mirror the opposite state instead
    pub invert: bool,
}

impl ActiveMimic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Once-per-tick mirror. Empty reference or target lists make this a
    /// no-op rather than an error.
    pub fn poll(&self, scene: &mut Scene) {
        if self.reference.is_empty() || self.targets.is_empty() {
            return;
        }
        let any_active = present(&self.reference).any(|id| scene.is_active(id));
        let state = self.invert != any_active;
        for id in present(&self.targets) {
            if scene.is_active(id) != state {
                scene.set_active(id, state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Scene, ObjectId, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let ref_a = scene.spawn_object("ref_a", false);
        let ref_b = scene.spawn_object("ref_b", false);
        let target = scene.spawn_object("target", false);
        (scene, ref_a, ref_b, target)
    }

    #[test]
    fn test_mirrors_any_active() {
        let (mut scene, ref_a, ref_b, target) = fixture();
        let mut mimic = ActiveMimic::new();
        mimic.reference = vec![Some(ref_a), Some(ref_b)];
        mimic.targets = vec![Some(target)];

        mimic.poll(&mut scene);
        assert!(!scene.is_active(target));

        scene.set_active(ref_b, true);
        mimic.poll(&mut scene);
        assert!(scene.is_active(target));

        scene.set_active(ref_b, false);
        mimic.poll(&mut scene);
        assert!(!scene.is_active(target));
    }

    #[test]
    fn test_inverted_mirror() {
        let (mut scene, ref_a, _, target) = fixture();
        let mut mimic = ActiveMimic::new();
        mimic.reference = vec![Some(ref_a)];
        mimic.targets = vec![Some(target)];
        mimic.invert = true;

        mimic.poll(&mut scene);
        assert!(scene.is_active(target));

        scene.set_active(ref_a, true);
        mimic.poll(&mut scene);
        assert!(!scene.is_active(target));
    }

    #[test]
    fn test_empty_lists_are_a_no_op() {
        let (mut scene, ref_a, _, target) = fixture();
        scene.set_active(ref_a, true);

        let mut mimic = ActiveMimic::new();
        mimic.reference = vec![Some(ref_a)];
        mimic.poll(&mut scene); // no targets
        assert!(!scene.is_active(target));

        mimic.reference = Vec::new();
        mimic.targets = vec![Some(target)];
        mimic.poll(&mut scene); // no references
        assert!(!scene.is_active(target));
    }

    #[test]
    fn test_absent_entries_skipped() {
        let (mut scene, ref_a, _, target) = fixture();
        scene.set_active(ref_a, true);
        let mut mimic = ActiveMimic::new();
        mimic.reference = vec![None, Some(ref_a)];
        mimic.targets = vec![Some(target), None];
        mimic.poll(&mut scene);
        assert!(scene.is_active(target));
    }
}
