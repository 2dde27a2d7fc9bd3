//! Minimal scene model: toggleable objects, actors, and zone bounds
//!
//! Stands in for the host engine's object/actor provider. Behaviors hold
//! `ObjectId`/`ActorId` handles and never own scene data directly.

use glam::Vec3;

/// Handle to a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u32);

/// Handle to an actor (one of them is designated "local")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

/// A toggleable scene object
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub active: bool,
}

/// An actor with a point position
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub pos: Vec3,
}

/// Axis-aligned bounds of a trigger zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ZoneBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Point containment test (inclusive on all faces)
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// The scene: objects, actors, and the local-actor designation
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    actors: Vec<Actor>,
    local_actor: Option<ActorId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning its handle
    pub fn spawn_object(&mut self, name: impl Into<String>, active: bool) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(SceneObject {
            name: name.into(),
            active,
        });
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    /// Enabled state of an object; missing handles read as inactive
    pub fn is_active(&self, id: ObjectId) -> bool {
        self.object(id).map(|o| o.active).unwrap_or(false)
    }

    /// Set an object's enabled state. Missing handles are ignored.
    pub fn set_active(&mut self, id: ObjectId, active: bool) {
        if let Some(obj) = self.objects.get_mut(id.0 as usize) {
            obj.active = active;
        }
    }

    /// Add an actor at the given position
    pub fn add_actor(&mut self, pos: Vec3) -> ActorId {
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(Actor { id, pos });
        id
    }

    pub fn set_local_actor(&mut self, id: ActorId) {
        self.local_actor = Some(id);
    }

    pub fn local_actor(&self) -> Option<ActorId> {
        self.local_actor
    }

    /// Whether `id` is the locally-controlled actor
    pub fn is_local(&self, id: ActorId) -> bool {
        self.local_actor == Some(id)
    }

    pub fn actor_position(&self, id: ActorId) -> Option<Vec3> {
        self.actors.iter().find(|a| a.id == id).map(|a| a.pos)
    }

    pub fn move_actor(&mut self, id: ActorId, pos: Vec3) {
        if let Some(actor) = self.actors.iter_mut().find(|a| a.id == id) {
            actor.pos = pos;
        }
    }
}
