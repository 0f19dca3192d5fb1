//! The seam between scene population and whatever actually owns entities.

use std::collections::BTreeMap;

use glam::Vec3;

use crate::color::TrilightAmbient;
use crate::entity::{EntityDesc, EntityHandle, EntityKind};

/// Tag marking the camera the backend renders from.
pub const MAIN_CAMERA_TAG: &str = "MainCamera";

/// A scene graph the populator can spawn into.
pub trait SceneBackend {
    /// Instantiate `desc` and return its handle.
    fn spawn(&mut self, desc: EntityDesc) -> EntityHandle;

    /// Remove an entity and its children. Returns `false` if it was already gone.
    fn despawn(&mut self, handle: EntityHandle) -> bool;

    /// The camera currently tagged as main, if any.
    fn main_camera(&self) -> Option<EntityHandle>;

    /// Move an existing camera and aim it at `look_at`. Returns `false` if unknown.
    fn aim_camera(&mut self, handle: EntityHandle, position: Vec3, look_at: Vec3) -> bool;

    /// Replace the ambient light.
    fn set_ambient(&mut self, ambient: TrilightAmbient);
}

/// In-memory scene graph.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entities: BTreeMap<EntityHandle, EntityDesc>,
    next_id: u64,
    ambient: Option<TrilightAmbient>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&EntityDesc> {
        self.entities.get(&handle)
    }

    /// First entity with the given name.
    pub fn find(&self, name: &str) -> Option<(EntityHandle, &EntityDesc)> {
        self.entities
            .iter()
            .find(|(_, desc)| desc.name == name)
            .map(|(handle, desc)| (*handle, desc))
    }

    pub fn children(&self, parent: EntityHandle) -> impl Iterator<Item = (EntityHandle, &EntityDesc)> {
        self.entities
            .iter()
            .filter(move |(_, desc)| desc.parent == Some(parent))
            .map(|(handle, desc)| (*handle, desc))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &EntityDesc)> {
        self.entities.iter().map(|(handle, desc)| (*handle, desc))
    }

    pub fn ambient(&self) -> Option<TrilightAmbient> {
        self.ambient
    }
}

impl SceneBackend for MemoryBackend {
    fn spawn(&mut self, desc: EntityDesc) -> EntityHandle {
        let handle = EntityHandle(self.next_id);
        self.next_id += 1;
        tracing::trace!(id = handle.0, name = %desc.name, "spawn");
        self.entities.insert(handle, desc);
        handle
    }

    fn despawn(&mut self, handle: EntityHandle) -> bool {
        if self.entities.remove(&handle).is_none() {
            return false;
        }
        let children: Vec<EntityHandle> = self.children(handle).map(|(h, _)| h).collect();
        for child in children {
            self.despawn(child);
        }
        true
    }

    fn main_camera(&self) -> Option<EntityHandle> {
        self.entities
            .iter()
            .find(|(_, desc)| {
                matches!(desc.kind, EntityKind::Camera { .. }) && desc.tag == Some(MAIN_CAMERA_TAG)
            })
            .map(|(handle, _)| *handle)
    }

    fn aim_camera(&mut self, handle: EntityHandle, position: Vec3, look_at: Vec3) -> bool {
        match self.entities.get_mut(&handle) {
            Some(EntityDesc {
                kind: EntityKind::Camera { look_at: target, .. },
                position: pos,
                ..
            }) => {
                *pos = position;
                *target = look_at;
                true
            }
            _ => false,
        }
    }

    fn set_ambient(&mut self, ambient: TrilightAmbient) {
        self.ambient = Some(ambient);
    }
}
