//! Backend-neutral entity descriptions.

use glam::Vec3;

use crate::color::{Color, Surface};

/// Opaque id a backend hands out for a spawned entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u64);

/// What the backend should instantiate.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    /// Terrain surface; `scale` carries (width, vertical scale, depth).
    Terrain,
    Cube,
    Cylinder,
    Sphere,
    /// Empty transform used to parent primitives.
    Group,
    DirectionalLight {
        intensity: f32,
    },
    PointLight {
        intensity: f32,
        range: f32,
    },
    Camera {
        look_at: Vec3,
        fov_degrees: f32,
        near: f32,
        far: f32,
    },
}

/// Everything a backend needs to spawn one entity.
///
/// `position` is world space for root entities and parent-local for children.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityDesc {
    pub name: String,
    pub kind: EntityKind,
    pub parent: Option<EntityHandle>,
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Option<Color>,
    pub surface: Option<Surface>,
    pub tag: Option<&'static str>,
}

impl EntityDesc {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: None,
            surface: None,
            tag: None,
        }
    }

    pub fn with_parent(mut self, parent: EntityHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}
