//! Scene population on top of a generated terrain.
//!
//! Buildings, peaks, trees, lights and the camera are described as
//! backend-neutral [`EntityDesc`]s and handed to a [`SceneBackend`]. A
//! [`SceneSession`] remembers exactly what it spawned so it can tear the scene
//! down again without touching anything else in the backend.

mod backend;
mod catalog;
mod color;
mod entity;
mod error;
mod placement;
mod session;

pub use backend::{MAIN_CAMERA_TAG, MemoryBackend, SceneBackend};
pub use catalog::{
    AMBIENT, CAMERA, CITY_PLACEMENTS, CameraRig, Category, GIANT_TREES, MOUNTAIN_PLACEMENTS,
    POINT_LIGHTS, Placement, PointLightDef, SUN, SunDef, TERRAIN_COLOR, TERRAIN_NAME,
};
pub use color::{Color, Surface, TrilightAmbient};
pub use entity::{EntityDesc, EntityHandle, EntityKind};
pub use error::SceneError;
pub use placement::{
    TreeZone, TREE_ZONES, place_block, place_giant_tree, place_tree, rest_height,
    scatter_tree_positions,
};
pub use session::{SceneOptions, SceneSession, SceneSummary, build_scene};
