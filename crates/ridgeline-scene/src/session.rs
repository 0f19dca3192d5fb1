//! A scene-generation session that owns the entities it creates.

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::{DVec2, DVec3, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ridgeline_config::Config;
use ridgeline_terrain::{TerrainSampler, generate_height_field};

use crate::backend::{MAIN_CAMERA_TAG, MemoryBackend, SceneBackend};
use crate::catalog::{
    AMBIENT, CAMERA, Category, CITY_PLACEMENTS, GIANT_TREES, MOUNTAIN_PLACEMENTS, POINT_LIGHTS, SUN,
    TERRAIN_COLOR, TERRAIN_NAME,
};
use crate::entity::{EntityDesc, EntityHandle, EntityKind};
use crate::error::SceneError;
use crate::placement::{place_block, place_giant_tree, place_tree, scatter_tree_positions};

/// Which population steps run, and with what parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    pub create_terrain: bool,
    pub create_objects: bool,
    pub create_mountains: bool,
    pub create_forest: bool,
    pub setup_lighting: bool,
    pub setup_camera: bool,
    pub number_of_trees: u32,
    pub scatter_seed: u64,
    /// Multiplier from raw elevation to world height.
    pub vertical_scale: f32,
}

impl From<&Config> for SceneOptions {
    fn from(config: &Config) -> Self {
        let scene = &config.scene;
        Self {
            create_terrain: scene.create_terrain,
            create_objects: scene.create_objects,
            create_mountains: scene.create_mountains,
            create_forest: scene.create_forest,
            setup_lighting: scene.setup_lighting,
            setup_camera: scene.setup_camera,
            number_of_trees: scene.number_of_trees,
            scatter_seed: scene.scatter_seed,
            vertical_scale: config.terrain.max_height as f32,
        }
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Counts of what a session currently owns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneSummary {
    /// Every owned entity, children included.
    pub entities: usize,
    /// Tagged root entities per tag.
    pub by_tag: BTreeMap<&'static str, usize>,
}

impl SceneSummary {
    pub fn count(&self, tag: &str) -> usize {
        self.by_tag.get(tag).copied().unwrap_or(0)
    }
}

/// Populates a backend from the terrain and declarative tables, and remembers
/// exactly which entities it created.
///
/// The terrain sampler is passed in explicitly; every placement in the session
/// reads from it. Entities the session did not create, such as a camera that
/// already existed, are never despawned by [`SceneSession::teardown`].
pub struct SceneSession {
    sampler: TerrainSampler,
    options: SceneOptions,
    owned: Vec<EntityHandle>,
    tagged_roots: Vec<(EntityHandle, &'static str)>,
}

impl SceneSession {
    pub fn new(sampler: TerrainSampler, options: SceneOptions) -> Self {
        Self {
            sampler,
            options,
            owned: Vec::new(),
            tagged_roots: Vec::new(),
        }
    }

    pub fn sampler(&self) -> &TerrainSampler {
        &self.sampler
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    /// Handles this session spawned, in spawn order.
    pub fn owned(&self) -> &[EntityHandle] {
        &self.owned
    }

    pub fn summary(&self) -> SceneSummary {
        let mut by_tag = BTreeMap::new();
        for (_, tag) in &self.tagged_roots {
            *by_tag.entry(*tag).or_insert(0) += 1;
        }
        SceneSummary {
            entities: self.owned.len(),
            by_tag,
        }
    }

    /// Run every enabled population step. An already populated session is
    /// torn down first.
    pub fn populate<B: SceneBackend>(&mut self, backend: &mut B) {
        if !self.owned.is_empty() {
            tracing::warn!(owned = self.owned.len(), "session already populated, tearing down first");
            self.teardown(backend);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.options.scatter_seed);

        if self.options.create_terrain {
            self.spawn_terrain(backend);
        }
        if self.options.create_objects {
            self.place_city(backend);
            if self.options.create_mountains {
                self.place_mountains(backend);
            }
            if self.options.create_forest {
                self.plant_forest(backend, &mut rng);
            }
        }
        if self.options.setup_lighting {
            self.setup_lighting(backend);
        }
        if self.options.setup_camera {
            self.setup_camera(backend);
        }

        tracing::info!(entities = self.owned.len(), "scene populated");
    }

    /// Despawn everything this session created. Returns how many entities
    /// were still present in the backend.
    pub fn teardown<B: SceneBackend>(&mut self, backend: &mut B) -> usize {
        // Children were spawned after their parents, so reverse order removes leaves first.
        let removed = self
            .owned
            .drain(..)
            .rev()
            .filter(|&handle| backend.despawn(handle))
            .count();
        self.tagged_roots.clear();
        tracing::info!(removed, "scene torn down");
        removed
    }

    /// Tear down and populate again from the same seed.
    pub fn regenerate<B: SceneBackend>(&mut self, backend: &mut B) {
        self.teardown(backend);
        self.populate(backend);
    }

    fn track(&mut self, handle: EntityHandle) {
        self.owned.push(handle);
    }

    fn track_root(&mut self, handle: EntityHandle, tag: &'static str) {
        self.owned.push(handle);
        self.tagged_roots.push((handle, tag));
    }

    fn spawn_terrain<B: SceneBackend>(&mut self, backend: &mut B) {
        let Some(field) = self.sampler.field() else {
            tracing::warn!("terrain requested but the sampler has no height field");
            return;
        };
        let size = field.world_size();
        tracing::info!(
            resolution = field.resolution(),
            min = field.min(),
            max = field.max(),
            "spawning terrain"
        );

        let desc = EntityDesc::new(TERRAIN_NAME, EntityKind::Terrain)
            .with_position(self.sampler.origin().as_vec3())
            .with_scale(Vec3::new(size.x as f32, self.options.vertical_scale, size.y as f32))
            .with_color(TERRAIN_COLOR);
        let handle = backend.spawn(desc);
        self.track(handle);
    }

    fn place_city<B: SceneBackend>(&mut self, backend: &mut B) {
        for placement in &CITY_PLACEMENTS {
            let handle = place_block(backend, &self.sampler, self.options.vertical_scale, placement);
            self.track_root(handle, placement.category.tag());
        }
        tracing::info!(count = CITY_PLACEMENTS.len(), "city placed");
    }

    fn place_mountains<B: SceneBackend>(&mut self, backend: &mut B) {
        for placement in &MOUNTAIN_PLACEMENTS {
            let handle = place_block(backend, &self.sampler, self.options.vertical_scale, placement);
            self.track_root(handle, placement.category.tag());
        }
        tracing::info!(count = MOUNTAIN_PLACEMENTS.len(), "mountain range placed");
    }

    fn plant_forest<B: SceneBackend>(&mut self, backend: &mut B, rng: &mut ChaCha8Rng) {
        let scale = self.options.vertical_scale;
        let positions = scatter_tree_positions(self.options.number_of_trees, rng);

        for (i, (x, z)) in positions.iter().enumerate() {
            let name = format!("Tree_{}", i + 1);
            let handles = place_tree(backend, &self.sampler, scale, &name, *x, *z, rng);
            self.adopt_tree(handles, Category::Tree.tag());
        }
        for (name, x, z) in GIANT_TREES {
            let handles = place_giant_tree(backend, &self.sampler, scale, name, x, z, rng);
            self.adopt_tree(handles, Category::GiantTree.tag());
        }

        tracing::info!(
            trees = positions.len(),
            giant_trees = GIANT_TREES.len(),
            "forest planted"
        );
    }

    fn adopt_tree(&mut self, handles: Vec<EntityHandle>, tag: &'static str) {
        let mut handles = handles.into_iter();
        if let Some(root) = handles.next() {
            self.track_root(root, tag);
        }
        self.owned.extend(handles);
    }

    fn setup_lighting<B: SceneBackend>(&mut self, backend: &mut B) {
        let sun = backend.spawn(
            EntityDesc::new(
                SUN.name,
                EntityKind::DirectionalLight {
                    intensity: SUN.intensity,
                },
            )
            .with_rotation(SUN.rotation)
            .with_color(SUN.color),
        );
        self.track(sun);

        backend.set_ambient(AMBIENT);

        for light in &POINT_LIGHTS {
            let handle = backend.spawn(
                EntityDesc::new(
                    light.name,
                    EntityKind::PointLight {
                        intensity: light.intensity,
                        range: light.range,
                    },
                )
                .with_position(light.position)
                .with_color(light.color),
            );
            self.track(handle);
        }
        tracing::info!(point_lights = POINT_LIGHTS.len(), "lighting configured");
    }

    fn setup_camera<B: SceneBackend>(&mut self, backend: &mut B) {
        if let Some(existing) = backend.main_camera()
            && backend.aim_camera(existing, CAMERA.position, CAMERA.look_at)
        {
            tracing::debug!(id = existing.0, "reusing existing main camera");
            return;
        }

        let handle = backend.spawn(
            EntityDesc::new(
                CAMERA.name,
                EntityKind::Camera {
                    look_at: CAMERA.look_at,
                    fov_degrees: CAMERA.fov_degrees,
                    near: CAMERA.near,
                    far: CAMERA.far,
                },
            )
            .with_position(CAMERA.position)
            .with_tag(MAIN_CAMERA_TAG),
        );
        self.track(handle);
        tracing::info!("panoramic camera created");
    }
}

/// Generate the terrain described by `config` and populate a fresh in-memory scene.
pub fn build_scene(config: &Config) -> Result<(SceneSession, MemoryBackend), SceneError> {
    let max_height = config.terrain.max_height;
    if !(0.0..=f64::from(f32::MAX)).contains(&max_height) {
        return Err(SceneError::InvalidVerticalScale(max_height));
    }

    let options = SceneOptions::from(config);
    let sampler = if options.create_terrain {
        let size = DVec2::new(config.terrain.width, config.terrain.depth);
        let field = generate_height_field(config.terrain.resolution, size, config.terrain.seed)?;
        TerrainSampler::new(Arc::new(field), DVec3::ZERO)
    } else {
        TerrainSampler::empty()
    };

    let mut backend = MemoryBackend::new();
    let mut session = SceneSession::new(sampler, options);
    session.populate(&mut backend);
    Ok((session, backend))
}
