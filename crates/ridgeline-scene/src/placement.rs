//! Terrain-relative placement of blocks and trees.

use glam::Vec3;
use rand::Rng;
use ridgeline_terrain::TerrainSampler;

use crate::backend::SceneBackend;
use crate::catalog::{Category, Placement};
use crate::color::{Color, Surface};
use crate::entity::{EntityDesc, EntityHandle, EntityKind};

const TRUNK_COLOR: Color = Color::rgb(0.4, 0.2, 0.1);
const GIANT_TRUNK_COLOR: Color = Color::rgb(0.3, 0.15, 0.05);
const GIANT_FOLIAGE_COLOR: Color = Color::rgb(0.1, 0.5, 0.1);
const FOLIAGE_GREENS: [Color; 4] = [
    Color::rgb(0.2, 0.6, 0.2),
    Color::rgb(0.1, 0.7, 0.1),
    Color::rgb(0.3, 0.5, 0.2),
    Color::rgb(0.15, 0.65, 0.15),
];

/// Rectangular scatter band receiving a share of the trees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeZone {
    /// Cumulative share of the tree count up to and including this band.
    pub cumulative_share: f64,
    pub x: (f32, f32),
    pub z: (f32, f32),
}

/// Forest belt, mountain foothills, then scattered city trees.
pub const TREE_ZONES: [TreeZone; 3] = [
    TreeZone {
        cumulative_share: 0.6,
        x: (20.0, 280.0),
        z: (80.0, 160.0),
    },
    TreeZone {
        cumulative_share: 0.8,
        x: (60.0, 240.0),
        z: (160.0, 200.0),
    },
    TreeZone {
        cumulative_share: 1.0,
        x: (10.0, 90.0),
        z: (10.0, 80.0),
    },
];

/// World-space ground height at `(x, z)`.
pub fn rest_height(sampler: &TerrainSampler, x: f32, z: f32, vertical_scale: f32) -> f32 {
    sampler.world_height_at(f64::from(x), f64::from(z), f64::from(vertical_scale)) as f32
}

/// Spawn a cube for `placement`, centred so its base rests on the ground.
pub fn place_block<B: SceneBackend>(
    backend: &mut B,
    sampler: &TerrainSampler,
    vertical_scale: f32,
    placement: &Placement,
) -> EntityHandle {
    let ground = rest_height(sampler, placement.x, placement.z, vertical_scale);
    let center = Vec3::new(placement.x, ground + placement.scale.y * 0.5, placement.z);

    backend.spawn(
        EntityDesc::new(placement.name, EntityKind::Cube)
            .with_position(center)
            .with_scale(placement.scale)
            .with_color(placement.color)
            .with_surface(Surface::for_color(placement.color))
            .with_tag(placement.category.tag()),
    )
}

/// Spawn a regular tree (trunk plus foliage) rooted on the ground.
///
/// Returns every handle created, root first.
pub fn place_tree<B: SceneBackend, R: Rng>(
    backend: &mut B,
    sampler: &TerrainSampler,
    vertical_scale: f32,
    name: &str,
    x: f32,
    z: f32,
    rng: &mut R,
) -> Vec<EntityHandle> {
    let ground = rest_height(sampler, x, z, vertical_scale);
    let root = backend.spawn(
        EntityDesc::new(name, EntityKind::Group)
            .with_position(Vec3::new(x, ground, z))
            .with_tag(Category::Tree.tag()),
    );

    let trunk = backend.spawn(
        EntityDesc::new(format!("{name}_Trunk"), EntityKind::Cylinder)
            .with_parent(root)
            .with_scale(Vec3::new(0.5, 3.0, 0.5))
            .with_color(TRUNK_COLOR),
    );

    let foliage_size = rng.random_range(2.0..4.0);
    let green = FOLIAGE_GREENS[rng.random_range(0..FOLIAGE_GREENS.len())];
    let foliage = backend.spawn(
        EntityDesc::new(format!("{name}_Foliage"), EntityKind::Sphere)
            .with_parent(root)
            .with_position(Vec3::new(0.0, 4.0, 0.0))
            .with_scale(Vec3::splat(foliage_size))
            .with_color(green),
    );

    vec![root, trunk, foliage]
}

/// Spawn a giant tree with a thick trunk, a wide crown and three branch clusters.
///
/// Returns every handle created, root first.
pub fn place_giant_tree<B: SceneBackend, R: Rng>(
    backend: &mut B,
    sampler: &TerrainSampler,
    vertical_scale: f32,
    name: &str,
    x: f32,
    z: f32,
    rng: &mut R,
) -> Vec<EntityHandle> {
    let ground = rest_height(sampler, x, z, vertical_scale);
    let root = backend.spawn(
        EntityDesc::new(name, EntityKind::Group)
            .with_position(Vec3::new(x, ground, z))
            .with_tag(Category::GiantTree.tag()),
    );
    let mut handles = vec![root];

    handles.push(
        backend.spawn(
            EntityDesc::new(format!("{name}_Trunk"), EntityKind::Cylinder)
                .with_parent(root)
                .with_scale(Vec3::new(1.5, 8.0, 1.5))
                .with_color(GIANT_TRUNK_COLOR),
        ),
    );
    handles.push(
        backend.spawn(
            EntityDesc::new(format!("{name}_Foliage"), EntityKind::Sphere)
                .with_parent(root)
                .with_position(Vec3::new(0.0, 10.0, 0.0))
                .with_scale(Vec3::new(8.0, 6.0, 8.0))
                .with_color(GIANT_FOLIAGE_COLOR),
        ),
    );

    for i in 0..3 {
        let offset = Vec3::new(
            rng.random_range(-3.0..3.0),
            rng.random_range(8.0..12.0),
            rng.random_range(-3.0..3.0),
        );
        let size = rng.random_range(3.0..5.0);
        handles.push(
            backend.spawn(
                EntityDesc::new(format!("{name}_Branch_{i}"), EntityKind::Sphere)
                    .with_parent(root)
                    .with_position(offset)
                    .with_scale(Vec3::splat(size))
                    .with_color(GIANT_FOLIAGE_COLOR),
            ),
        );
    }

    handles
}

/// Draw `count` tree positions `(x, z)` spread across [`TREE_ZONES`].
pub fn scatter_tree_positions<R: Rng>(count: u32, rng: &mut R) -> Vec<(f32, f32)> {
    let total = f64::from(count);
    (0..count)
        .map(|i| {
            let i = f64::from(i);
            let zone = TREE_ZONES
                .iter()
                .copied()
                .find(|zone| i < total * zone.cumulative_share)
                .unwrap_or(TREE_ZONES[TREE_ZONES.len() - 1]);
            (
                rng.random_range(zone.x.0..zone.x.1),
                rng.random_range(zone.z.0..zone.z.1),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::catalog::CITY_PLACEMENTS;
    use glam::{DVec2, DVec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ridgeline_terrain::HeightField;
    use std::sync::Arc;

    /// Flat terrain at raw elevation `h` over a 300x300 footprint.
    fn flat_sampler(h: f64) -> TerrainSampler {
        let field = HeightField::from_values(2, DVec2::new(300.0, 300.0), vec![h; 4]).unwrap();
        TerrainSampler::new(Arc::new(field), DVec3::ZERO)
    }

    #[test]
    fn test_block_rests_on_ground() {
        let mut backend = MemoryBackend::new();
        let sampler = flat_sampler(0.1);
        let skyscraper = CITY_PLACEMENTS[0];
        let handle = place_block(&mut backend, &sampler, 50.0, &skyscraper);

        let desc = backend.get(handle).unwrap();
        // Ground is 0.1 * 50 = 5; half of the 50-unit height is 25.
        assert!((desc.position.y - 30.0).abs() < 1e-4);
        assert_eq!(desc.position.x, 50.0);
        assert_eq!(desc.position.z, 30.0);
        assert_eq!(desc.tag, Some("Building"));
        assert_eq!(desc.kind, EntityKind::Cube);
        assert_eq!(desc.surface, Some(Surface::for_color(skyscraper.color)));
    }

    #[test]
    fn test_block_without_terrain_sits_on_zero() {
        let mut backend = MemoryBackend::new();
        let handle = place_block(&mut backend, &TerrainSampler::empty(), 50.0, &CITY_PLACEMENTS[7]);
        assert_eq!(backend.get(handle).unwrap().position.y, 3.0);
    }

    #[test]
    fn test_tree_structure() {
        let mut backend = MemoryBackend::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let handles = place_tree(&mut backend, &flat_sampler(0.2), 50.0, "Tree_1", 100.0, 100.0, &mut rng);
        assert_eq!(handles.len(), 3);

        let root = backend.get(handles[0]).unwrap();
        assert_eq!(root.kind, EntityKind::Group);
        assert_eq!(root.tag, Some("Tree"));
        assert!((root.position.y - 10.0).abs() < 1e-4);

        let foliage = backend.get(handles[2]).unwrap();
        assert_eq!(foliage.name, "Tree_1_Foliage");
        assert_eq!(foliage.parent, Some(handles[0]));
        assert!((2.0..4.0).contains(&foliage.scale.x));
        assert!(FOLIAGE_GREENS.contains(&foliage.color.unwrap()));
    }

    #[test]
    fn test_giant_tree_has_three_branches() {
        let mut backend = MemoryBackend::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let handles =
            place_giant_tree(&mut backend, &flat_sampler(0.0), 50.0, "Giant_Oak_1", 45.0, 90.0, &mut rng);
        assert_eq!(handles.len(), 6);
        assert_eq!(backend.get(handles[0]).unwrap().tag, Some("GiantTree"));

        let branches: Vec<_> = backend
            .children(handles[0])
            .filter(|(_, d)| d.name.contains("_Branch_"))
            .collect();
        assert_eq!(branches.len(), 3);
        for (_, branch) in branches {
            assert!((-3.0..3.0).contains(&branch.position.x));
            assert!((8.0..12.0).contains(&branch.position.y));
            assert!((3.0..5.0).contains(&branch.scale.x));
        }
    }

    #[test]
    fn test_scatter_split_between_zones() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let positions = scatter_tree_positions(50, &mut rng);
        assert_eq!(positions.len(), 50);

        let inside = |zone: &TreeZone, (x, z): (f32, f32)| {
            (zone.x.0..zone.x.1).contains(&x) && (zone.z.0..zone.z.1).contains(&z)
        };
        assert!(positions[..30].iter().all(|&p| inside(&TREE_ZONES[0], p)));
        assert!(positions[30..40].iter().all(|&p| inside(&TREE_ZONES[1], p)));
        assert!(positions[40..].iter().all(|&p| inside(&TREE_ZONES[2], p)));
    }

    #[test]
    fn test_scatter_is_reproducible() {
        let a = scatter_tree_positions(20, &mut ChaCha8Rng::seed_from_u64(9));
        let b = scatter_tree_positions(20, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(scatter_tree_positions(0, &mut ChaCha8Rng::seed_from_u64(9)).is_empty());
    }
}
