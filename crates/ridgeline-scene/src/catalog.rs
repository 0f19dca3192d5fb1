//! Declarative tables for the demo scene: what goes where.
//!
//! Positions are world `(x, z)`; the resting height is resolved against the
//! terrain at placement time.

use glam::Vec3;

use crate::color::{Color, TrilightAmbient};

/// Kind of placed object, carried as the entity tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Building,
    Residential,
    House,
    Industrial,
    Commercial,
    Service,
    Monument,
    Decoration,
    Mountain,
    Hill,
    Rock,
    Tree,
    GiantTree,
}

impl Category {
    pub fn tag(self) -> &'static str {
        match self {
            Category::Building => "Building",
            Category::Residential => "Residential",
            Category::House => "House",
            Category::Industrial => "Industrial",
            Category::Commercial => "Commercial",
            Category::Service => "Service",
            Category::Monument => "Monument",
            Category::Decoration => "Decoration",
            Category::Mountain => "Mountain",
            Category::Hill => "Hill",
            Category::Rock => "Rock",
            Category::Tree => "Tree",
            Category::GiantTree => "GiantTree",
        }
    }
}

/// One block resting on the terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub name: &'static str,
    pub x: f32,
    pub z: f32,
    pub scale: Vec3,
    pub color: Color,
    pub category: Category,
}

const fn block(
    name: &'static str,
    x: f32,
    z: f32,
    scale: [f32; 3],
    color: Color,
    category: Category,
) -> Placement {
    Placement {
        name,
        x,
        z,
        scale: Vec3::new(scale[0], scale[1], scale[2]),
        color,
        category,
    }
}

/// Downtown, residential blocks, suburbs and city infrastructure in the south.
pub const CITY_PLACEMENTS: [Placement; 16] = [
    block("Central_Skyscraper", 50.0, 30.0, [8.0, 50.0, 8.0], Color::rgb(0.6, 0.6, 0.7), Category::Building),
    block("Office_Tower_1", 40.0, 40.0, [6.0, 40.0, 6.0], Color::GRAY, Category::Building),
    block("Office_Tower_2", 65.0, 25.0, [5.0, 36.0, 5.0], Color::rgb(0.5, 0.5, 0.6), Category::Building),
    block("Commercial_Building", 30.0, 35.0, [12.0, 24.0, 8.0], Color::rgb(0.7, 0.7, 0.8), Category::Building),
    block("Apartments_1", 20.0, 20.0, [6.0, 16.0, 6.0], Color::rgb(0.8, 0.6, 0.4), Category::Residential),
    block("Apartments_2", 75.0, 35.0, [6.0, 16.0, 6.0], Color::rgb(0.7, 0.5, 0.3), Category::Residential),
    block("Apartments_3", 55.0, 50.0, [5.0, 12.0, 5.0], Color::rgb(0.9, 0.7, 0.5), Category::Residential),
    block("Suburban_House_1", 10.0, 15.0, [4.0, 6.0, 4.0], Color::rgb(0.8, 0.6, 0.4), Category::House),
    block("Suburban_House_2", 85.0, 20.0, [4.0, 6.0, 4.0], Color::rgb(0.7, 0.5, 0.3), Category::House),
    block("Suburban_House_3", 15.0, 55.0, [4.0, 6.0, 4.0], Color::rgb(0.9, 0.7, 0.5), Category::House),
    block("Suburban_House_4", 80.0, 55.0, [4.0, 6.0, 4.0], Color::rgb(0.8, 0.6, 0.4), Category::House),
    block("Industrial_Warehouse", 25.0, 60.0, [15.0, 8.0, 10.0], Color::rgb(0.4, 0.4, 0.4), Category::Industrial),
    block("Shopping_Center", 60.0, 60.0, [20.0, 10.0, 12.0], Color::rgb(0.6, 0.6, 0.6), Category::Commercial),
    block("Service_Station", 45.0, 15.0, [8.0, 4.0, 6.0], Color::RED, Category::Service),
    block("Plaza_Monument", 50.0, 45.0, [2.0, 8.0, 2.0], Color::WHITE, Category::Monument),
    block("Park_Kiosk", 35.0, 50.0, [3.0, 4.0, 3.0], Color::rgb(0.6, 0.3, 0.1), Category::Decoration),
];

/// Peaks, transition hills and rock formations in the north.
pub const MOUNTAIN_PLACEMENTS: [Placement; 12] = [
    block("Main_Peak", 150.0, 220.0, [20.0, 40.0, 20.0], Color::rgb(0.4, 0.4, 0.5), Category::Mountain),
    block("Secondary_Peak_1", 120.0, 200.0, [15.0, 35.0, 15.0], Color::rgb(0.45, 0.45, 0.5), Category::Mountain),
    block("Secondary_Peak_2", 180.0, 240.0, [18.0, 38.0, 18.0], Color::rgb(0.4, 0.4, 0.48), Category::Mountain),
    block("Minor_Peak_1", 100.0, 180.0, [12.0, 25.0, 12.0], Color::rgb(0.5, 0.5, 0.55), Category::Mountain),
    block("Minor_Peak_2", 200.0, 210.0, [14.0, 30.0, 14.0], Color::rgb(0.48, 0.48, 0.52), Category::Mountain),
    block("Minor_Peak_3", 170.0, 180.0, [10.0, 28.0, 10.0], Color::rgb(0.46, 0.46, 0.51), Category::Mountain),
    block("Hill_1", 80.0, 120.0, [25.0, 8.0, 25.0], Color::rgb(0.3, 0.6, 0.2), Category::Hill),
    block("Hill_2", 130.0, 140.0, [30.0, 10.0, 30.0], Color::rgb(0.35, 0.65, 0.25), Category::Hill),
    block("Hill_3", 190.0, 120.0, [28.0, 9.0, 28.0], Color::rgb(0.32, 0.62, 0.22), Category::Hill),
    block("Rock_Formation_1", 110.0, 160.0, [8.0, 18.0, 6.0], Color::rgb(0.3, 0.3, 0.4), Category::Rock),
    block("Rock_Formation_2", 160.0, 190.0, [6.0, 20.0, 8.0], Color::rgb(0.32, 0.32, 0.42), Category::Rock),
    block("Rock_Formation_3", 140.0, 220.0, [7.0, 16.0, 7.0], Color::rgb(0.28, 0.28, 0.38), Category::Rock),
];

/// Named giant trees as `(name, x, z)`.
pub const GIANT_TREES: [(&str, f32, f32); 3] = [
    ("Giant_Oak_1", 45.0, 90.0),
    ("Giant_Oak_2", 120.0, 130.0),
    ("Ancient_Pine", 200.0, 170.0),
];

pub const TERRAIN_NAME: &str = "Mountain City Terrain";
pub const TERRAIN_COLOR: Color = Color::rgb(0.3, 0.6, 0.2);

/// Directional sun light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunDef {
    pub name: &'static str,
    pub intensity: f32,
    pub color: Color,
    /// Euler angles in degrees.
    pub rotation: Vec3,
}

pub const SUN: SunDef = SunDef {
    name: "Sun Light",
    intensity: 1.2,
    color: Color::rgb(1.0, 0.95, 0.8),
    rotation: Vec3::new(45.0, -30.0, 0.0),
};

pub const AMBIENT: TrilightAmbient = TrilightAmbient {
    sky: Color::rgb(0.5, 0.7, 1.0),
    equator: Color::rgb(0.4, 0.4, 0.6),
    ground: Color::rgb(0.2, 0.3, 0.3),
};

/// Point light at an absolute world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLightDef {
    pub name: &'static str,
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
}

pub const POINT_LIGHTS: [PointLightDef; 3] = [
    PointLightDef {
        name: "Building_Light_1",
        position: Vec3::new(20.0, 15.0, 20.0),
        color: Color::YELLOW,
        intensity: 8.0,
        range: 15.0,
    },
    PointLightDef {
        name: "Building_Light_2",
        position: Vec3::new(40.0, 12.0, 25.0),
        color: Color::CYAN,
        intensity: 6.0,
        range: 12.0,
    },
    PointLightDef {
        name: "Tower_Light",
        position: Vec3::new(90.0, 20.0, 90.0),
        color: Color::RED,
        intensity: 10.0,
        range: 25.0,
    },
];

/// Panoramic camera pose and lens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub name: &'static str,
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

pub const CAMERA: CameraRig = CameraRig {
    name: "Main Camera",
    position: Vec3::new(150.0, 60.0, 0.0),
    look_at: Vec3::new(150.0, 20.0, 150.0),
    fov_degrees: 75.0,
    near: 0.3,
    far: 2000.0,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CITY_PLACEMENTS
            .iter()
            .chain(MOUNTAIN_PLACEMENTS.iter())
            .map(|p| p.name)
            .chain(GIANT_TREES.iter().map(|(name, _, _)| *name))
            .collect();
        assert_eq!(names.len(), CITY_PLACEMENTS.len() + MOUNTAIN_PLACEMENTS.len() + 3);
    }

    #[test]
    fn test_city_sits_in_the_south() {
        assert!(CITY_PLACEMENTS.iter().all(|p| p.z <= 0.4 * 300.0));
    }

    #[test]
    fn test_peaks_sit_in_the_north() {
        assert!(
            MOUNTAIN_PLACEMENTS
                .iter()
                .filter(|p| p.category == Category::Mountain)
                .all(|p| p.z > 0.55 * 300.0)
        );
    }

    #[test]
    fn test_scales_are_positive() {
        assert!(
            CITY_PLACEMENTS
                .iter()
                .chain(MOUNTAIN_PLACEMENTS.iter())
                .all(|p| p.scale.min_element() > 0.0)
        );
    }
}
