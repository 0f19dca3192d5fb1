//! Colours and surface parameters attached to scene entities.

/// Linear RGB colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Metallic/smoothness pair for block materials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub metallic: f32,
    pub smoothness: f32,
}

impl Surface {
    /// Gray and white blocks read as glass-and-steel; everything else is matte.
    pub fn for_color(color: Color) -> Self {
        if color == Color::GRAY || color == Color::WHITE {
            Self {
                metallic: 0.3,
                smoothness: 0.6,
            }
        } else {
            Self {
                metallic: 0.1,
                smoothness: 0.3,
            }
        }
    }
}

/// Three-colour gradient ambient light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrilightAmbient {
    pub sky: Color,
    pub equator: Color,
    pub ground: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_and_white_are_shiny() {
        assert_eq!(Surface::for_color(Color::GRAY).metallic, 0.3);
        assert_eq!(Surface::for_color(Color::WHITE).smoothness, 0.6);
    }

    #[test]
    fn test_other_colors_are_matte() {
        let surface = Surface::for_color(Color::rgb(0.6, 0.6, 0.7));
        assert_eq!(surface.metallic, 0.1);
        assert_eq!(surface.smoothness, 0.3);
        assert_eq!(Surface::for_color(Color::RED).metallic, 0.1);
    }
}
