//! Placeholder geometry for previewing nodes.

/// Primitive used to draw a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
}

/// How a node is drawn: a primitive and a flat RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: [u8; 4],
}

impl Shape {
    pub const fn new(kind: ShapeKind, color: [u8; 4]) -> Self {
        Self { kind, color }
    }

    /// Shape for a node, picked by name. Unknown names get a grey cube.
    pub fn for_node(name: &str) -> Self {
        match name {
            "character" => Self::new(ShapeKind::Cube, [60, 180, 75, 255]),
            "solo" => Self::new(ShapeKind::Cube, [70, 110, 230, 255]),
            "sphere_one" => Self::new(ShapeKind::Sphere, [230, 230, 230, 255]),
            "sphere_two" => Self::new(ShapeKind::Sphere, [200, 200, 120, 255]),
            "ship" => Self::new(ShapeKind::Cube, [220, 80, 60, 255]),
            _ => Self::new(ShapeKind::Cube, [128, 128, 128, 255]),
        }
    }

    /// Check if nodes with this name are drawn at all.
    ///
    /// The camera has no body of its own.
    pub fn is_visible(name: &str) -> bool {
        name != "camera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spheres_are_spheres() {
        assert_eq!(Shape::for_node("sphere_one").kind, ShapeKind::Sphere);
        assert_eq!(Shape::for_node("sphere_two").kind, ShapeKind::Sphere);
        assert_eq!(Shape::for_node("character").kind, ShapeKind::Cube);
    }

    #[test]
    fn test_unknown_node_is_grey() {
        assert_eq!(Shape::for_node("mystery").color, [128, 128, 128, 255]);
    }

    #[test]
    fn test_camera_hidden() {
        assert!(!Shape::is_visible("camera"));
        assert!(Shape::is_visible("ship"));
    }
}
