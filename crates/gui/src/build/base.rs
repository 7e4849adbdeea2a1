//! Base geometry: one solid per shape, scaled by the selected height

use glam::Vec3;
use shared::{CakeShape, HexColor};

use super::consts::*;
use crate::scene::{Material, Node, Primitive};

/// Geometry of the base solid for a shape
pub fn base_primitive(shape: CakeShape) -> Primitive {
    match shape {
        CakeShape::Circle => Primitive::Cylinder {
            radius_top: BASE_RADIUS,
            radius_bottom: BASE_RADIUS,
            height: BASE_HEIGHT,
            segments: BASE_SEGMENTS,
        },
        CakeShape::Square => Primitive::Box {
            width: BASE_RADIUS * 2.0,
            height: BASE_HEIGHT,
            depth: BASE_RADIUS * 2.0,
        },
        CakeShape::Triangle => Primitive::Cone {
            radius: BASE_RADIUS,
            height: BASE_HEIGHT,
            segments: 3,
        },
        // No dedicated heart mesh; a sphere stands in
        CakeShape::Heart => Primitive::Sphere {
            radius: BASE_RADIUS,
            width_segments: BASE_SEGMENTS,
            height_segments: BASE_SEGMENTS / 2,
        },
    }
}

/// Node scale for a height factor (inches / 6)
pub fn base_scale(height_factor: f32) -> Vec3 {
    Vec3::new(BASE_SCALE, BASE_SCALE * height_factor, BASE_SCALE)
}

/// Build a fresh base mesh at the origin with no children
pub fn build_base(shape: CakeShape, height_factor: f32, color: HexColor) -> Node {
    Node::mesh(
        BASE_NODE,
        base_primitive(shape),
        Material::new(color.to_rgb(), BASE_ROUGHNESS),
    )
    .scaled(base_scale(height_factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::HeightInches;

    #[test]
    fn test_vertical_scale_follows_height_ratio() {
        for h in HeightInches::all() {
            let node = build_base(CakeShape::Circle, h.scale_factor(), HexColor::WHITE);
            let expected = BASE_SCALE * (h.inches() as f32 / 6.0);
            assert_eq!(node.transform.scale.y, expected);
            assert_eq!(node.transform.scale.x, BASE_SCALE);
            assert_eq!(node.transform.scale.z, BASE_SCALE);
        }
    }

    #[test]
    fn test_six_inches_is_unit_multiplier() {
        let h = HeightInches::new(6).unwrap();
        let node = build_base(CakeShape::Circle, h.scale_factor(), HexColor::WHITE);
        assert_eq!(node.transform.scale.y, BASE_SCALE);
    }

    #[test]
    fn test_circle_is_cylinder() {
        let node = build_base(CakeShape::Circle, 1.0, HexColor::WHITE);
        assert_eq!(
            node.primitive(),
            Some(&Primitive::Cylinder {
                radius_top: 1.1,
                radius_bottom: 1.1,
                height: 0.5,
                segments: 48,
            })
        );
        let mat = node.material().unwrap();
        assert_eq!(mat.color, [1.0, 1.0, 1.0]);
        assert_eq!(mat.roughness, 0.9);
        assert_eq!(mat.metalness, 0.0);
    }

    #[test]
    fn test_alternate_shapes() {
        assert!(matches!(base_primitive(CakeShape::Square), Primitive::Box { .. }));
        assert!(matches!(
            base_primitive(CakeShape::Triangle),
            Primitive::Cone { segments: 3, .. }
        ));
        assert!(matches!(base_primitive(CakeShape::Heart), Primitive::Sphere { .. }));
    }
}
