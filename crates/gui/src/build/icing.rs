use glam::Vec3;

use super::consts::*;
use crate::scene::{Material, Node, Primitive};

/// Falling icing disc shown while a color transition runs
pub fn build_icing(color: [f32; 3]) -> Node {
    Node::mesh(
        ICING_NODE,
        Primitive::Cylinder {
            radius_top: BASE_RADIUS,
            radius_bottom: BASE_RADIUS,
            height: ICING_HEIGHT,
            segments: DISC_SEGMENTS,
        },
        Material::new(color, DISC_ROUGHNESS),
    )
    .at(Vec3::new(0.0, ICING_START_Y, 0.0))
    .scaled(Vec3::new(ICING_START_SCALE, 1.0, ICING_START_SCALE))
}
