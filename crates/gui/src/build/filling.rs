//! Top filling: a flat disc plus tapered drips hanging over the rim

use glam::Vec3;
use rand::Rng;
use shared::HexColor;

use super::consts::*;
use crate::scene::{Material, Node, Primitive};

/// Yaw that turns a node's local +Z toward the vertical axis at (x, z)
pub fn yaw_toward_center(x: f32, z: f32) -> f32 {
    (-x).atan2(-z)
}

/// Build the `filling` group: disc + DRIP_COUNT drips
pub fn build_filling<R: Rng + ?Sized>(color: HexColor, rng: &mut R) -> Node {
    let rgb = color.to_rgb();
    let mut group = Node::group(FILLING_GROUP);

    let disc = Node::mesh(
        "disc",
        Primitive::Cylinder {
            radius_top: BASE_RADIUS,
            radius_bottom: BASE_RADIUS,
            height: DISC_HEIGHT,
            segments: DISC_SEGMENTS,
        },
        Material::new(rgb, DISC_ROUGHNESS),
    )
    .at(Vec3::new(0.0, FILLING_TOP_Y, 0.0));
    group.add_child(disc);

    let drip_material = Material::new(rgb, DRIP_ROUGHNESS);
    for i in 0..DRIP_COUNT {
        let jitter = rng.gen::<f32>() * 2.0 * DRIP_JITTER - DRIP_JITTER;
        let angle = (i as f32 / DRIP_COUNT as f32) * std::f32::consts::TAU + jitter;
        let length = DRIP_MIN_LENGTH + rng.gen::<f32>() * DRIP_LENGTH_RANGE;
        let radius_top = DRIP_MIN_TOP_RADIUS + rng.gen::<f32>() * DRIP_TOP_RADIUS_RANGE;

        let x = angle.cos() * DRIP_RIM_RADIUS;
        let z = angle.sin() * DRIP_RIM_RADIUS;

        let drip = Node::mesh(
            format!("drip{i}"),
            Primitive::Cylinder {
                radius_top,
                radius_bottom: radius_top * DRIP_TAPER,
                height: length,
                segments: DRIP_SEGMENTS,
            },
            drip_material,
        )
        .at(Vec3::new(x, FILLING_TOP_Y - length / 2.0, z))
        .rotated(Vec3::new(0.0, yaw_toward_center(x, z), 0.0));
        group.add_child(drip);
    }

    group
}
