//! Tiered showcase cake: three stepped tiers with pearl rings and a ribbon,
//! animated with an idle spin and a small per-tier wobble.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use shared::{CakeShape, HexColor};

use super::consts::*;
use crate::scene::{Material, Node, Primitive};

/// Top radius of tier `i`
pub fn tier_radius(shape: CakeShape, i: usize) -> f32 {
    match shape {
        CakeShape::Triangle => TIER_RADIUS * (1.0 - TRIANGLE_TIER_SHRINK * (i + 1) as f32),
        _ => TIER_RADIUS * (1.0 - TIER_SHRINK * i as f32),
    }
}

fn tier_height(shape: CakeShape) -> f32 {
    match shape {
        CakeShape::Triangle => TIER_HEIGHT * TRIANGLE_TIER_STRETCH,
        _ => TIER_HEIGHT,
    }
}

/// Center height of tier `i`. Spacing ignores the triangle stretch.
pub fn tier_y(i: usize) -> f32 {
    TIER_BOTTOM_Y + i as f32 * (TIER_HEIGHT + TIER_GAP)
}

fn tier_primitive(shape: CakeShape, radius: f32, height: f32) -> Primitive {
    match shape {
        CakeShape::Square => Primitive::Box {
            width: radius * 2.0,
            height,
            depth: radius * 2.0,
        },
        CakeShape::Triangle => Primitive::Cone {
            radius,
            height: height * TRIANGLE_CONE_STRETCH,
            segments: 3,
        },
        CakeShape::Heart => Primitive::Sphere {
            radius,
            width_segments: HEART_TIER_SEGMENTS.0,
            height_segments: HEART_TIER_SEGMENTS.1,
        },
        CakeShape::Circle => Primitive::Cylinder {
            radius_top: radius,
            radius_bottom: radius + TIER_FLARE,
            height,
            segments: TIER_SEGMENTS,
        },
    }
}

fn add_pearl_ring(group: &mut Node, shape: CakeShape, tier: usize, radius: f32, y: f32) {
    let count = PEARL_BASE_COUNT + tier * PEARL_COUNT_STEP;
    let ring = radius
        * match shape {
            CakeShape::Square => SQUARE_PEARL_RING_SCALE,
            _ => PEARL_RING_SCALE,
        };
    let material = Material {
        color: [1.0, 1.0, 1.0],
        roughness: PEARL_ROUGHNESS,
        metalness: PEARL_METALNESS,
    };
    for j in 0..count {
        let theta = j as f32 / count as f32 * TAU;
        let pearl = Node::mesh(
            format!("pearl{tier}_{j}"),
            Primitive::Sphere {
                radius: PEARL_RADIUS,
                width_segments: PEARL_SEGMENTS.0,
                height_segments: PEARL_SEGMENTS.1,
            },
            material,
        )
        .at(Vec3::new(ring * theta.cos(), y, ring * theta.sin()));
        group.add_child(pearl);
    }
}

/// Build the showcase cake. Hearts get no pearls and triangles no ribbon.
pub fn build_tiered_preview(shape: CakeShape, color: HexColor) -> Node {
    let mut group = Node::group(PREVIEW_NODE);
    let height = tier_height(shape);
    let tier_material = Material {
        color: color.to_rgb(),
        roughness: TIER_ROUGHNESS,
        metalness: TIER_METALNESS,
    };

    for i in 0..PREVIEW_TIERS {
        let radius = tier_radius(shape, i);
        let y = tier_y(i);
        let tier = Node::mesh(
            format!("tier{i}"),
            tier_primitive(shape, radius, height),
            tier_material,
        )
        .at(Vec3::new(0.0, y, 0.0));
        group.add_child(tier);

        if shape != CakeShape::Heart {
            add_pearl_ring(&mut group, shape, i, radius, y + height * PEARL_LIFT);
        }
    }

    if shape != CakeShape::Triangle {
        let [r, g, b] = RIBBON_COLOR;
        let ribbon = Node::mesh(
            RIBBON_NODE,
            Primitive::Torus {
                radius: RIBBON_RADIUS,
                tube: RIBBON_TUBE,
                radial_segments: RIBBON_SEGMENTS.0,
                tubular_segments: RIBBON_SEGMENTS.1,
            },
            Material {
                color: HexColor::from_rgb(r, g, b).to_rgb(),
                roughness: RIBBON_ROUGHNESS,
                metalness: RIBBON_METALNESS,
            },
        )
        // Upright ring facing the camera
        .at(Vec3::new(0.0, tier_y(1) + TIER_HEIGHT * RIBBON_LIFT, 0.0))
        .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0));
        group.add_child(ribbon);
    }

    group
}

/// Advance the idle animation to `frame`: spin the whole group and wobble
/// each tier around its own axis.
pub fn animate_preview(preview: &mut Node, frame: u64) {
    preview.transform.rotation.y += PREVIEW_SPIN;
    let t = frame as f32 * PREVIEW_FRAME_SECONDS;

    for i in 0..PREVIEW_TIERS {
        let Some(tier) = preview.child_mut(&format!("tier{i}")) else {
            continue;
        };
        let k = i as f32;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        tier.transform.rotation.y = (t * (0.8 + k * 0.2)).sin() * WOBBLE_YAW * sign;
        tier.transform.scale.x = 1.0 + (t * (1.0 + k * 0.3)).sin() * WOBBLE_SCALE;
        tier.transform.scale.z = 1.0 + (t * (1.1 + k * 0.25)).cos() * WOBBLE_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(node: &Node) -> Vec<&Node> {
        node.children
            .iter()
            .filter(|c| c.name.starts_with("tier"))
            .collect()
    }

    fn pearls(node: &Node, tier: usize) -> usize {
        let prefix = format!("pearl{tier}_");
        node.children
            .iter()
            .filter(|c| c.name.starts_with(&prefix))
            .count()
    }

    #[test]
    fn test_three_stepped_tiers() {
        let preview = build_tiered_preview(CakeShape::Circle, HexColor::WHITE);
        let tiers = tiers(&preview);
        assert_eq!(tiers.len(), PREVIEW_TIERS);
        for (i, tier) in tiers.iter().enumerate() {
            assert!((tier.transform.position.y - (-0.33 + i as f32 * 0.24)).abs() < 1e-6);
            match tier.primitive() {
                Some(Primitive::Cylinder {
                    radius_top,
                    radius_bottom,
                    ..
                }) => {
                    assert!((radius_top - 0.9 * (1.0 - 0.2 * i as f32)).abs() < 1e-6);
                    assert!((radius_bottom - radius_top - 0.03).abs() < 1e-6);
                }
                other => panic!("unexpected tier primitive {other:?}"),
            }
        }
    }

    #[test]
    fn test_pearl_rings_grow_per_tier() {
        let preview = build_tiered_preview(CakeShape::Circle, HexColor::WHITE);
        assert_eq!(pearls(&preview, 0), 16);
        assert_eq!(pearls(&preview, 1), 20);
        assert_eq!(pearls(&preview, 2), 24);

        let first = preview.child("pearl1_0").unwrap();
        let expected = tier_radius(CakeShape::Circle, 1) * 1.02;
        assert!((first.transform.position.x - expected).abs() < 1e-6);
        assert!((first.transform.position.y - (tier_y(1) + 0.22 * 0.35)).abs() < 1e-6);
    }

    #[test]
    fn test_square_pearls_sit_wider() {
        let preview = build_tiered_preview(CakeShape::Square, HexColor::WHITE);
        let first = preview.child("pearl0_0").unwrap();
        assert!((first.transform.position.x - 0.9 * 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_ribbon_on_middle_tier() {
        let preview = build_tiered_preview(CakeShape::Circle, HexColor::WHITE);
        let ribbon = preview.child(RIBBON_NODE).unwrap();
        assert!(matches!(ribbon.primitive(), Some(Primitive::Torus { radius, .. }) if *radius == 0.45));
        let y = -0.33 + 0.24 + 0.022;
        assert!((ribbon.transform.position.y - y).abs() < 1e-6);
        assert!((ribbon.transform.rotation.x - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_shape_exceptions() {
        let heart = build_tiered_preview(CakeShape::Heart, HexColor::WHITE);
        assert_eq!(heart.children.len(), PREVIEW_TIERS + 1, "tiers and ribbon only");

        let triangle = build_tiered_preview(CakeShape::Triangle, HexColor::WHITE);
        assert!(triangle.child(RIBBON_NODE).is_none());
        let top = triangle.child("tier0").unwrap();
        assert!(matches!(
            top.primitive(),
            Some(Primitive::Cone { segments: 3, .. })
        ));
        assert!((tier_radius(CakeShape::Triangle, 0) - 0.675).abs() < 1e-6);
    }

    #[test]
    fn test_animation_spins_and_wobbles() {
        let mut preview = build_tiered_preview(CakeShape::Circle, HexColor::WHITE);
        animate_preview(&mut preview, 30);
        animate_preview(&mut preview, 31);
        assert!((preview.transform.rotation.y - 0.03).abs() < 1e-6);

        let t = 31.0 / 60.0;
        let tier1 = preview.child("tier1").unwrap();
        let yaw = -(t * 1.0f32).sin() * 0.05;
        assert!((tier1.transform.rotation.y - yaw).abs() < 1e-6);
        assert!((tier1.transform.scale.x - 1.0).abs() <= 0.01);
        assert_eq!(tier1.transform.scale.y, 1.0);
    }
}
