//! Topping generators. Each catalog tag expands into one or more pattern passes.

use glam::Vec3;
use rand::Rng;
use shared::{HexColor, Topping, ToppingPattern};

use super::consts::*;
use crate::scene::{Material, Node, Primitive};

/// Uniform polar sample inside a disc of `radius` (same distribution as r ~ U(0, radius))
fn polar_scatter<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> (f32, f32) {
    let r = rng.gen::<f32>() * radius;
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    (theta.cos() * r, theta.sin() * r)
}

fn add_sprinkles<R: Rng + ?Sized>(group: &mut Node, color: HexColor, rng: &mut R) {
    let material = Material::new(color.to_rgb(), SPRINKLE_ROUGHNESS);
    let [w, h, d] = SPRINKLE_SIZE;
    for _ in 0..SPRINKLE_COUNT {
        let (x, z) = polar_scatter(rng, SPRINKLE_SCATTER_RADIUS);
        let rotation = Vec3::new(
            rng.gen::<f32>() * std::f32::consts::PI,
            rng.gen::<f32>() * std::f32::consts::PI,
            rng.gen::<f32>() * std::f32::consts::PI,
        );
        let sprinkle = Node::mesh(
            "sprinkle",
            Primitive::Box {
                width: w,
                height: h,
                depth: d,
            },
            material,
        )
        .at(Vec3::new(x, TOPPING_TOP_Y + SPRINKLE_LIFT, z))
        .rotated(rotation);
        group.add_child(sprinkle);
    }
}

fn add_nuts<R: Rng + ?Sized>(group: &mut Node, color: HexColor, rng: &mut R) {
    let material = Material::new(color.to_rgb(), NUT_ROUGHNESS);
    for _ in 0..NUT_COUNT {
        let (x, z) = polar_scatter(rng, NUT_SCATTER_RADIUS);
        let radius = NUT_MIN_RADIUS + rng.gen::<f32>() * NUT_RADIUS_RANGE;
        let nut = Node::mesh(
            "nut",
            Primitive::Sphere {
                radius,
                width_segments: NUT_SEGMENTS,
                height_segments: NUT_SEGMENTS,
            },
            material,
        )
        .at(Vec3::new(x, TOPPING_TOP_Y + NUT_LIFT, z));
        group.add_child(nut);
    }
}

fn add_cream_ring(group: &mut Node, color: HexColor) {
    let material = Material::new(color.to_rgb(), CREAM_ROUGHNESS);
    for i in 0..CREAM_DOLLOPS {
        let angle = (i as f32 / CREAM_DOLLOPS as f32) * std::f32::consts::TAU;
        let dollop = Node::mesh(
            "dollop",
            Primitive::Sphere {
                radius: CREAM_DOLLOP_RADIUS,
                width_segments: CREAM_SEGMENTS,
                height_segments: CREAM_SEGMENTS,
            },
            material,
        )
        .at(Vec3::new(
            angle.cos() * CREAM_RING_RADIUS,
            TOPPING_TOP_Y + CREAM_LIFT,
            angle.sin() * CREAM_RING_RADIUS,
        ));
        group.add_child(dollop);
    }
}

/// Run one generator pass into `group`
pub fn add_pattern<R: Rng + ?Sized>(
    group: &mut Node,
    pattern: ToppingPattern,
    color: HexColor,
    rng: &mut R,
) {
    match pattern {
        ToppingPattern::Sprinkles => add_sprinkles(group, color, rng),
        ToppingPattern::Nuts => add_nuts(group, color, rng),
        ToppingPattern::CreamRing => add_cream_ring(group, color),
    }
}

/// Build the `toppings` group for the given tags. Unknown tags are skipped.
pub fn build_toppings<R: Rng + ?Sized>(tags: &[String], rng: &mut R) -> Node {
    let mut group = Node::group(TOPPINGS_GROUP);
    for tag in tags {
        let Some(topping) = Topping::from_tag(tag) else {
            tracing::debug!("Ignoring unknown topping tag '{tag}'");
            continue;
        };
        for (pattern, color) in topping.layers() {
            add_pattern(&mut group, *pattern, *color, rng);
        }
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cream_ring_twelve_even_dollops() {
        let mut rng = StdRng::seed_from_u64(0);
        let group = build_toppings(&tags(&["Cream"]), &mut rng);
        assert_eq!(group.children.len(), 12);

        let step = std::f32::consts::TAU / 12.0;
        for (i, dollop) in group.children.iter().enumerate() {
            let p = dollop.transform.position;
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - CREAM_RING_RADIUS).abs() < 1e-5);
            let expected = i as f32 * step;
            assert!((p.x - expected.cos() * CREAM_RING_RADIUS).abs() < 1e-6);
            assert!((p.z - expected.sin() * CREAM_RING_RADIUS).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sprinkles_within_radius() {
        let mut rng = StdRng::seed_from_u64(9);
        let group = build_toppings(&tags(&["Sprinkles"]), &mut rng);
        assert_eq!(group.children.len(), SPRINKLE_COUNT);
        for s in &group.children {
            let p = s.transform.position;
            assert!((p.x * p.x + p.z * p.z).sqrt() <= SPRINKLE_SCATTER_RADIUS + 1e-6);
            assert_eq!(p.y, TOPPING_TOP_Y + SPRINKLE_LIFT);
            let r = s.transform.rotation;
            for a in [r.x, r.y, r.z] {
                assert!((0.0..std::f32::consts::PI).contains(&a));
            }
        }
    }

    #[test]
    fn test_nuts_size_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let group = build_toppings(&tags(&["Peanuts"]), &mut rng);
        assert_eq!(group.children.len(), NUT_COUNT);
        for n in &group.children {
            let Some(Primitive::Sphere { radius, .. }) = n.primitive() else {
                panic!("nut is not a sphere");
            };
            assert!(*radius >= 0.05 && *radius < 0.08 + 1e-6);
            let p = n.transform.position;
            assert!((p.x * p.x + p.z * p.z).sqrt() <= NUT_SCATTER_RADIUS + 1e-6);
        }
    }

    #[test]
    fn test_rainbow_runs_one_pass_per_color() {
        let mut rng = StdRng::seed_from_u64(2);
        let group = build_toppings(&tags(&["Rainbow Sprinkles"]), &mut rng);
        assert_eq!(group.children.len(), SPRINKLE_COUNT * 5);

        let mut colors: Vec<[f32; 3]> = group
            .children
            .iter()
            .map(|c| c.material().unwrap().color)
            .collect();
        colors.dedup();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let mut rng = StdRng::seed_from_u64(2);
        let group = build_toppings(&tags(&["Marzipan", "Cream"]), &mut rng);
        assert_eq!(group.children.len(), CREAM_DOLLOPS);

        let empty = build_toppings(&tags(&["Marzipan"]), &mut rng);
        assert!(empty.children.is_empty());
        assert_eq!(empty.name, TOPPINGS_GROUP);
    }

    #[test]
    fn test_two_toppings_combine() {
        let mut rng = StdRng::seed_from_u64(2);
        let group = build_toppings(&tags(&["Berries", "Cream"]), &mut rng);
        assert_eq!(group.children.len(), NUT_COUNT * 2 + CREAM_DOLLOPS);
    }
}
