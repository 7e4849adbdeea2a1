//! Procedural cake building: selection values in, scene-graph nodes out.
//!
//! Every builder returns a fresh node. Filling and toppings are separate
//! groups that get attached as children of the base so they inherit its
//! rotation and scale.

mod base;
pub mod consts;
mod filling;
mod icing;
mod preview;
mod toppings;

pub use base::{base_primitive, base_scale, build_base};
pub use filling::{build_filling, yaw_toward_center};
pub use icing::build_icing;
pub use preview::{animate_preview, build_tiered_preview, tier_radius, tier_y};
pub use toppings::{add_pattern, build_toppings};

use rand::Rng;
use shared::Selection;

use crate::scene::Node;

/// Build the whole cake for a selection, or None when no shape is chosen
pub fn build_cake<R: Rng + ?Sized>(selection: &Selection, rng: &mut R) -> Option<Node> {
    let shape = selection.shape?;
    let mut base = build_base(shape, selection.height_factor(), selection.base_color);

    if let Some(color) = selection.filling_color {
        base.add_child(build_filling(color, rng));
    }
    if !selection.toppings.is_empty() {
        base.add_child(build_toppings(selection.toppings.as_slice(), rng));
    }

    Some(base)
}
