//! Animated base-color change: an icing disc drops onto the cake while the
//! base color fades toward the target.

use crate::build::consts::*;
use crate::build::build_icing;
use crate::scene::Node;

/// Progress added per tick
pub const PROGRESS_STEP: f32 = 0.02;
/// Fraction of the remaining color distance covered per tick
pub const COLOR_LERP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTransition {
    pub progress: f32,
    pub target: [f32; 3],
}

impl ColorTransition {
    /// Fades from whatever color the base has when each tick runs
    pub fn new(target: [f32; 3]) -> Self {
        Self {
            progress: 0.0,
            target,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance one tick on `base`. Returns false once the transition has
    /// finished and should be dropped.
    pub fn advance(&mut self, base: &mut Node) -> bool {
        self.progress = (self.progress + PROGRESS_STEP).min(1.0);
        let t = self.progress;

        if base.child(ICING_NODE).is_none() {
            base.add_child(build_icing(self.target));
        }
        if let Some(icing) = base.child_mut(ICING_NODE) {
            icing.transform.position.y = lerp(ICING_START_Y, ICING_END_Y, t);
            let s = lerp(ICING_START_SCALE, ICING_END_SCALE, t);
            icing.transform.scale.x = s;
            icing.transform.scale.z = s;
        }

        if let Some(material) = base.material_mut() {
            for c in 0..3 {
                material.color[c] = lerp(material.color[c], self.target[c], COLOR_LERP);
            }
        }

        if self.is_complete() {
            base.remove_child(ICING_NODE);
            if let Some(material) = base.material_mut() {
                material.color = self.target;
            }
            return false;
        }
        true
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_base;
    use shared::{CakeShape, HexColor};

    fn base() -> Node {
        build_base(CakeShape::Circle, 1.0, HexColor::WHITE)
    }

    #[test]
    fn test_first_tick_adds_icing() {
        let mut node = base();
        let mut tr = ColorTransition::new([0.0; 3]);
        assert!(tr.advance(&mut node));
        let icing = node.child(ICING_NODE).unwrap();
        assert!(icing.transform.position.y < ICING_START_Y);
        assert!(icing.transform.scale.x > ICING_START_SCALE);
        assert!((tr.progress - 0.02).abs() < 1e-6);
        assert!((node.material().unwrap().color[0] - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_completes_after_fifty_ticks() {
        let mut node = base();
        let mut tr = ColorTransition::new([0.2, 0.4, 0.6]);
        let mut ticks = 1;
        while tr.advance(&mut node) {
            ticks += 1;
            assert!(ticks <= 60, "transition never completed");
        }
        assert!((49..=51).contains(&ticks));
        assert!(node.child(ICING_NODE).is_none());
        assert_eq!(node.material().unwrap().color, [0.2, 0.4, 0.6]);
        assert_eq!(tr.progress, 1.0);
    }

    #[test]
    fn test_icing_recreated_if_missing() {
        let mut node = base();
        let mut tr = ColorTransition::new([0.0; 3]);
        tr.advance(&mut node);
        node.remove_child(ICING_NODE);
        tr.advance(&mut node);
        assert!(node.child(ICING_NODE).is_some());
    }
}
