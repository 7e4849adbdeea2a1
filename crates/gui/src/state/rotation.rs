//! Drag-to-rotate: cumulative pointer offsets become absolute yaw and pitch.

/// Radians per pixel of drag
pub const ROTATION_PER_PIXEL: f32 = 0.01;
/// Offsets at or below this (on both axes) are treated as a tap
pub const TAP_THRESHOLD_PX: f32 = 4.0;

/// Absolute cake orientation, applied to the base every frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub yaw: f32,
    pub pitch: f32,
}

impl RotationState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    /// Armed, below the tap threshold so far
    Pending,
    /// Recognized; offsets apply on top of the captured baseline
    Dragging { base: RotationState },
}

/// Maps one drag gesture onto a `RotationState`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureMapper {
    gesture: Gesture,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }
}

impl GestureMapper {
    pub fn begin(&mut self) {
        self.gesture = Gesture::Pending;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Apply offsets measured from the gesture start. Returns true when the
    /// rotation changed.
    pub fn update(&mut self, rotation: &mut RotationState, dx: f32, dy: f32) -> bool {
        let base = match self.gesture {
            Gesture::Idle => return false,
            Gesture::Pending => {
                if dx.abs() <= TAP_THRESHOLD_PX && dy.abs() <= TAP_THRESHOLD_PX {
                    return false;
                }
                let base = *rotation;
                self.gesture = Gesture::Dragging { base };
                base
            }
            Gesture::Dragging { base } => base,
        };
        rotation.yaw = base.yaw + dx * ROTATION_PER_PIXEL;
        rotation.pitch = base.pitch + dy * ROTATION_PER_PIXEL;
        true
    }

    pub fn end(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
