pub mod camera;
pub mod rotation;
pub mod settings;
pub mod transition;
pub mod wizard;

pub use camera::{CameraAccess, CameraPhase, CameraState, ConfiguredAccess, PermissionStatus};
pub use rotation::{GestureMapper, RotationState};
pub use settings::{AppSettings, ColorMode, WizardVariant};
pub use transition::ColorTransition;
pub use wizard::{Step, Wizard};
