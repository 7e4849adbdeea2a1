// Library crate: the headless customizer (scene graph, builders, session, protocol).
// GUI-specific modules (app, ui, GL viewport) remain in the binary crate.

pub mod build;
pub mod command;
pub mod fixtures;
pub mod frame_loop;
pub mod harness;
pub mod i18n;
pub mod render;
pub mod scene;
pub mod session;
pub mod state;
pub mod validation;

/// CPU tessellation shared by the validator and the GL viewport.
pub mod viewport {
    pub mod mesh;
}
