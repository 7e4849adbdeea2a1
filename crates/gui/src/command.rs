//! JSON command protocol for scripted sessions.
//!
//! Used by `--script` at startup and by the headless harness in tests.

use serde::{Deserialize, Serialize};
use shared::{CakeShape, HeightInches, HexColor, Selection};

use crate::render::Renderer;
use crate::session::CakeSession;

/// A command that drives a customization session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CakeCommand {
    SelectShape {
        shape: CakeShape,
    },
    /// Height in inches; values outside the allowed set are reported as errors
    SelectHeight {
        inches: u8,
    },
    PickBaseColor {
        color: String,
    },
    PickFilling {
        color: String,
    },
    ToggleTopping {
        tag: String,
    },
    Next,
    Back,
    Reset,
    /// Open or close the tiered showcase cake
    TogglePreview,
    /// One drag gesture with offsets cumulative from the press point
    Drag {
        dx: f32,
        dy: f32,
    },
    Tick {
        #[serde(default = "one")]
        count: u32,
    },
    LoadSelection {
        selection: Selection,
    },
    /// Report selection, wizard and scene state
    Inspect,
    ExportSelection,
}

fn one() -> u32 {
    1
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

impl From<Result<CommandResponse, String>> for CommandResponse {
    fn from(result: Result<CommandResponse, String>) -> Self {
        result.unwrap_or_else(CommandResponse::err)
    }
}

/// Execute a single command on a session.
pub fn execute_command<R: Renderer>(
    session: &mut CakeSession<R>,
    cmd: CakeCommand,
) -> CommandResponse {
    match cmd {
        CakeCommand::SelectShape { shape } => {
            session.select_shape(shape);
            CommandResponse::ok_with_data(serde_json::json!({
                "step": session.wizard().step().number(),
            }))
        }

        CakeCommand::SelectHeight { inches } => HeightInches::new(inches)
            .map(|h| {
                session.select_height(h);
                CommandResponse::ok()
            })
            .into(),

        CakeCommand::PickBaseColor { color } => HexColor::parse(&color)
            .map(|c| {
                session.pick_base_color(c);
                CommandResponse::ok()
            })
            .into(),

        CakeCommand::PickFilling { color } => HexColor::parse(&color)
            .map(|c| {
                let applied = session.pick_filling(c);
                CommandResponse::ok_with_data(serde_json::json!({ "applied": applied }))
            })
            .into(),

        CakeCommand::ToggleTopping { tag } => {
            let applied = session.toggle_topping(&tag);
            CommandResponse::ok_with_data(serde_json::json!({
                "applied": applied,
                "toppings": session.selection().toppings.as_slice(),
            }))
        }

        CakeCommand::Next => {
            let moved = session.next();
            CommandResponse::ok_with_data(serde_json::json!({
                "moved": moved,
                "step": session.wizard().step().number(),
            }))
        }

        CakeCommand::Back => {
            let moved = session.back();
            CommandResponse::ok_with_data(serde_json::json!({
                "moved": moved,
                "step": session.wizard().step().number(),
            }))
        }

        CakeCommand::Reset => {
            session.reset();
            CommandResponse::ok()
        }

        CakeCommand::TogglePreview => {
            let open = session.toggle_preview();
            CommandResponse::ok_with_data(serde_json::json!({ "preview_open": open }))
        }

        CakeCommand::Drag { dx, dy } => {
            session.drag_begin();
            let rotated = session.drag_move(dx, dy);
            session.drag_end();
            let rot = session.rotation();
            CommandResponse::ok_with_data(serde_json::json!({
                "rotated": rotated,
                "yaw": rot.yaw,
                "pitch": rot.pitch,
            }))
        }

        CakeCommand::Tick { count } => {
            let mut submitted = 0u32;
            for _ in 0..count {
                if session.tick() == crate::frame_loop::FrameOutcome::Submitted {
                    submitted += 1;
                }
            }
            CommandResponse::ok_with_data(serde_json::json!({ "submitted": submitted }))
        }

        CakeCommand::LoadSelection { selection } => {
            session.load_selection(selection);
            CommandResponse::ok()
        }

        CakeCommand::Inspect => {
            let scene = session.scene();
            CommandResponse::ok_with_data(serde_json::json!({
                "selection": session.selection(),
                "step": session.wizard().step().number(),
                "label": session.wizard().label(),
                "has_base": scene.is_some_and(|s| s.base().is_some()),
                "mesh_count": scene.map_or(0, |s| s.mesh_count()),
                "scene_version": scene.map_or(0, |s| s.version()),
                "transition": session.transition().map(|t| t.progress),
                "preview_open": session.preview_open(),
            }))
        }

        CakeCommand::ExportSelection => match serde_json::to_string_pretty(session.selection()) {
            Ok(json) => CommandResponse::ok_with_data(serde_json::json!({ "selection_json": json })),
            Err(e) => CommandResponse::err(format!("Cannot serialize selection: {e}")),
        },
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json<R: Renderer>(
    session: &mut CakeSession<R>,
    json: &str,
) -> Result<CommandResponse, String> {
    let cmd: CakeCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch<R: Renderer>(
    session: &mut CakeSession<R>,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<CakeCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
