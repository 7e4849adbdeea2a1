mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::i18n`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use cake_gui_lib::i18n;
pub use cake_gui_lib::state;

use app::{CakeApp, LaunchOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cake_ar=info,cake_gui_lib=info".into()),
        )
        .init();

    let launch = parse_launch_args();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cake AR")
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "cake-ar",
        native_options,
        Box::new(move |cc| Ok(Box::new(CakeApp::new(cc, launch)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Parse `--selection <path>` and `--script <path>`
fn parse_launch_args() -> LaunchOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut launch = LaunchOptions::default();
    let mut i = 1;
    while i < args.len() {
        let Some(path) = args.get(i + 1) else {
            break;
        };
        match args[i].as_str() {
            "--selection" => {
                launch.selection = read_arg_file(path).and_then(|json| {
                    match cake_gui_lib::fixtures::selection_from_json(&json) {
                        Ok(selection) => {
                            tracing::info!("Loaded selection from {path}");
                            Some(selection)
                        }
                        Err(e) => {
                            tracing::error!("Failed to parse selection JSON from {path}: {e}");
                            None
                        }
                    }
                });
                i += 2;
            }
            "--script" => {
                launch.script = read_arg_file(path);
                i += 2;
            }
            _ => i += 1,
        }
    }
    launch
}

fn read_arg_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!("Failed to read {path}: {e}");
            None
        }
    }
}
