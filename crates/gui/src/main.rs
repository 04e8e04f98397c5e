mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build` and `crate::state`
// resolve to the lib crate types everywhere in the binary.
pub use primscene_gui_lib::build;
pub use primscene_gui_lib::state;

use app::PrimSceneApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "primscene_gui=info,primscene_gui_lib=info".into()),
        )
        .init();

    // --seed <u64> makes placement and colours reproducible
    let seed = parse_seed_arg(std::env::args().skip(1));
    if let Some(seed) = seed {
        tracing::info!("Using fixed random seed {seed}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PrimScene")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "primscene-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(PrimSceneApp::new(cc, seed)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_seed_arg(mut args: impl Iterator<Item = String>) -> Option<u64> {
    while let Some(arg) = args.next() {
        if arg != "--seed" {
            continue;
        }
        let value = args.next()?;
        return match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("Ignoring --seed {value:?}: {e}");
                None
            }
        };
    }
    None
}
