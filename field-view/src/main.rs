//! Application entry point for the particle field viewer.
//!
//! This binary sets up eframe/egui and delegates all simulation and
//! rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Logging goes through `env_logger`; set `RUST_LOG` to control
/// verbosity. The window runs until closed — the simulation has no
/// termination condition of its own.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Particle Field",
        options,
        Box::new(|_cc| {
            log::info!("starting particle field viewer");
            Ok(Box::new(Viewer::new()))
        }),
    )
}
