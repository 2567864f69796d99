//! Lucidoku desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Lucidoku application.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use eframe::egui::{self, Vec2};

use crate::app::LucidokuApp;

mod app;
mod ui;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 600.0))
            .with_min_inner_size(Vec2::new(400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Lucidoku",
        options,
        Box::new(|cc| Ok(Box::new(LucidokuApp::new(cc)))),
    )
}
