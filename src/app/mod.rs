// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Desktop entry point wiring egui/eframe to the extractor UI.

use crate::ui::XdExtractApp;
use eframe::egui;
use egui_phosphor::Variant;

/// Bootstrap the desktop window and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 260.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "XD Extractor",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(XdExtractApp::new(&cc.egui_ctx)))
        }),
    )
}
