// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for picking an archive and running the extractor.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, DialogKind, Msg};
use crate::ui::components::path_picker;

/// Number of worker threads; one for dialogs, one for extraction.
const WORKER_THREADS: usize = 2;

/// Stateful egui application driving the extractor.
pub struct XdExtractApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl XdExtractApp {
    /// Spawn the command workers; each answer wakes the UI thread.
    pub fn new(ctx: &egui::Context) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        for _ in 0..WORKER_THREADS {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                    ctx.request_repaint();
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for XdExtractApp {
    /// Required by eframe 0.34; all rendering happens in `update`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drain worker results, apply queued messages, then render the form.
    ///
    /// Model mutation happens only here, on the UI thread.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        self.render_dialog(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            let enabled = !self.model.extracting;

            let input_msgs =
                path_picker::view(ui, "Adobe XD File (.xd):", &self.model.input, enabled);
            self.inbox.extend(input_msgs.into_iter().map(Msg::Input));
            ui.add_space(12.0);

            let output_msgs =
                path_picker::view(ui, "Output Directory:", &self.model.output, enabled);
            self.inbox.extend(output_msgs.into_iter().map(Msg::Output));
            ui.add_space(16.0);

            ui.vertical_centered(|ui| self.render_extract_button(ui));
        });
    }
}

impl XdExtractApp {
    fn render_extract_button(&mut self, ui: &mut egui::Ui) {
        let label = if self.model.extracting {
            format!("{} Extracting...", egui_phosphor::regular::HOURGLASS)
        } else {
            format!("{} Extract", egui_phosphor::regular::EXPORT)
        };
        let button = egui::Button::new(egui::RichText::new(label).strong());

        if ui
            .add_enabled(!self.model.extracting, button)
            .on_disabled_hover_text("Extraction in progress")
            .clicked()
        {
            self.inbox.push(Msg::ExtractRequested);
        }
    }

    /// Render the pending notification as a centered modal window.
    fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.model.dialog.clone() else {
            return;
        };
        let (icon, color) = match dialog.kind {
            DialogKind::Info => (
                egui_phosphor::regular::CHECK_CIRCLE,
                egui::Color32::from_rgb(46, 125, 50),
            ),
            DialogKind::Warning => (
                egui_phosphor::regular::WARNING,
                egui::Color32::from_rgb(237, 108, 2),
            ),
            DialogKind::Error => (
                egui_phosphor::regular::X_CIRCLE,
                egui::Color32::from_rgb(198, 40, 40),
            ),
        };

        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).size(20.0).color(color));
                    ui.label(dialog.message.as_str());
                });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissDialog);
                    }
                    if let Some(folder) = &dialog.open_folder
                        && ui
                            .button(format!("{} Open folder", egui_phosphor::regular::FOLDER_OPEN))
                            .clicked()
                    {
                        self.inbox.push(Msg::OpenFolderRequested(folder.clone()));
                    }
                });
            });
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        let text = self.model.status.as_deref().unwrap_or("Ready");
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
        });
    }
}
