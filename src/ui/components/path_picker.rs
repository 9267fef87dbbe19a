// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Labelled read-only path field with a browse button, in MVU shape.

use std::path::{Path, PathBuf};

use eframe::egui;

/// Which native dialog the picker opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerKind {
    /// Single `.xd` file.
    ArchiveFile,
    Folder,
}

/// UI model for one path selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPickerModel {
    kind: PickerKind,
    path: Option<PathBuf>,
}

/// Messages emitted by the picker view or returned by dialog commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathPickerMsg {
    RequestBrowse,
    /// Dialog closed; `None` when the user cancelled.
    Picked(Option<PathBuf>),
}

/// Side-effectful commands that run off the UI path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPickerCommand {
    PickArchive,
    PickFolder,
}

impl PathPickerModel {
    pub fn new(kind: PickerKind) -> Self {
        Self { kind, path: None }
    }

    /// Currently selected path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Apply a message to the model.
pub fn update(model: &mut PathPickerModel, msg: PathPickerMsg, cmds: &mut Vec<PathPickerCommand>) {
    match msg {
        PathPickerMsg::RequestBrowse => cmds.push(match model.kind {
            PickerKind::ArchiveFile => PathPickerCommand::PickArchive,
            PickerKind::Folder => PathPickerCommand::PickFolder,
        }),
        // A cancelled dialog keeps the previous selection.
        PathPickerMsg::Picked(Some(path)) => model.path = Some(path),
        PathPickerMsg::Picked(None) => {}
    }
}

/// Render the label, the read-only path and the browse button.
pub fn view(
    ui: &mut egui::Ui,
    label: &str,
    model: &PathPickerModel,
    enabled: bool,
) -> Vec<PathPickerMsg> {
    let mut msgs = Vec::new();

    ui.label(egui::RichText::new(label).strong());
    ui.horizontal(|ui| {
        let mut text = model
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let hint = match model.kind {
            PickerKind::ArchiveFile => "No file selected",
            PickerKind::Folder => "No folder selected",
        };
        ui.add(
            egui::TextEdit::singleline(&mut text)
                .interactive(false)
                .hint_text(hint)
                .desired_width((ui.available_width() - 110.0).max(120.0)),
        );

        let icon = match model.kind {
            PickerKind::ArchiveFile => egui_phosphor::regular::FILE_ZIP,
            PickerKind::Folder => egui_phosphor::regular::FOLDER_OPEN,
        };
        if ui
            .add_enabled(enabled, egui::Button::new(format!("{icon} Browse...")))
            .clicked()
        {
            msgs.push(PathPickerMsg::RequestBrowse);
        }
    });

    msgs
}
