// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;

use crate::logic::consolidate;
use crate::models::extraction::ExtractionResult;
use crate::ui::components::path_picker::{
    self, PathPickerCommand, PathPickerModel, PathPickerMsg, PickerKind,
};

/// Severity of a modal notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// Modal notification shown above the form until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    /// Folder offered by the "Open folder" action after a successful run.
    pub open_folder: Option<PathBuf>,
}

/// Top-level application state.
pub struct AppModel {
    /// Selected `.xd` archive.
    pub input: PathPickerModel,
    /// Selected output directory.
    pub output: PathPickerModel,
    /// True while an extraction command is in flight.
    pub extracting: bool,
    /// Notification waiting for the user.
    pub dialog: Option<Dialog>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            input: PathPickerModel::new(PickerKind::ArchiveFile),
            output: PathPickerModel::new(PickerKind::Folder),
            extracting: false,
            dialog: None,
            status: None,
            pending_commands: 0,
        }
    }
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    Input(PathPickerMsg),
    Output(PathPickerMsg),
    ExtractRequested,
    ExtractCompleted {
        output: PathBuf,
        result: ExtractionResult,
    },
    OpenFolderRequested(PathBuf),
    FolderOpened(Result<PathBuf, String>),
    DismissDialog,
}

/// Commands represent side-effects executed on worker threads.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    PickArchive { for_input: bool },
    PickFolder { for_input: bool },
    Extract { input: PathBuf, output: PathBuf },
    OpenFolder(PathBuf),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Input(m) => {
            let mut picker_cmds = Vec::new();
            path_picker::update(&mut model.input, m, &mut picker_cmds);
            cmds.extend(picker_cmds.into_iter().map(|c| picker_command(c, true)));
        }
        Msg::Output(m) => {
            let mut picker_cmds = Vec::new();
            path_picker::update(&mut model.output, m, &mut picker_cmds);
            cmds.extend(picker_cmds.into_iter().map(|c| picker_command(c, false)));
        }
        Msg::ExtractRequested => {
            if model.extracting {
                return;
            }
            let (Some(input), Some(output)) = (model.input.path(), model.output.path()) else {
                model.dialog = Some(Dialog {
                    kind: DialogKind::Warning,
                    title: "Warning".into(),
                    message: "Both input file and output directory must be selected.".into(),
                    open_folder: None,
                });
                return;
            };
            model.status = Some(format!("Extracting {}...", input.display()));
            model.extracting = true;
            cmds.push(Command::Extract {
                input: input.to_path_buf(),
                output: output.to_path_buf(),
            });
        }
        Msg::ExtractCompleted { output, result } => {
            model.extracting = false;
            model.status = Some(result.message.clone());
            model.dialog = Some(if result.is_success() {
                Dialog {
                    kind: DialogKind::Info,
                    title: "Success".into(),
                    message: result.message,
                    open_folder: Some(output),
                }
            } else {
                Dialog {
                    kind: DialogKind::Error,
                    title: "Error".into(),
                    message: result.message,
                    open_folder: None,
                }
            });
        }
        Msg::OpenFolderRequested(path) => {
            model.dialog = None;
            cmds.push(Command::OpenFolder(path));
        }
        Msg::FolderOpened(Ok(path)) => {
            model.status = Some(format!("Opened {}", path.display()));
        }
        Msg::FolderOpened(Err(err)) => {
            model.dialog = Some(Dialog {
                kind: DialogKind::Error,
                title: "Error".into(),
                message: format!("Could not open folder:\n\n{err}"),
                open_folder: None,
            });
        }
        Msg::DismissDialog => model.dialog = None,
    }
}

/// Execute a command on the calling (worker) thread and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickArchive { for_input } => {
            let file = rfd::FileDialog::new()
                .set_title("Select Adobe XD File")
                .add_filter("Adobe XD files", &["xd"])
                .pick_file();
            picked(for_input, file)
        }
        Command::PickFolder { for_input } => {
            let folder = rfd::FileDialog::new()
                .set_title("Select Output Directory")
                .pick_folder();
            picked(for_input, folder)
        }
        Command::Extract { input, output } => {
            let result = consolidate(&input, &output);
            Msg::ExtractCompleted { output, result }
        }
        Command::OpenFolder(path) => {
            let res = open::that(&path).map(|_| path).map_err(|e| e.to_string());
            Msg::FolderOpened(res)
        }
    }
}

fn picker_command(cmd: PathPickerCommand, for_input: bool) -> Command {
    match cmd {
        PathPickerCommand::PickArchive => Command::PickArchive { for_input },
        PathPickerCommand::PickFolder => Command::PickFolder { for_input },
    }
}

fn picked(for_input: bool, path: Option<PathBuf>) -> Msg {
    let msg = PathPickerMsg::Picked(path);
    if for_input {
        Msg::Input(msg)
    } else {
        Msg::Output(msg)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use std::fs::File;
    use std::io::Write;

    use super::*;
    use tempfile::TempDir;
    use zip::{CompressionMethod, write::FileOptions};

    fn select_paths(model: &mut AppModel, input: PathBuf, output: PathBuf) {
        let mut cmds = Vec::new();
        update(model, Msg::Input(PathPickerMsg::Picked(Some(input))), &mut cmds);
        update(model, Msg::Output(PathPickerMsg::Picked(Some(output))), &mut cmds);
        assert!(cmds.is_empty(), "picking paths should not enqueue commands");
    }

    #[test]
    fn browse_buttons_route_to_matching_dialogs() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::Input(PathPickerMsg::RequestBrowse), &mut cmds);
        update(&mut model, Msg::Output(PathPickerMsg::RequestBrowse), &mut cmds);

        assert_eq!(
            cmds,
            vec![
                Command::PickArchive { for_input: true },
                Command::PickFolder { for_input: false },
            ]
        );
    }

    #[test]
    fn extract_without_paths_warns_and_enqueues_nothing() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::Input(PathPickerMsg::Picked(Some(PathBuf::from("design.xd")))),
            &mut cmds,
        );

        update(&mut model, Msg::ExtractRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(!model.extracting);
        let dialog = model.dialog.expect("warning dialog");
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(
            dialog.message,
            "Both input file and output directory must be selected."
        );
    }

    #[test]
    fn extract_request_marks_busy_and_ignores_repeats() {
        let mut model = AppModel::default();
        select_paths(&mut model, "in.xd".into(), "out".into());
        let mut cmds = Vec::new();

        update(&mut model, Msg::ExtractRequested, &mut cmds);
        update(&mut model, Msg::ExtractRequested, &mut cmds);

        assert!(model.extracting);
        assert_eq!(
            cmds,
            vec![Command::Extract {
                input: "in.xd".into(),
                output: "out".into(),
            }]
        );
    }

    #[test]
    fn failed_extraction_clears_busy_and_shows_error() {
        let mut model = AppModel::default();
        model.extracting = true;
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::ExtractCompleted {
                output: "out".into(),
                result: ExtractionResult::error("Error: File is corrupted."),
            },
            &mut cmds,
        );

        assert!(!model.extracting);
        let dialog = model.dialog.clone().expect("error dialog");
        assert_eq!(dialog.kind, DialogKind::Error);
        assert!(dialog.open_folder.is_none());

        update(&mut model, Msg::DismissDialog, &mut cmds);
        assert!(model.dialog.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn open_folder_closes_dialog_and_enqueues_command() {
        let mut model = AppModel::default();
        model.dialog = Some(Dialog {
            kind: DialogKind::Info,
            title: "Success".into(),
            message: "done".into(),
            open_folder: Some("out".into()),
        });
        let mut cmds = Vec::new();

        update(&mut model, Msg::OpenFolderRequested("out".into()), &mut cmds);

        assert!(model.dialog.is_none());
        assert_eq!(cmds, vec![Command::OpenFolder("out".into())]);
    }

    #[test]
    fn extract_request_runs_and_completes() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("design.xd");
        let output = tmp.path().join("out");

        let mut zip = zip::ZipWriter::new(File::create(&input).unwrap());
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file("manifest", options).unwrap();
        zip.write_all(b"{}").unwrap();
        zip.start_file("artwork/graphicContent.agc", options).unwrap();
        zip.write_all(br#"{"children":[]}"#).unwrap();
        zip.finish().unwrap();

        let mut model = AppModel::default();
        select_paths(&mut model, input, output.clone());

        let mut cmds = Vec::new();
        update(&mut model, Msg::ExtractRequested, &mut cmds);
        assert_eq!(cmds.len(), 1, "extract should enqueue command");

        let msg = run_command(cmds.pop().unwrap());
        update(&mut model, msg, &mut cmds);

        assert!(!model.extracting);
        let dialog = model.dialog.expect("success dialog");
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.open_folder.as_deref(), Some(output.as_path()));
        assert!(output.join("all_graphic_content.json").exists());
        assert!(output.join("_extraction_info.json").exists());
        assert!(output.join("manifest").exists());
    }
}
