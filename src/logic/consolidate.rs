// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic for pulling graphic content and key files out of design archives.
//!
//! Responsibilities:
//! - Validate the input archive path and create the output directory.
//! - Scan every archive entry once, merging graphic-content JSON fragments.
//! - Extract well-known key files with their archive-relative paths.
//! - Write the consolidated document and the extraction summary.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::logic::classify::{ArchiveProfile, EntryKind, classify};
use crate::logic::diagnostics::{Diagnostics, LogDiagnostics};
use crate::logic::error::ExtractError;
use crate::models::extraction::{ExtractionResult, ExtractionSummary};

/// Indentation used for every JSON document the consolidator writes.
const JSON_INDENT: &[u8] = b"    ";

/// Why a single graphic-content fragment was skipped.
#[derive(Debug, Error)]
enum FragmentError {
    #[error("entry could not be opened: {0}")]
    Zip(#[from] ZipError),
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Accumulators filled during the single pass over the archive.
#[derive(Default)]
struct ScanOutcome {
    graphic_content: Map<String, Value>,
    key_files: Vec<String>,
}

/// Extracts and consolidates one archive per call; holds no state between calls.
pub struct Consolidator<'a> {
    diagnostics: &'a dyn Diagnostics,
    profile: ArchiveProfile,
}

/// Consolidate `archive_path` into `output_dir`, logging through the `log` facade.
pub fn consolidate(archive_path: &Path, output_dir: &Path) -> ExtractionResult {
    Consolidator::new(&LogDiagnostics).consolidate(archive_path, output_dir)
}

impl<'a> Consolidator<'a> {
    pub fn new(diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            diagnostics,
            profile: ArchiveProfile::default(),
        }
    }

    /// Run a full extraction and fold every failure into the returned result.
    ///
    /// Files written before a failure stay on disk.
    pub fn consolidate(&self, archive_path: &Path, output_dir: &Path) -> ExtractionResult {
        match self.run(archive_path, output_dir) {
            Ok(()) => {
                let message = format!(
                    "Extraction completed successfully. Files saved in {}",
                    output_dir.display()
                );
                self.diagnostics.info(&message);
                ExtractionResult::success(message)
            }
            Err(err) => {
                let message = err.to_string();
                self.diagnostics.error(&message);
                ExtractionResult::error(message)
            }
        }
    }

    fn run(&self, archive_path: &Path, output_dir: &Path) -> Result<(), ExtractError> {
        self.validate_input(archive_path)?;

        fs::create_dir_all(output_dir).map_err(ExtractError::CreateOutputDir)?;
        self.diagnostics
            .info(&format!("Output directory created: {}", output_dir.display()));

        let display_name = archive_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| archive_path.display().to_string());
        self.diagnostics
            .info(&format!("Starting extraction from {display_name}"));

        let outcome = self.scan_archive(archive_path, output_dir)?;

        if outcome.graphic_content.is_empty() {
            self.diagnostics.warn(&format!(
                "No {} files were found in the archive.",
                self.profile.graphic_content_suffix
            ));
        } else {
            let target = output_dir.join(self.profile.consolidated_file);
            write_pretty_json(&target, &outcome.graphic_content)?;
            self.diagnostics.info(&format!(
                "All graphic content saved to: {}",
                target.display()
            ));
        }

        let summary = ExtractionSummary {
            source_file: archive_path.display().to_string(),
            output_directory: fs::canonicalize(output_dir)
                .unwrap_or_else(|_| output_dir.to_path_buf())
                .display()
                .to_string(),
            agc_files_found: outcome.graphic_content.keys().cloned().collect(),
            other_files_extracted: outcome.key_files,
        };
        write_pretty_json(&output_dir.join(self.profile.summary_file), &summary)?;

        Ok(())
    }

    fn validate_input(&self, archive_path: &Path) -> Result<(), ExtractError> {
        let has_extension =
            archive_path.extension() == Some(OsStr::new(self.profile.extension));
        if archive_path.is_file() && has_extension {
            Ok(())
        } else {
            Err(ExtractError::InvalidInput {
                path: archive_path.to_path_buf(),
                extension: self.profile.extension,
            })
        }
    }

    fn scan_archive(
        &self,
        archive_path: &Path,
        output_dir: &Path,
    ) -> Result<ScanOutcome, ExtractError> {
        let file = File::open(archive_path).map_err(|err| {
            ExtractError::unexpected(format!("Failed to open {}", archive_path.display()), err)
        })?;
        let mut archive = ZipArchive::new(BufReader::new(file))
            .map_err(|err| ExtractError::from_zip("Failed to open archive", err))?;

        let mut outcome = ScanOutcome::default();
        for index in 0..archive.len() {
            let Some(name) = archive.name_for_index(index).map(str::to_owned) else {
                continue;
            };

            match classify(&self.profile, &name) {
                EntryKind::GraphicContent => {
                    self.diagnostics
                        .info(&format!("Found graphic content file: {name}"));
                    let fragment = archive
                        .by_index(index)
                        .map_err(FragmentError::from)
                        .and_then(|mut entry| read_fragment(&mut entry));
                    match fragment {
                        Ok(value) => {
                            outcome.graphic_content.insert(name, value);
                        }
                        Err(err) => self
                            .diagnostics
                            .warn(&format!("Could not read or parse {name}: {err}")),
                    }
                }
                EntryKind::KeyFile => {
                    let mut entry = archive.by_index(index).map_err(|err| {
                        ExtractError::from_zip(format!("Failed to read entry {name}"), err)
                    })?;
                    let Some(relative) = entry.enclosed_name().map(|p| p.to_path_buf()) else {
                        self.diagnostics.warn(&format!(
                            "Skipping key file with unsafe path: {name}"
                        ));
                        continue;
                    };
                    let target = output_dir.join(relative);
                    if entry.is_dir() {
                        fs::create_dir_all(&target).map_err(|err| {
                            ExtractError::unexpected(
                                format!("Failed to create {}", target.display()),
                                err,
                            )
                        })?;
                    } else {
                        write_entry(&mut entry, &target)?;
                    }
                    self.diagnostics.info(&format!("Extracted key file: {name}"));
                    outcome.key_files.push(name);
                }
                EntryKind::Ignored => {}
            }
        }

        Ok(outcome)
    }
}

/// Decode one fragment as UTF-8 JSON.
fn read_fragment(reader: &mut impl Read) -> Result<Value, FragmentError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Copy an entry's bytes to `target`, creating missing parent directories.
fn write_entry(entry: &mut impl Read, target: &Path) -> Result<(), ExtractError> {
    if let Some(parent) = target.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|err| {
            ExtractError::unexpected(format!("Failed to create {}", parent.display()), err)
        })?;
    }

    let mut out = File::create(target).map_err(|err| {
        ExtractError::unexpected(format!("Failed to create {}", target.display()), err)
    })?;
    io::copy(entry, &mut out).map_err(|err| {
        ExtractError::from_copy(format!("Failed to write {}", target.display()), err)
    })?;
    Ok(())
}

/// Serialize `value` as 4-space indented JSON to `target`.
fn write_pretty_json<T: Serialize>(target: &Path, value: &T) -> Result<(), ExtractError> {
    let context = || format!("Failed to write {}", target.display());

    let file = File::create(target).map_err(|err| ExtractError::unexpected(context(), err))?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| ExtractError::unexpected(context(), err.into()))?;
    writer
        .flush()
        .map_err(|err| ExtractError::unexpected(context(), err))?;
    Ok(())
}
