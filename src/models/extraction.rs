// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Extraction outcome and summary records (UI-agnostic).

use serde::Serialize;

/// Binary outcome tag of a consolidation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    Success,
    Error,
}

/// The only value handed back to callers of the consolidator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub status: ExtractionStatus,
    pub message: String,
}

impl ExtractionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ExtractionStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ExtractionStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExtractionStatus::Success
    }
}

/// Record written next to the extracted files describing what one run found.
///
/// Field names are part of the on-disk format of `_extraction_info.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    /// Input archive path as given by the caller.
    pub source_file: String,
    /// Output directory after creation.
    pub output_directory: String,
    /// Graphic-content entry names merged into the consolidated document, in scan order.
    pub agc_files_found: Vec<String>,
    /// Key-file entry names extracted verbatim, in scan order.
    pub other_files_extracted: Vec<String>,
}
