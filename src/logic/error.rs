// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Failure taxonomy of a consolidation run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Missing file or wrong extension.
    #[error("Error: The specified path is not a valid .{extension} file: {}", path.display())]
    InvalidInput {
        path: PathBuf,
        extension: &'static str,
    },
    #[error("Error creating output directory: {0}")]
    CreateOutputDir(#[source] io::Error),
    #[error("Error: File is corrupted or not a valid ZIP archive.")]
    CorruptArchive(#[source] ZipError),
    #[error("An unexpected error occurred: {context}: {source}")]
    Unexpected {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    pub fn unexpected(context: impl Into<String>, source: io::Error) -> Self {
        ExtractError::Unexpected {
            context: context.into(),
            source,
        }
    }

    /// Map a ZIP-layer failure: plain I/O stays unexpected, structural problems
    /// mean a corrupt archive.
    pub fn from_zip(context: impl Into<String>, err: ZipError) -> Self {
        match err {
            ZipError::Io(source) if source.kind() != io::ErrorKind::UnexpectedEof => {
                ExtractError::unexpected(context, source)
            }
            other => ExtractError::CorruptArchive(other),
        }
    }

    /// Map a failure while copying entry bytes out: checksum and decompression
    /// errors surface as `InvalidData` and mean a corrupt archive.
    pub fn from_copy(context: impl Into<String>, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::InvalidData {
            ExtractError::CorruptArchive(ZipError::Io(err))
        } else {
            ExtractError::unexpected(context, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_path_and_extension() {
        let err = ExtractError::InvalidInput {
            path: PathBuf::from("design.sketch"),
            extension: "xd",
        };

        assert_eq!(
            err.to_string(),
            "Error: The specified path is not a valid .xd file: design.sketch"
        );
    }

    #[test]
    fn truncated_zip_io_counts_as_corruption() {
        let eof = ZipError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        let denied = ZipError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "no"));

        assert!(matches!(
            ExtractError::from_zip("open", eof),
            ExtractError::CorruptArchive(_)
        ));
        assert!(matches!(
            ExtractError::from_zip("open", denied),
            ExtractError::Unexpected { .. }
        ));
    }

    #[test]
    fn invalid_data_while_copying_counts_as_corruption() {
        let crc = io::Error::new(io::ErrorKind::InvalidData, "Invalid checksum");
        let full = io::Error::new(io::ErrorKind::StorageFull, "disk full");

        let corrupt = ExtractError::from_copy("write manifest", crc);
        assert_eq!(
            corrupt.to_string(),
            "Error: File is corrupted or not a valid ZIP archive."
        );
        assert!(matches!(
            ExtractError::from_copy("write manifest", full),
            ExtractError::Unexpected { .. }
        ));
    }
}
