// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Archive layout constants and the pure entry classifier.

/// Names and suffixes that identify the interesting members of a design archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveProfile {
    /// Required extension of the input file, matched case-sensitively.
    pub extension: &'static str,
    /// Suffix marking a graphic-content fragment.
    pub graphic_content_suffix: &'static str,
    /// Base names extracted verbatim wherever they appear.
    pub key_files: &'static [&'static str],
    /// File name of the merged graphic-content document.
    pub consolidated_file: &'static str,
    /// File name of the extraction summary.
    pub summary_file: &'static str,
}

impl Default for ArchiveProfile {
    /// Adobe XD layout.
    fn default() -> Self {
        Self {
            extension: "xd",
            graphic_content_suffix: "graphicContent.agc",
            key_files: &["manifest", "interactions.json", "metadata.xml", "mimetype"],
            consolidated_file: "all_graphic_content.json",
            summary_file: "_extraction_info.json",
        }
    }
}

/// What the consolidator does with one archive entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// JSON fragment merged into the consolidated document.
    GraphicContent,
    /// Well-known member copied to the output directory.
    KeyFile,
    Ignored,
}

/// Classify an entry by name alone.
///
/// The suffix check runs before the base-name check, so a name matching both
/// is treated as graphic content.
pub fn classify(profile: &ArchiveProfile, name: &str) -> EntryKind {
    if name.ends_with(profile.graphic_content_suffix) {
        EntryKind::GraphicContent
    } else if profile.key_files.contains(&entry_basename(name)) {
        EntryKind::KeyFile
    } else {
        EntryKind::Ignored
    }
}

/// Final path component of an archive entry name.
///
/// ZIP names always use `/`; a single trailing slash (directory entries) is ignored.
pub fn entry_basename(name: &str) -> &str {
    let trimmed = name.strip_suffix('/').unwrap_or(name);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
