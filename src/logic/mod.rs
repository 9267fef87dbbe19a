// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Extraction core shared by the command line and the desktop window.

pub mod classify;
pub mod consolidate;
pub mod diagnostics;
pub mod error;

pub use consolidate::consolidate;
