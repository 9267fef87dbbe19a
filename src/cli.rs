// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "xdextract")]
#[command(version)]
#[command(about = "Adobe XD scenegraph extractor", long_about = None)]
#[command(after_help = "Examples:\n  \
  xdextract                              open the desktop window\n  \
  xdextract -i design.xd -o design_out   extract without a window\n  \
  xdextract -i design.xd -o out --json   print the result as JSON")]
pub struct Cli {
    /// Path to the input .xd file
    #[arg(short, long, value_name = "FILE", requires = "output")]
    pub input: Option<PathBuf>,

    /// Path to the output directory
    #[arg(short, long, value_name = "DIR", requires = "input")]
    pub output: Option<PathBuf>,

    /// Print the extraction result as JSON instead of a plain message
    #[arg(long, requires = "input")]
    pub json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Input and output when both were given; `None` means the desktop window.
    pub fn headless_paths(&self) -> Option<(&Path, &Path)> {
        Some((self.input.as_deref()?, self.output.as_deref()?))
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_paths_select_headless_mode() {
        let cli = Cli::try_parse_from(["xdextract", "-i", "a.xd", "--output", "out"]).unwrap();

        assert_eq!(
            cli.headless_paths(),
            Some((Path::new("a.xd"), Path::new("out")))
        );
    }

    #[test]
    fn no_paths_select_window_mode() {
        let cli = Cli::try_parse_from(["xdextract"]).unwrap();

        assert!(cli.headless_paths().is_none());
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn input_without_output_is_rejected() {
        assert!(Cli::try_parse_from(["xdextract", "--input", "a.xd"]).is_err());
        assert!(Cli::try_parse_from(["xdextract", "-o", "out"]).is_err());
    }

    #[test]
    fn json_output_needs_headless_mode() {
        assert!(Cli::try_parse_from(["xdextract", "--json"]).is_err());

        let cli = Cli::try_parse_from(["xdextract", "-i", "a.xd", "-o", "out", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn verbosity_flags_map_to_level_filters() {
        let verbose = Cli::try_parse_from(["xdextract", "-vv"]).unwrap();
        let quiet = Cli::try_parse_from(["xdextract", "-q"]).unwrap();

        assert_eq!(verbose.log_level(), LevelFilter::Trace);
        assert_eq!(quiet.log_level(), LevelFilter::Error);
        assert!(Cli::try_parse_from(["xdextract", "-v", "-q"]).is_err());
    }
}
