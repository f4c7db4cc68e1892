// vidlen-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::path::PathBuf;
use vidlen_core::ReportLayout;
use vidlen_core::config::{DEFAULT_FFPROBE_PATH, FFPROBE_PATH_ENV};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidlen: print the duration of media files",
    long_about = "Runs ffprobe on every given file in parallel and prints each file's \
                  duration along with the total, as an aligned table with file sizes \
                  or as a plain list."
)]
pub struct Cli {
    /// Media files to probe; the report keeps this order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print one `<duration> - <file>` line per file instead of a table
    #[arg(long)]
    pub basic: bool,

    /// ffprobe executable to run.
    /// Can also be set via the VIDLEN_FFPROBE environment variable.
    #[arg(long, value_name = "PATH", env = FFPROBE_PATH_ENV, default_value = DEFAULT_FFPROBE_PATH)]
    pub ffprobe: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn layout(&self) -> ReportLayout {
        if self.basic {
            ReportLayout::Basic
        } else {
            ReportLayout::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_files_only() {
        let cli = Cli::try_parse_from(["vidlen", "a.mp4", "b.mkv"]).unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.mp4"), PathBuf::from("b.mkv")]);
        assert!(!cli.basic);
        assert!(!cli.verbose);
        assert_eq!(cli.layout(), ReportLayout::Table);
    }

    #[test]
    fn test_parse_basic_and_ffprobe() {
        let cli = Cli::try_parse_from([
            "vidlen",
            "--basic",
            "--ffprobe",
            "/opt/ffmpeg/bin/ffprobe",
            "-v",
            "clip.mp4",
        ])
        .unwrap();

        assert_eq!(cli.layout(), ReportLayout::Basic);
        assert_eq!(cli.ffprobe, PathBuf::from("/opt/ffmpeg/bin/ffprobe"));
        assert!(cli.verbose);
        assert_eq!(cli.files, vec![PathBuf::from("clip.mp4")]);
    }

    #[test]
    fn test_parse_requires_a_file() {
        assert!(Cli::try_parse_from(["vidlen", "--basic"]).is_err());
    }
}
