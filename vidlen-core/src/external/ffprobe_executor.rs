//! ffprobe process execution.
//!
//! [`FfprobeSpawner`] starts one ffprobe process per input file and hands
//! back an [`FfprobeJob`] immediately. Joining the job waits for the process
//! while draining stdout and stderr together, so a probe that writes more
//! than a pipe buffer's worth to either stream cannot stall.

use crate::error::{CoreError, command_failed_error, command_start_error};
use crate::external::{ProbeJob, ProbeOutput, ProbeSpawner};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Arguments passed to ffprobe ahead of the input path: quiet logging and
/// the container format section as JSON.
pub const FFPROBE_ARGS: [&str; 6] = [
    "-v",
    "quiet",
    "-print_format",
    "json",
    "-show_format",
    "-i",
];

/// Spawns ffprobe processes using `std::process::Command`.
#[derive(Debug, Clone)]
pub struct FfprobeSpawner {
    ffprobe_path: PathBuf,
}

impl FfprobeSpawner {
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    fn command_name(&self) -> String {
        self.ffprobe_path.display().to_string()
    }
}

impl ProbeSpawner for FfprobeSpawner {
    type Job = FfprobeJob;

    fn spawn(&self, input_path: &Path) -> FfprobeJob {
        let command = self.command_name();
        log::debug!("Spawning {} for {}", command, input_path.display());

        let spawned = Command::new(&self.ffprobe_path)
            .args(FFPROBE_ARGS)
            .arg(input_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let state = match spawned {
            Ok(child) => JobState::Running(child),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Dependency '{}' not found.", command);
                JobState::NotStarted(CoreError::DependencyNotFound(command.clone()))
            }
            Err(e) => {
                log::debug!("Failed to start '{}': {}", command, e);
                JobState::NotStarted(command_start_error(command.clone(), e))
            }
        };

        FfprobeJob {
            input_path: input_path.to_path_buf(),
            command,
            state,
        }
    }
}

enum JobState {
    Running(Child),
    NotStarted(CoreError),
}

/// A running (or failed-to-start) ffprobe invocation for one input file.
pub struct FfprobeJob {
    input_path: PathBuf,
    command: String,
    state: JobState,
}

impl ProbeJob for FfprobeJob {
    fn join(self) -> ProbeOutput {
        let child = match self.state {
            JobState::Running(child) => child,
            JobState::NotStarted(err) => return ProbeOutput::failed(err),
        };

        // wait_with_output reads both pipes concurrently while waiting.
        let output = match child.wait_with_output() {
            Ok(output) => output,
            Err(e) => {
                log::warn!(
                    "Failed to collect ffprobe output for {}: {}",
                    self.input_path.display(),
                    e
                );
                return ProbeOutput::failed(CoreError::Io(e));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !stderr.trim().is_empty() {
            log::debug!(
                "ffprobe stderr for {}: {}",
                self.input_path.display(),
                stderr.trim_end()
            );
        }

        let failure = if output.status.success() {
            None
        } else {
            log::warn!(
                "ffprobe exited with {} for {}",
                output.status,
                self.input_path.display()
            );
            Some(command_failed_error(
                self.command,
                output.status,
                stderr.trim_end(),
            ))
        };

        ProbeOutput {
            stdout,
            stderr,
            failure,
        }
    }
}
