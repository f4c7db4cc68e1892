// ============================================================================
// vidlen-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and the File System
//
// This module encapsulates interactions with the external ffprobe tool and
// file system metadata. Both sit behind traits so the report driver can be
// exercised without real processes or files.
//
// KEY COMPONENTS:
// - ProbeSpawner / ProbeJob: launch a probe now, collect its output later
// - FfprobeSpawner: concrete implementation using std::process
// - FileMetadataProvider: file size lookup abstraction

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the ffprobe-backed spawner and its job handle
pub mod ffprobe_executor;

/// In-memory spawner for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{FFPROBE_ARGS, FfprobeJob, FfprobeSpawner};

// ============================================================================
// PROBE EXECUTION
// ============================================================================

/// Everything a finished probe produced.
///
/// `stdout` is the raw metadata text handed to the duration parser. A probe
/// that could not be launched or exited unsuccessfully still yields a
/// `ProbeOutput`; `failure` records why.
#[derive(Debug, Default)]
pub struct ProbeOutput {
    pub stdout: String,
    pub stderr: String,
    pub failure: Option<crate::error::CoreError>,
}

impl ProbeOutput {
    /// Output for a probe that never produced anything.
    pub fn failed(failure: crate::error::CoreError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// A probe that has been launched and can be waited on exactly once.
pub trait ProbeJob {
    /// Waits for the probe to finish and returns its captured output.
    ///
    /// Never fails: launch and exit errors are carried in
    /// [`ProbeOutput::failure`].
    fn join(self) -> ProbeOutput;
}

/// Launches probes without waiting for them.
///
/// `spawn` must return as soon as the probe is running so that a caller can
/// start every probe before joining any of them.
pub trait ProbeSpawner {
    type Job: ProbeJob;

    fn spawn(&self, input_path: &Path) -> Self::Job;
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Trait for abstracting file metadata access operations.
///
/// # Examples
///
/// ```rust
/// use vidlen_core::external::FileMetadataProvider;
/// use vidlen_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedSize;
///
/// impl FileMetadataProvider for FixedSize {
///     fn get_size(&self, _path: &Path) -> CoreResult<u64> {
///         Ok(1_000_000)
///     }
/// }
///
/// assert_eq!(FixedSize.get_size(Path::new("/fake/path")).unwrap(), 1_000_000);
/// ```
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// Standard implementation of FileMetadataProvider using `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
