// ============================================================================
// vidlen-core/src/reporting/mod.rs
// ============================================================================
//
// REPORT DRIVER: Fan-out Probing and Ordered Collection
//
// Every input file gets its own probe process. All probes are started before
// any is waited on, then they are joined one by one in input order, so the
// report order always matches the argument order no matter which probe
// finishes first. Totals are only touched in that single join loop.

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{
    FfprobeSpawner, FileMetadataProvider, ProbeJob, ProbeSpawner, StdFsMetadataProvider,
};
use crate::probe::parse_duration;

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

/// Report data structures and rendering
pub mod summary;

pub use summary::{FileEntry, Report};

/// Probes every file and collects the results in input order.
///
/// A file whose probe fails is recorded with an unknown duration. When
/// `include_size` is set each file is also stat'ed; a file whose size cannot
/// be read is logged and recorded with an unknown size instead of aborting
/// the run.
pub fn collect_report<S, M>(
    spawner: &S,
    metadata: &M,
    input_paths: &[PathBuf],
    include_size: bool,
) -> Report
where
    S: ProbeSpawner,
    M: FileMetadataProvider,
{
    // Start everything first; each probe reads very little from disk.
    let jobs: Vec<(&Path, S::Job)> = input_paths
        .iter()
        .map(|path| (path.as_path(), spawner.spawn(path)))
        .collect();
    log::debug!("Started {} probe(s)", jobs.len());

    let mut report = Report::new();
    for (path, job) in jobs {
        let output = job.join();
        let duration = parse_duration(&output.stdout);
        if duration < 0 {
            match &output.failure {
                Some(err) => log::warn!("Could not probe {}: {}", path.display(), err),
                None => log::warn!("No duration reported for {}", path.display()),
            }
        }

        let size = if include_size {
            match metadata.get_size(path) {
                Ok(size) => Some(size),
                Err(e) => {
                    log::warn!("Could not read size of {}: {}", path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        log::debug!("{}: duration={} size={:?}", path.display(), duration, size);
        report.push(FileEntry {
            path: path.to_path_buf(),
            duration,
            size,
        });
    }

    report
}

/// Runs a full report with ffprobe and the real file system, returning the
/// rendered text for the configured layout.
pub fn run_report(config: &CoreConfig, input_paths: &[PathBuf]) -> CoreResult<String> {
    let spawner = FfprobeSpawner::new(&config.ffprobe_path);
    let report = collect_report(
        &spawner,
        &StdFsMetadataProvider,
        input_paths,
        config.layout.includes_size(),
    );
    report.render(config.layout)
}
