// vidlen-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{ProbeJob, ProbeOutput, ProbeSpawner};
use crate::error::CoreError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Lifecycle events recorded by [`MockProbeSpawner`], in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeEvent {
    Spawned(PathBuf),
    Joined(PathBuf),
}

/// Mock implementation of ProbeSpawner returning canned ffprobe output.
///
/// Paths with no expectation behave like a probe that could not be started.
#[derive(Clone, Default)]
pub struct MockProbeSpawner {
    outputs: Rc<RefCell<HashMap<PathBuf, String>>>,
    events: Rc<RefCell<Vec<ProbeEvent>>>,
}

impl MockProbeSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the stdout a probe of `input_path` produces.
    pub fn expect_output(&self, input_path: impl Into<PathBuf>, stdout: impl Into<String>) {
        self.outputs
            .borrow_mut()
            .insert(input_path.into(), stdout.into());
    }

    /// Shorthand for a probe reporting `format.duration` as a string.
    pub fn expect_duration(&self, input_path: impl Into<PathBuf>, seconds: &str) {
        self.expect_output(
            input_path,
            format!(r#"{{"format": {{"duration": "{seconds}"}}}}"#),
        );
    }

    pub fn events(&self) -> Vec<ProbeEvent> {
        self.events.borrow().clone()
    }
}

impl ProbeSpawner for MockProbeSpawner {
    type Job = MockProbeJob;

    fn spawn(&self, input_path: &Path) -> MockProbeJob {
        log::info!("MockProbeSpawner::spawn called for: {}", input_path.display());
        self.events
            .borrow_mut()
            .push(ProbeEvent::Spawned(input_path.to_path_buf()));

        MockProbeJob {
            input_path: input_path.to_path_buf(),
            stdout: self.outputs.borrow().get(input_path).cloned(),
            events: Rc::clone(&self.events),
        }
    }
}

/// Job handed out by [`MockProbeSpawner`].
pub struct MockProbeJob {
    input_path: PathBuf,
    stdout: Option<String>,
    events: Rc<RefCell<Vec<ProbeEvent>>>,
}

impl ProbeJob for MockProbeJob {
    fn join(self) -> ProbeOutput {
        self.events
            .borrow_mut()
            .push(ProbeEvent::Joined(self.input_path.clone()));

        match self.stdout {
            Some(stdout) => ProbeOutput {
                stdout,
                ..Default::default()
            },
            None => ProbeOutput::failed(CoreError::DependencyNotFound(format!(
                "MockProbeSpawner: no expectation set for {}",
                self.input_path.display()
            ))),
        }
    }
}

/// Mock implementation of FileMetadataProvider backed by a map of sizes.
///
/// Paths without a size behave like files that do not exist.
#[derive(Clone, Default)]
pub struct MockMetadataProvider {
    sizes: Rc<RefCell<HashMap<PathBuf, u64>>>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_size(&self, path: impl Into<PathBuf>, size: u64) {
        self.sizes.borrow_mut().insert(path.into(), size);
    }
}

impl super::FileMetadataProvider for MockMetadataProvider {
    fn get_size(&self, path: &Path) -> crate::error::CoreResult<u64> {
        self.sizes.borrow().get(path).copied().ok_or_else(|| {
            CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })
    }
}
