// ============================================================================
// vidlen-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Provides a fluent API for creating CoreConfig instances with defaults for
// every field.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{CoreConfig, ReportLayout};

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    ffprobe_path: PathBuf,
    layout: ReportLayout,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            ffprobe_path: PathBuf::from(super::DEFAULT_FFPROBE_PATH),
            layout: ReportLayout::default(),
        }
    }

    /// Sets the ffprobe executable, either a bare name looked up in `PATH`
    /// or a path to the binary.
    pub fn ffprobe_path(mut self, ffprobe_path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = ffprobe_path.into();
        self
    }

    /// Sets the report layout.
    pub fn layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builds the CoreConfig.
    pub fn build(self) -> CoreConfig {
        CoreConfig {
            ffprobe_path: self.ffprobe_path,
            layout: self.layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CoreConfigBuilder::new().build();
        assert_eq!(config.ffprobe_path, PathBuf::from("ffprobe"));
        assert_eq!(config.layout, ReportLayout::Table);
        assert!(config.layout.includes_size());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CoreConfigBuilder::new()
            .ffprobe_path("/opt/ffmpeg/bin/ffprobe")
            .layout(ReportLayout::Basic)
            .build();
        assert_eq!(config.ffprobe_path, PathBuf::from("/opt/ffmpeg/bin/ffprobe"));
        assert_eq!(config.layout, ReportLayout::Basic);
        assert!(!config.layout.includes_size());
    }
}
