//! Configuration options for Markdown to HTML mirroring

use std::path::{Path, PathBuf};

use crate::formatter::PageTemplate;

/// Default directory scanned for Markdown files
pub const DEFAULT_IN_DIR: &str = "inputs";

/// Default directory receiving the generated pages
pub const DEFAULT_OUT_DIR: &str = "dist";

/// How much the run reports while it works
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// One line per directory, written page, and skipped file
    #[default]
    Normal,
    /// Adds per-file discovery detail
    Verbose,
}

/// Markdown rendering options
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterOptions {
    /// Generate `id` attributes on headings
    pub heading_ids: bool,
    /// Honour explicit `{#id .class}` blocks after heading text
    pub heading_attributes: bool,
    /// Curly quotes, en/em dashes and ellipses
    pub smart_punctuation: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            heading_ids: true,
            heading_attributes: true,
            smart_punctuation: true,
        }
    }
}

impl ConverterOptions {
    pub fn with_heading_ids(mut self, enabled: bool) -> Self {
        self.heading_ids = enabled;
        self
    }

    pub fn with_smart_punctuation(mut self, enabled: bool) -> Self {
        self.smart_punctuation = enabled;
        self
    }
}

/// Configuration for one mirroring run
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Root directory scanned for `.md` files
    pub in_dir: PathBuf,
    /// Root directory the HTML tree is mirrored into
    pub out_dir: PathBuf,
    /// Boilerplate wrapped around every page
    pub template: PageTemplate,
    /// Markdown rendering options
    pub converter: ConverterOptions,
    /// Reporting level
    pub verbosity: Verbosity,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            in_dir: PathBuf::from(DEFAULT_IN_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            template: PageTemplate::default(),
            converter: ConverterOptions::default(),
            verbosity: Verbosity::Normal,
        }
    }
}

impl MirrorConfig {
    /// Create a configuration mirroring `in_dir` into `out_dir`
    pub fn new(in_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            in_dir: in_dir.into(),
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_converter(mut self, converter: ConverterOptions) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.in_dir) {
            return Err("Input directory must not be empty".to_string());
        }

        if is_blank(&self.out_dir) {
            return Err("Output directory must not be empty".to_string());
        }

        Ok(())
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}
