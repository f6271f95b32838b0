//! Markdown to HTML conversion module
//!
//! This module contains the rendering engine, heading anchors, configuration, and statistics.

pub mod config;
pub mod engine;
pub mod headings;
pub mod stats;

pub use config::{ConverterOptions, MirrorConfig, Verbosity};

pub use engine::{HtmlPage, MarkdownConverter};

pub use stats::RunStatistics;
