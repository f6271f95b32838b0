//! Markdown tree to HTML tree converter
//!
//! Walks an input directory, mirrors its subdirectories into an output directory,
//! and turns every `.md` file into a standalone HTML page wrapped in a fixed
//! boilerplate.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod mirror;
pub mod output;

// Re-export commonly used types
pub use conversion::{ConverterOptions, HtmlPage, MarkdownConverter, MirrorConfig, RunStatistics, Verbosity};
pub use error::{ErrorKind, MirrorError, MirrorResult};
pub use formatter::{PageTemplate, HTML_END, HTML_START};
pub use mirror::{mirror_tree, Mirror};

/// Convert Markdown bytes to an HTML body with default options
pub fn convert_markdown(input: &[u8]) -> String {
    MarkdownConverter::default().convert(input)
}

/// Convert Markdown bytes to a complete page wrapped in `template`
pub fn render_page(input: &[u8], converter: &MarkdownConverter, template: &PageTemplate) -> String {
    converter.render_page(input, template).content
}
