//! Core conversion engine for Markdown to HTML transformation

use pulldown_cmark::{html, Options, Parser};

use crate::conversion::config::ConverterOptions;
use crate::conversion::headings::HeadingIds;
use crate::formatter::PageTemplate;

/// A fully wrapped HTML page
#[derive(Debug, Clone)]
pub struct HtmlPage {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl HtmlPage {
    /// Create a new page result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered document
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the page as bytes, ready to be written out
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// Metadata about a single conversion
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    /// Whether the input had to be decoded lossily
    pub lossy_input: bool,
}

/// Markdown to HTML converter.
///
/// Conversion never fails: invalid UTF-8 is replaced with U+FFFD before parsing,
/// and the parser accepts any text.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConverterOptions,
}

impl MarkdownConverter {
    /// Create a new converter
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    fn parser_options(&self) -> Options {
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_FOOTNOTES;

        if self.options.heading_attributes {
            options |= Options::ENABLE_HEADING_ATTRIBUTES;
        }

        if self.options.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }

        options
    }

    /// Render a Markdown document body to HTML
    pub fn convert_str(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut output = String::with_capacity(markdown.len() * 3 / 2);

        if self.options.heading_ids {
            html::push_html(&mut output, HeadingIds::new(parser));
        } else {
            html::push_html(&mut output, parser);
        }

        output
    }

    /// Render raw Markdown bytes to HTML
    pub fn convert(&self, input: &[u8]) -> String {
        self.convert_str(&String::from_utf8_lossy(input))
    }

    /// Render raw Markdown bytes and wrap the result in `template`
    pub fn render_page(&self, input: &[u8], template: &PageTemplate) -> HtmlPage {
        let text = String::from_utf8_lossy(input);
        let lossy_input = matches!(text, std::borrow::Cow::Owned(_));
        let body = self.convert_str(&text);
        let content = template.wrap(&body);

        let metadata = ConversionMetadata {
            input_size: input.len() as u64,
            output_size: content.len() as u64,
            lossy_input,
        };

        HtmlPage::new(content, metadata)
    }
}
