use std::path::Path;

/// Suffix marking a file as Markdown input (case-sensitive)
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Suffix given to generated pages
pub const HTML_SUFFIX: &str = ".html";

/// Return true if `name` ends in `.md`. `.MD` and `.markdown` do not count.
pub fn is_markdown_name(name: &str) -> bool {
    name.ends_with(MARKDOWN_SUFFIX)
}

/// Return true if the final component of `path` is a Markdown file name
pub fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| is_markdown_name(&name.to_string_lossy()))
}

/// Swap the `.md` suffix of `name` for `.html`
pub fn html_name(name: &str) -> Option<String> {
    name.strip_suffix(MARKDOWN_SUFFIX)
        .map(|stem| format!("{stem}{HTML_SUFFIX}"))
}
