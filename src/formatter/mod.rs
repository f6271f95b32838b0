//! HTML page boilerplate

/// Opening boilerplate of every generated page
pub const HTML_START: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Document</title>
</head>
<body>"#;

/// Closing boilerplate of every generated page
pub const HTML_END: &str = "</body></html>";

/// Fixed header and footer wrapped around a rendered body.
///
/// The body is inserted verbatim; it is already HTML and is not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub header: String,
    pub footer: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new(HTML_START, HTML_END)
    }
}

impl PageTemplate {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Concatenate header, `body` and footer
    pub fn wrap(&self, body: &str) -> String {
        let mut page = String::with_capacity(self.header.len() + body.len() + self.footer.len());
        page.push_str(&self.header);
        page.push_str(body);
        page.push_str(&self.footer);
        page
    }
}
