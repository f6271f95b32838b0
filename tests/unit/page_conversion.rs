use mdmirror::{
    convert_markdown, render_page, ConverterOptions, MarkdownConverter, PageTemplate, HTML_END,
    HTML_START,
};
use pretty_assertions::assert_eq;

const SAMPLES: &[&str] = &[
    "",
    "# Hi",
    "plain paragraph",
    "## Title\n\nSome *emphasis*, a [link](https://example.com) and `code`.\n",
    "1. one\n2. two\n\n> quoted\n",
    "<div>raw html</div>\n",
    "```\nunterminated fence",
];

fn default_page(input: &[u8]) -> String {
    render_page(input, &MarkdownConverter::default(), &PageTemplate::default())
}

#[test]
fn test_page_is_header_body_footer() {
    for sample in SAMPLES {
        let body = convert_markdown(sample.as_bytes());
        let page = default_page(sample.as_bytes());

        assert!(page.starts_with(HTML_START));
        assert!(page.ends_with(HTML_END));
        assert_eq!(&page[HTML_START.len()..page.len() - HTML_END.len()], body);
    }
}

#[test]
fn test_conversion_is_deterministic() {
    for sample in SAMPLES {
        assert_eq!(default_page(sample.as_bytes()), default_page(sample.as_bytes()));
    }
}

#[test]
fn test_heading_example() {
    assert_eq!(convert_markdown(b"# Hi"), "<h1 id=\"hi\">Hi</h1>\n");
}

#[test]
fn test_arbitrary_bytes_convert() {
    let noise: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let page = default_page(&noise);
    assert!(page.starts_with(HTML_START));
    assert!(page.ends_with(HTML_END));
}

#[test]
fn test_custom_template_and_options() {
    let converter = MarkdownConverter::new(ConverterOptions::default().with_heading_ids(false));
    let template = PageTemplate::new("<article>", "</article>");
    let page = converter.render_page(b"# Plain", &template);

    assert_eq!(page.as_str(), "<article><h1>Plain</h1>\n</article>");
    assert_eq!(render_page(b"# Plain", &converter, &template), page.content);
}
