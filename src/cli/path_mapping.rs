use std::path::{Path, PathBuf};

use crate::mirror::filter;

/// Map a directory under `input_dir` onto the same relative location under `output_dir`.
pub fn map_dir(input_dir: &Path, input_path: &Path, output_dir: &Path) -> PathBuf {
    match input_path.strip_prefix(input_dir) {
        Ok(relative) if relative.as_os_str().is_empty() => output_dir.to_path_buf(),
        Ok(relative) => output_dir.join(relative),
        Err(_) => output_dir.join(input_path),
    }
}

/// Map a Markdown file under `input_dir` onto its page under `output_dir`.
///
/// The `.md` suffix is replaced by `.html`; other names are kept as they are.
pub fn map_input_to_output(input_dir: &Path, input_path: &Path, output_dir: &Path) -> PathBuf {
    let mut out = map_dir(input_dir, input_path, output_dir);

    let html_name = out
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(filter::html_name);
    if let Some(html_name) = html_name {
        out.set_file_name(html_name);
    } else if out.extension().is_some_and(|ext| ext == "md") {
        // Name is not valid UTF-8
        out.set_extension("html");
    }

    out
}
