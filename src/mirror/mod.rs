//! Recursive directory mirroring
//!
//! Walks the input tree depth-first. Every input directory gets a mirrored output
//! directory before any of its entries are handled, every `.md` file becomes a page
//! at the mirrored path, and every other file is skipped. The first I/O error ends
//! the run.
//!
//! When the output tree lives inside the input tree, a directory this run wrote
//! into is only walked again if it holds Markdown of its own.

pub mod filter;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::cli::path_mapping::{map_dir, map_input_to_output};
use crate::cli::Reporter;
use crate::conversion::stats::RunTimer;
use crate::conversion::{MarkdownConverter, MirrorConfig, RunStatistics};
use crate::error::{MirrorError, MirrorResult};
use crate::output::{ensure_dir, write_output, DirStatus};

/// Mirrors one input tree into one output tree
pub struct Mirror {
    config: MirrorConfig,
    converter: MarkdownConverter,
    reporter: Reporter,
}

impl Mirror {
    pub fn new(config: MirrorConfig) -> Self {
        let converter = MarkdownConverter::new(config.converter.clone());
        let reporter = Reporter::new(config.verbosity);
        Self {
            config,
            converter,
            reporter,
        }
    }

    /// Walk the whole input tree, stopping at the first error
    pub fn run(&self) -> MirrorResult<RunStatistics> {
        let timer = RunTimer::start();
        let mut stats = RunStatistics::new();
        let in_root = self.config.in_dir.as_path();

        // Symlinks below the root are never followed, so the walk cannot loop.
        let mut walker = WalkDir::new(in_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        let mut generated: HashSet<PathBuf> = HashSet::new();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| MirrorError::from_walk(e, in_root))?;

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    let source = io::Error::new(io::ErrorKind::Other, "not a directory");
                    return Err(MirrorError::read_dir(entry.path(), source));
                }

                self.visit_dir(&entry, &mut stats, &mut generated)?;
                continue;
            }

            if entry.file_type().is_dir() {
                if is_generated(entry.path(), &generated) && !has_markdown(entry.path())? {
                    self.reporter.info(&format!(
                        "Skipping generated output directory: {}",
                        entry.path().display()
                    ));
                    walker.skip_current_dir();
                    continue;
                }

                self.visit_dir(&entry, &mut stats, &mut generated)?;
            } else {
                self.visit_file(&entry, &mut stats)?;
            }
        }

        Ok(timer.finish(stats))
    }

    fn visit_dir(
        &self,
        entry: &DirEntry,
        stats: &mut RunStatistics,
        generated: &mut HashSet<PathBuf>,
    ) -> MirrorResult<()> {
        let out_dir = map_dir(&self.config.in_dir, entry.path(), &self.config.out_dir);
        let status = ensure_dir(&out_dir)?;
        if let Ok(canonical) = fs::canonicalize(&out_dir) {
            generated.insert(canonical);
        }

        match status {
            DirStatus::Created => self
                .reporter
                .info(&format!("Created output directory: {}", out_dir.display())),
            DirStatus::Existed => self
                .reporter
                .detail(&format!("Output directory '{}' exists", out_dir.display())),
        }

        stats.record_dir(status);
        Ok(())
    }

    fn visit_file(&self, entry: &DirEntry, stats: &mut RunStatistics) -> MirrorResult<()> {
        let path = entry.path();
        if !filter::is_markdown_file(path) {
            self.reporter
                .info(&format!("Ignoring non-markdown file: {}", path.display()));
            stats.record_skip();
            return Ok(());
        }

        self.reporter.detail(&format!("Found file: {}", path.display()));
        let out_path = map_input_to_output(&self.config.in_dir, path, &self.config.out_dir);
        let (input_size, output_size) = self.convert_file(path, &out_path)?;

        stats.record_page(input_size, output_size);
        Ok(())
    }

    /// Convert a single Markdown file into a page at `out_path`
    pub fn convert_file(&self, path: &Path, out_path: &Path) -> MirrorResult<(u64, u64)> {
        let input = fs::read(path).map_err(|e| MirrorError::read_file(path, e))?;
        let page = self.converter.render_page(&input, &self.config.template);

        if page.metadata.lossy_input {
            self.reporter.warning(&format!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                path.display()
            ));
        }

        write_output(out_path, page.as_bytes())?;
        self.reporter.success(&format!("Wrote file: {}", out_path.display()));

        Ok((page.metadata.input_size, page.metadata.output_size))
    }
}

fn is_generated(path: &Path, generated: &HashSet<PathBuf>) -> bool {
    fs::canonicalize(path).is_ok_and(|p| generated.contains(&p))
}

fn has_markdown(dir: &Path) -> MirrorResult<bool> {
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| MirrorError::from_walk(e, dir))?;
        if !entry.file_type().is_dir() && filter::is_markdown_file(entry.path()) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Mirror `config.in_dir` into `config.out_dir`
pub fn mirror_tree(config: MirrorConfig) -> MirrorResult<RunStatistics> {
    Mirror::new(config).run()
}
