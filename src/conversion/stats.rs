//! Statistics for a mirroring run

use std::time::{Duration, Instant};

use crate::cli::CliUtils;
use crate::output::DirStatus;

/// Counters collected while walking the input tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStatistics {
    /// Output directories that had to be created
    pub directories_created: usize,
    /// Output directories that already existed
    pub directories_reused: usize,
    /// Markdown files converted into pages
    pub files_converted: usize,
    /// Non-Markdown files that were ignored
    pub files_skipped: usize,
    /// Markdown bytes read
    pub bytes_read: u64,
    /// HTML bytes written
    pub bytes_written: u64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dir(&mut self, status: DirStatus) {
        match status {
            DirStatus::Created => self.directories_created += 1,
            DirStatus::Existed => self.directories_reused += 1,
        }
    }

    pub fn record_page(&mut self, input_size: u64, output_size: u64) {
        self.files_converted += 1;
        self.bytes_read += input_size;
        self.bytes_written += output_size;
    }

    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    /// Total number of mirrored directories, the output root included
    pub fn directories(&self) -> usize {
        self.directories_created + self.directories_reused
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {} file(s), skipped {}, across {} director{} ({} created) - {} in, {} out, {}",
            self.files_converted,
            self.files_skipped,
            self.directories(),
            if self.directories() == 1 { "y" } else { "ies" },
            self.directories_created,
            CliUtils::format_file_size(self.bytes_read),
            CliUtils::format_file_size(self.bytes_written),
            CliUtils::format_duration(self.elapsed),
        )
    }
}

/// Measures the wall-clock time of a run
pub struct RunTimer {
    start: Instant,
}

impl RunTimer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn finish(self, mut stats: RunStatistics) -> RunStatistics {
        stats.elapsed = self.start.elapsed();
        stats
    }
}
