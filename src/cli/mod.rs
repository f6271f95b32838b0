//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::config::{DEFAULT_IN_DIR, DEFAULT_OUT_DIR};
use crate::conversion::{MirrorConfig, Verbosity};
use crate::error::{ErrorKind, MirrorError, MirrorResult};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "mdmirror")]
#[command(about = "Convert a directory tree of Markdown files into a mirrored tree of HTML pages")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// The directory containing the markdown files
    #[arg(long, value_name = "PATH", default_value = DEFAULT_IN_DIR)]
    pub in_dir: PathBuf,

    /// The output directory for the generated files
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Report every file found and every directory reused
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub mirror_config: MirrorConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> MirrorResult<Self> {
        let mirror_config = MirrorConfig::new(&args.in_dir, &args.out_dir)
            .with_verbosity(args.verbosity());

        mirror_config
            .validate()
            .map_err(MirrorError::configuration)?;

        Ok(Self {
            args,
            mirror_config,
        })
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        format!("'{}'", self.args.in_dir.display())
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        format!("'{}'", self.args.out_dir.display())
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

type Styled = console::StyledObject<&'static str>;

/// Line-oriented progress reporting, filtered by verbosity.
///
/// Successes and informational lines go to stdout, warnings and errors to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
    color: bool,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: CliUtils::should_use_color(),
        }
    }

    fn marker(&self, marker: &'static str, paint: fn(Styled) -> Styled) -> String {
        if self.color {
            paint(style(marker)).to_string()
        } else {
            marker.to_string()
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn success(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            println!("{} {}", self.marker("✓", |s| s.green()), message);
        }
    }

    /// Show an informational message (if not in quiet mode)
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            println!("{} {}", self.marker("·", |s| s.dim()), message);
        }
    }

    /// Show a detail message (verbose mode only)
    pub fn detail(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            println!("{} {}", self.marker("·", |s| s.dim()), message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn warning(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", self.marker("⚠", |s| s.yellow()), message);
        }
    }

    /// Show an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.marker("✗", |s| s.red()), message);
    }
}

/// Lines describing a fatal error: the headline first, then cause and hints
pub fn error_lines(error: &anyhow::Error) -> Vec<String> {
    let headline = error.to_string();

    let Some(cause) = error.downcast_ref::<MirrorError>() else {
        return vec![format!("{error:#}")];
    };

    let mut lines = Vec::with_capacity(3);
    if cause.to_string() == headline {
        lines.push(cause.user_message());
    } else {
        lines.push(headline);
        lines.push(cause.user_message());
    }

    if cause.kind() == ErrorKind::Configuration {
        lines.push("Try 'mdmirror --help' for usage information.".to_string());
    }

    lines
}

/// Handle errors with user-friendly messages
pub fn handle_error(error: &anyhow::Error) {
    let mut lines = error_lines(error).into_iter();
    if let Some(first) = lines.next() {
        Reporter::new(Verbosity::Quiet).error(&first);
    }

    for line in lines {
        eprintln!("  {line}");
    }
}
