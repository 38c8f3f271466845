//! Command-line interface definitions and parsing
//!
//! This module defines the CLI for picklist using the `clap` crate. Flags
//! given on the command line override values from the config file.
//!
//! # Examples
//!
//! ```
//! use picklist::cli::Cli;
//! use picklist::source::SourceSpec;
//!
//! let cli = Cli::parse_from_args(["picklist", "--demo", "--delay-ms", "150"]);
//! assert_eq!(cli.source_spec(), SourceSpec::Demo);
//! ```

use crate::config::{OutputFormat, PicklistConfig};
use crate::source::{SourceFormat, SourceSpec};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "picklist")]
#[command(about = "Filter a list as you type and pick items from it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to read items from (stdin when omitted)
    #[arg(value_name = "FILE", conflicts_with = "demo")]
    pub file: Option<PathBuf>,

    /// Input format (inferred from the file extension when omitted)
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<SourceFormat>,

    /// Use the built-in sample items
    #[arg(long = "demo")]
    pub demo: bool,

    /// Quiet period before typed text filters the list, in milliseconds
    #[arg(short = 'd', long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// How to print the picked items
    #[arg(short = 'o', long = "output", value_enum)]
    pub output: Option<OutputFormat>,

    /// Pick a single item (the one under the cursor)
    #[arg(short = 's', long = "single")]
    pub single: bool,

    /// Placeholder shown in the search bar
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// Log filter directive (e.g. "debug", "picklist=trace")
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Where items should be read from
    #[must_use]
    pub fn source_spec(&self) -> SourceSpec {
        if self.demo {
            return SourceSpec::Demo;
        }
        match &self.file {
            Some(path) => SourceSpec::File {
                path: path.clone(),
                format: self.format,
            },
            None => SourceSpec::Stdin {
                format: self.format.unwrap_or(SourceFormat::Lines),
            },
        }
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, config: &mut PicklistConfig) {
        if let Some(delay_ms) = self.delay_ms {
            config.debounce_ms = delay_ms;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.single {
            config.multi_select = false;
        }
        if let Some(prompt) = &self.prompt {
            config.prompt.clone_from(prompt);
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
    }
}
