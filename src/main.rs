//! Picklist CLI application entry point
//!
//! Reads a list of items, lets the user filter it by typing and pick
//! entries with the keyboard, then prints the picked items to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Pick lines from stdin
//! ls | picklist
//!
//! # Pick from a JSON file and print the names
//! picklist items.json --output names
//!
//! # Try it out with sample data
//! picklist --demo
//!
//! # Quiet mode (only output results)
//! picklist -q items.csv
//! ```
//!
//! # Exit status
//!
//! `0` when the selection was confirmed, `1` when the session was aborted,
//! `2` on errors.
//!
//! # Configuration
//!
//! Defaults are read from the user's config directory
//! (`~/.config/picklist/config.toml` on Linux) and `PICKLIST_*` environment
//! variables; command-line flags take precedence.

use colored::Colorize;
use picklist::{
    PicklistError,
    cli::Cli,
    config::PicklistConfig,
    logging, output,
    ui::{Picker, PickerConfig, RatatuiPicker},
};
use std::process::ExitCode;
use tracing::info;

type Result<T> = std::result::Result<T, PicklistError>;

/// How a session ended
enum Outcome {
    Confirmed,
    Aborted,
}

fn run(cli: &Cli) -> Result<Outcome> {
    let mut config = PicklistConfig::load()?;
    cli.apply_to(&mut config);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match logging::init(&config.log_directory(), &config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            if !cli.quiet {
                eprintln!("{} logging disabled: {e}", "Warning:".yellow());
            }
            None
        }
    };

    let spec = cli.source_spec();
    let items = spec.load()?;
    let total = items.len();
    info!(items = total, ?spec, "starting picker");

    let picker_config = PickerConfig::new(items, config.prompt.clone())
        .with_multi_select(config.multi_select)
        .with_debounce(config.debounce_delay())
        .with_reload(spec);

    let result = RatatuiPicker::new().run(picker_config)?;
    if result.aborted {
        info!("picker aborted");
        if !cli.quiet {
            eprintln!("{}", "Aborted".yellow());
        }
        return Ok(Outcome::Aborted);
    }

    let rendered = output::format_items(&result.selected, config.output)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    if !cli.quiet {
        eprintln!("{}", output::colorize_summary(result.selected.len(), total));
    }
    info!(picked = result.selected.len(), "picker confirmed");

    Ok(Outcome::Confirmed)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(Outcome::Confirmed) => ExitCode::SUCCESS,
        Ok(Outcome::Aborted) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::from(2)
        }
    }
}
