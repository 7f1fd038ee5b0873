//! # tsloc
//!
//! Prints the total number of lines across the TypeScript and JavaScript files
//! of a source tree.
//!
//! ## Usage
//!
//! ```bash
//! # Count ./src, skipping node_modules/ and .git/
//! tsloc
//!
//! # Count another root
//! tsloc path/to/project
//!
//! # Count only non-blank lines, carrying on past unreadable files
//! tsloc --non-blank --skip-unreadable
//!
//! # Count Rust files, skipping target/
//! tsloc . --suffix .rs --exclude-dir target
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use tsloclib::{count_lines, CountOptions, FilterConfig, LineMode, UnreadablePolicy};

/// Root walked when no path is given
const DEFAULT_ROOT: &str = "./src";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tsloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines of code across TypeScript and JavaScript files")
        .arg(
            Arg::new("path")
                .help("Root directory to walk")
                .default_value(DEFAULT_ROOT),
        )
        .arg(
            Arg::new("exclude-dir")
                .short('e')
                .long("exclude-dir")
                .action(ArgAction::Append)
                .help("Directory name to skip (replaces the defaults: node_modules, .git)"),
        )
        .arg(
            Arg::new("suffix")
                .short('s')
                .long("suffix")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("File name suffix to count (replaces the defaults: .ts, .js)"),
        )
        .arg(
            Arg::new("non-blank")
                .long("non-blank")
                .action(ArgAction::SetTrue)
                .help("Count only lines with non-whitespace content"),
        )
        .arg(
            Arg::new("skip-unreadable")
                .long("skip-unreadable")
                .action(ArgAction::SetTrue)
                .help("Warn about and skip files that cannot be read as UTF-8"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to stderr (-v debug, -vv trace)"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> FilterConfig {
    let mut filter = FilterConfig::new();

    if let Some(dirs) = matches.get_many::<String>("exclude-dir") {
        filter = filter.with_excluded_dirs(dirs.cloned());
    }

    if let Some(suffixes) = matches.get_many::<String>("suffix") {
        filter = filter.with_suffixes(suffixes.cloned());
    }

    filter
}

/// Build count options from matches
fn build_options(matches: &ArgMatches) -> CountOptions {
    let line_mode = if matches.get_flag("non-blank") {
        LineMode::NonBlank
    } else {
        LineMode::All
    };
    let on_unreadable = if matches.get_flag("skip-unreadable") {
        UnreadablePolicy::Skip
    } else {
        UnreadablePolicy::Abort
    };

    CountOptions::new()
        .filter(build_filter(matches))
        .line_mode(line_mode)
        .on_unreadable(on_unreadable)
}

/// Set up logging on stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<u64> {
    let path = matches
        .get_one::<String>("path")
        .expect("path has a default value");
    let options = build_options(matches);

    let result = count_lines(path, &options)?;
    tracing::debug!(
        files = result.file_count,
        skipped = result.skipped.len(),
        "finished counting"
    );

    Ok(result.total_lines)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(total) => {
            println!("Total lines of code: {}", total);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
