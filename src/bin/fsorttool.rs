use std::env;
use std::io;
use std::process;

use clap::Parser;

use sorttool_rs::common::{io_error_msg, reset_sigpipe};
use sorttool_rs::report::{DataType, ReportConfig, ReportError, SortingType, process};

#[derive(Parser)]
#[command(
    name = "fsorttool",
    about = "Sort standard input as numbers, lines, or words and report value frequencies"
)]
struct Cli {
    /// Element type: 'long', 'line', or 'word'
    #[arg(
        long = "dataType",
        value_name = "TYPE",
        num_args = 0..=1,
        default_missing_value = "word"
    )]
    data_type: Option<String>,

    /// Sort order: 'natural' or 'byCount'
    #[arg(
        long = "sortingType",
        value_name = "ORDER",
        num_args = 0..=1,
        default_missing_value = "natural"
    )]
    sorting_type: Option<String>,
}

/// The tool keeps Java-style single-dash long options. Rewrite them to
/// the double-dash form clap expects before parsing.
fn normalize_args() -> Vec<String> {
    env::args()
        .map(|arg| match arg.as_str() {
            "-dataType" => "--dataType".to_string(),
            "-sortingType" => "--sortingType".to_string(),
            _ => arg,
        })
        .collect()
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse_from(normalize_args());

    let data_type = match cli.data_type.as_deref() {
        Some(value) => match DataType::parse(value) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("fsorttool: {}", e);
                process::exit(2);
            }
        },
        None => DataType::default(),
    };

    let sorting_type = match cli.sorting_type.as_deref() {
        Some(value) => match SortingType::parse(value) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("fsorttool: {}", e);
                process::exit(2);
            }
        },
        None => SortingType::default(),
    };

    let config = ReportConfig {
        data_type,
        sorting_type,
    };

    let result = process(io::stdin().lock(), io::stdout().lock(), &config);

    match result {
        Ok(()) => {}
        Err(ReportError::EmptyInput) => {
            println!("Nothing to process!");
            process::exit(1);
        }
        Err(ReportError::Io(e)) => {
            eprintln!("fsorttool: {}", io_error_msg(&e));
            process::exit(2);
        }
        Err(e) => {
            eprintln!("fsorttool: {}", e);
            process::exit(2);
        }
    }
}
