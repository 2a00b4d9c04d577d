use std::fmt::Display;
use std::io::{self, BufWriter, Read, Write};

use thiserror::Error;

use crate::common::io::read_input_lines;
use crate::sort::{le_by_count, le_natural, merge_sort};
use crate::tokenize::{NumberError, parse_numbers, split_words};

use super::freq::count_runs;

/// Which kind of element the input is broken into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// Whitespace-delimited 64-bit signed integers
    Long,
    /// Whole input lines
    Line,
    /// Whitespace-delimited words
    #[default]
    Word,
}

/// How the sorted elements are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortingType {
    /// Ascending value order
    #[default]
    Natural,
    /// Ascending frequency, ties broken by ascending value
    ByCount,
}

/// Unrecognized value for one of the tool's options.
#[derive(Debug, Error)]
#[error("invalid value '{value}' for -{option}")]
pub struct InvalidOptionValue {
    pub option: &'static str,
    pub value: String,
}

impl DataType {
    pub fn parse(value: &str) -> Result<Self, InvalidOptionValue> {
        match value {
            "long" => Ok(DataType::Long),
            "line" => Ok(DataType::Line),
            "word" => Ok(DataType::Word),
            _ => Err(InvalidOptionValue {
                option: "dataType",
                value: value.to_string(),
            }),
        }
    }
}

impl SortingType {
    pub fn parse(value: &str) -> Result<Self, InvalidOptionValue> {
        match value {
            "natural" => Ok(SortingType::Natural),
            "byCount" => Ok(SortingType::ByCount),
            _ => Err(InvalidOptionValue {
                option: "sortingType",
                value: value.to_string(),
            }),
        }
    }
}

/// Configuration for one report run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportConfig {
    pub data_type: DataType,
    pub sorting_type: SortingType,
}

/// Errors that abort a report run. All are fatal; there is no partial
/// output or retry path.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Standard input held no lines at all.
    #[error("no lines to process")]
    EmptyInput,
    #[error(transparent)]
    Number(#[from] NumberError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run the full pipeline: read `input` to EOF, tokenize per the data
/// type, merge-sort, optionally aggregate by frequency, and write the
/// report to `output`.
///
/// The `Total <kind>: <n>.` header is printed before sorting; `<n>` is
/// the element count after tokenization (the raw line count for `line`
/// mode). Empty input (zero lines) aborts before any tokenizing or
/// sorting.
pub fn process<R: Read, W: Write>(
    input: R,
    output: W,
    config: &ReportConfig,
) -> Result<(), ReportError> {
    let lines = read_input_lines(input)?;
    if lines.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let mut writer = BufWriter::new(output);

    match config.data_type {
        DataType::Long => {
            let numbers = parse_numbers(split_words(&lines))?;
            writeln!(writer, "Total numbers: {}.", numbers.len())?;
            let sorted = merge_sort(numbers, &le_natural);
            write_sorted(&mut writer, sorted, false, config.sorting_type)?;
        }
        DataType::Line => {
            writeln!(writer, "Total lines: {}.", lines.len())?;
            let sorted = merge_sort(lines, &le_natural);
            write_sorted(&mut writer, sorted, true, config.sorting_type)?;
        }
        DataType::Word => {
            let words = split_words(&lines);
            writeln!(writer, "Total words: {}.", words.len())?;
            let sorted = merge_sort(words, &le_natural);
            write_sorted(&mut writer, sorted, false, config.sorting_type)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Render a naturally-sorted sequence per the sorting type.
///
/// Natural mode prints `Sorted data:` followed by one element per line
/// for line elements, or all elements space-joined on the header line
/// (no trailing newline) otherwise. By-count mode re-sorts the frequency
/// entries by ascending (count, value) and prints one
/// `<value>: <count> time(s), <pct>%` line per distinct value, where the
/// percentage is `count * 100 / n` truncated and `n` is the element
/// count before aggregation.
fn write_sorted<T, W>(
    writer: &mut W,
    sorted: Vec<T>,
    one_per_line: bool,
    sorting_type: SortingType,
) -> io::Result<()>
where
    T: Ord + Display,
    W: Write,
{
    match sorting_type {
        SortingType::Natural => {
            write!(writer, "Sorted data:")?;
            if one_per_line {
                writeln!(writer)?;
                for item in &sorted {
                    writeln!(writer, "{}", item)?;
                }
            } else {
                for item in &sorted {
                    write!(writer, " {}", item)?;
                }
            }
        }
        SortingType::ByCount => {
            let total = sorted.len();
            let entries = merge_sort(count_runs(sorted), &le_by_count);
            let mut itoa_buf = itoa::Buffer::new();
            for (value, count) in entries {
                write!(writer, "{}: ", value)?;
                writer.write_all(itoa_buf.format(count).as_bytes())?;
                writer.write_all(b" time(s), ")?;
                writer.write_all(itoa_buf.format(count * 100 / total).as_bytes())?;
                writer.write_all(b"%\n")?;
            }
        }
    }
    Ok(())
}
