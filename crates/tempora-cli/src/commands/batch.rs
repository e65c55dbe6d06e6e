//! Batch command implementation.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tempora_extractor::DatesNormalizer;
use tracing::debug;

use crate::cli::BatchArgs;
use crate::commands::normalize::{normalize_values, print_results};
use crate::commands::PropertyMode;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the batch command.
///
/// Every line is one value; blank lines yield an empty result so that quiet
/// output stays aligned with the input.
pub fn execute_batch(
    args: BatchArgs,
    normalizer: &DatesNormalizer,
    mode: PropertyMode,
    formatter: &Formatter,
) -> Result<()> {
    let lines = match &args.input {
        Some(path) => {
            debug!("Reading values from {}", path.display());
            read_lines(BufReader::new(File::open(path)?))?
        }
        None => read_lines(io::stdin().lock())?,
    };

    let values = normalize_values(lines.iter().map(String::as_str), normalizer, mode);
    print_results(&values, formatter)
}

/// Read all lines from `reader`.
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<io::Result<Vec<_>>>()?)
}
