//! Normalize command implementation.

use tempora_extractor::DatesNormalizer;
use tracing::info;

use crate::cli::NormalizeArgs;
use crate::commands::PropertyMode;
use crate::error::Result;
use crate::output::{Formatter, NormalizedValue};

/// Execute the normalize command.
pub fn execute_normalize(
    args: NormalizeArgs,
    normalizer: &DatesNormalizer,
    mode: PropertyMode,
    formatter: &Formatter,
) -> Result<()> {
    let values = normalize_values(args.values.iter().map(String::as_str), normalizer, mode);
    print_results(&values, formatter)
}

/// Run every value through the pipeline.
pub fn normalize_values<'a, I>(
    inputs: I,
    normalizer: &DatesNormalizer,
    mode: PropertyMode,
) -> Vec<NormalizedValue>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs
        .into_iter()
        .map(|input| NormalizedValue::new(input, &mode.normalize(normalizer, input)))
        .collect()
}

/// Print results, followed by a summary in table mode.
pub(crate) fn print_results(values: &[NormalizedValue], formatter: &Formatter) -> Result<()> {
    let matched = values.iter().filter(|value| value.edtf.is_some()).count();
    info!("Normalized {} of {} value(s)", matched, values.len());

    println!("{}", formatter.format_results(values)?);
    if formatter.shows_messages() && !values.is_empty() {
        println!("{}", formatter.summary(values.len(), matched));
    }
    Ok(())
}
