//! Subcommand implementations. Each returns the lines to print.

use anyhow::Result;
use moneyfield_core::codec::RawInput;
use moneyfield_core::{Amount, FormatOptions, format_value, unformat_value};

use crate::args::Commands;

/// Runs a subcommand against the effective options.
pub fn run(command: &Commands, options: &FormatOptions) -> Result<Vec<String>> {
    match command {
        Commands::Format { inputs, number } => format_inputs(inputs, *number, options),
        Commands::Unformat { inputs } => Ok(inputs
            .iter()
            .map(|text| unformat_value(text, options).to_string())
            .collect()),
        Commands::Replay { input } => Ok(replay(input, options)),
        Commands::ShowConfig => Ok(vec![serde_json::to_string_pretty(options)?]),
    }
}

fn format_inputs(inputs: &[String], number: bool, options: &FormatOptions) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| {
            let raw = if number {
                RawInput::Amount(input.parse::<Amount>()?)
            } else {
                RawInput::from(input)
            };
            Ok(format_value(raw, options))
        })
        .collect()
}

/// Appends one character at a time to the field and reformats after each,
/// the way a text input does while the user types.
pub fn replay(input: &str, options: &FormatOptions) -> Vec<String> {
    let mut field = String::new();
    input
        .chars()
        .map(|key| {
            field.push(key);
            field = format_value(field.as_str(), options);
            tracing::debug!(%key, %field, "Keystroke");
            field.clone()
        })
        .collect()
}
