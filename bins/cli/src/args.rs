//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use moneyfield_shared::FormatOptions;
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "moneyfield", version, about = "Currency field formatter")]
pub struct Cli {
    /// Configuration file (defaults to config/default + config/$RUN_MODE)
    #[arg(long, global = true, env = "MONEYFIELD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OptionOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format values for display, one line per input
    Format {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
        /// Treat inputs as numbers instead of typed text
        #[arg(long)]
        number: bool,
    },
    /// Recover numeric values from display strings
    Unformat {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
    /// Type the input one character at a time and show every display state
    Replay {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Print the effective options as JSON
    ShowConfig,
}

/// Flags that override configured `FormatOptions` fields.
#[derive(Args, Debug, Default)]
pub struct OptionOverrides {
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub prefix: Option<String>,
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub suffix: Option<String>,
    #[arg(long, global = true)]
    pub decimal_separator: Option<String>,
    #[arg(long, global = true)]
    pub thousands_separator: Option<String>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub precision: Option<i64>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub min: Option<Decimal>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max: Option<Decimal>,
    /// `--allow-blank` turns it on, `--allow-blank=false` turns it off
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_blank: Option<bool>,
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub disable_negative: Option<bool>,
    #[arg(long = "minimum-characters", global = true)]
    pub minimum_number_of_characters: Option<usize>,
}

impl OptionOverrides {
    /// Applies every flag that was given on top of `options`.
    pub fn apply(&self, mut options: FormatOptions) -> FormatOptions {
        if let Some(prefix) = &self.prefix {
            options.prefix.clone_from(prefix);
        }
        if let Some(suffix) = &self.suffix {
            options.suffix.clone_from(suffix);
        }
        if let Some(separator) = &self.decimal_separator {
            options.decimal_separator.clone_from(separator);
        }
        if let Some(separator) = &self.thousands_separator {
            options.thousands_separator.clone_from(separator);
        }
        if let Some(precision) = self.precision {
            options.precision = precision;
        }
        if let Some(min) = self.min {
            options.min = min;
        }
        if let Some(max) = self.max {
            options.max = max;
        }
        if let Some(minimum) = self.minimum_number_of_characters {
            options.minimum_number_of_characters = minimum;
        }
        if let Some(allow_blank) = self.allow_blank {
            options.allow_blank = allow_blank;
        }
        if let Some(disable_negative) = self.disable_negative {
            options.disable_negative = disable_negative;
        }
        options
    }
}
