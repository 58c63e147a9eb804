//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use anketa::Alphabet;

/// Filter questionnaire records from a labeled plain-text file.
///
/// Reads blank-line-separated records, keeps those with a feminine sex value
/// whose firstname starts with the target letter, and writes them to the
/// output file.
#[derive(Debug, Parser)]
#[command(name = "anketa", version, about)]
pub struct Cli {
    /// Path to the input file with blank-line-separated records
    pub input: PathBuf,

    /// Output file, overwritten on every run
    #[arg(short, long, default_value = "newdata.txt")]
    pub output: PathBuf,

    /// Letter the firstname must start with
    #[arg(long, default_value_t = 'а')]
    pub letter: char,

    /// Alphabet used when comparing the firstname initial
    #[arg(long, value_enum, default_value = "native")]
    pub alphabet: Alphabet,
}
