// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{OutputFormat, SortOrder};
use crate::parsers::parse_positive_usize;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "words",
    version = crate::VERSION,
    about = "Count the words in a file, or how often each word appears",
    long_about = None,
    args_override_self = true
)]
pub struct Args {
    /// File to read. Standard input is used when omitted.
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Count the total amount of words in the file, or STDIN if a file is not specified.
    #[arg(short, long, overrides_with = "frequency")]
    pub count: bool,

    /// Count the frequency of each word in the file, or STDIN if a file is not specified.
    #[arg(short, long, overrides_with = "count")]
    pub frequency: bool,

    /// Order of the frequency table, by occurrence count
    #[arg(long, value_enum, default_value = "asc", help_heading = "Frequency table")]
    pub order: SortOrder,

    /// Print only the first N entries of the frequency table
    #[arg(long, value_name = "N", value_parser = parse_positive_usize, help_heading = "Frequency table")]
    pub top: Option<usize>,

    /// Leave out words seen fewer than N times
    #[arg(long, value_name = "N", default_value = "1", value_parser = parse_positive_usize, help_heading = "Frequency table")]
    pub min_count: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["words"]).unwrap();
        assert!(args.input.is_none());
        assert!(!args.count);
        assert!(!args.frequency);
        assert_eq!(args.order, SortOrder::Asc);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.min_count, 1);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn last_mode_flag_wins() {
        let args = Args::try_parse_from(["words", "-c", "-f"]).unwrap();
        assert!(args.frequency);
        assert!(!args.count);

        let args = Args::try_parse_from(["words", "--frequency", "--count"]).unwrap();
        assert!(args.count);
        assert!(!args.frequency);

        let args = Args::try_parse_from(["words", "-f", "-f"]).unwrap();
        assert!(args.frequency);
    }

    #[test]
    fn frequency_options() {
        let args = Args::try_parse_from([
            "words", "-f", "--order", "desc", "--top", "5", "--format", "json", "-vv", "book.txt",
        ])
        .unwrap();
        assert_eq!(args.order, SortOrder::Desc);
        assert_eq!(args.top, Some(5));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input, Some(PathBuf::from("book.txt")));
    }

    #[test]
    fn rejects_zero_top() {
        assert!(Args::try_parse_from(["words", "--top", "0"]).is_err());
    }
}
