// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser, ValueHint};

// Missing and empty inputs both exit 1 with the usage line, not clap's error.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "set_version",
    version,
    about = "Replaces the unset version placeholder in a file with the given value"
)]
pub struct Args {
    /// Value which will be set
    #[arg(long, value_name = "VALUE")]
    pub value: Option<String>,

    /// Path to the file holding `version = "unset"`
    #[arg(
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub path: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
