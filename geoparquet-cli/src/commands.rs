use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a bbox document and check its bounds.
    Validate {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Summarize which axes and extension fields a bbox document carries.
    Inspect {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Re-render a bbox document as JSON or YAML.
    Convert {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = TargetFormat::Json)]
        to: TargetFormat,
        #[command(flatten)]
        output: OutputArgs,
    },
}
