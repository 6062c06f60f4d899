use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "geoparquet", version, about = "GeoParquet bbox metadata tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run_command(cli.command);
    std::process::exit(exit_code);
}

fn run_command(command: Command) -> i32 {
    match command {
        Command::Validate { path, output } => cmd::validate::validate_cmd(&path, output),
        Command::Inspect { path, output } => cmd::inspect::inspect_cmd(&path, output),
        Command::Convert { path, to, output } => cmd::convert::convert_cmd(&path, to, output),
    }
}
