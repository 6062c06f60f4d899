use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines; structured results are pretty-printed.
    Text,
    /// One compact JSON object per result or error.
    Json,
}

/// Writes a command's structured result to stdout unless `--quiet` is set.
pub fn print_result<T: Serialize>(format: OutputFormat, quiet: bool, result: &T) {
    if quiet {
        return;
    }
    let rendered = match format {
        OutputFormat::Text => serde_json::to_string_pretty(result),
        OutputFormat::Json => serde_json::to_string(result),
    };
    if let Ok(line) = rendered {
        println!("{line}");
    }
}

/// Writes a failure to stderr, as `{"error": ...}` in JSON mode.
pub fn print_error(format: OutputFormat, quiet: bool, message: &str) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => eprintln!("geoparquet: {message}"),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": message })),
    }
}
