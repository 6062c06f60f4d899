use std::path::Path;

use geoparquet_core::{parse_bbox_str, DocumentFormat, GeoParquetError, ParsedBbox};

use crate::exit_codes;
use crate::output::print_error;
use crate::OutputArgs;

/// Prints `err` and returns the exit code it maps to.
pub fn report_error(output: &OutputArgs, err: impl Into<GeoParquetError>) -> i32 {
    let err = err.into();
    print_error(output.format, output.quiet, &err.to_string());
    exit_codes::for_error(&err)
}

/// Reads and parses the bbox document at `path`, reporting failures.
///
/// On error the returned value is the exit code the command should use.
pub fn load_bbox(path: &Path, output: &OutputArgs) -> Result<ParsedBbox, i32> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        print_error(
            output.format,
            output.quiet,
            &format!("cannot read bbox file {}: {e}", path.display()),
        );
        exit_codes::RUNTIME_ERROR
    })?;

    parse_bbox_str(&content, DocumentFormat::Auto).map_err(|e| report_error(output, e))
}
