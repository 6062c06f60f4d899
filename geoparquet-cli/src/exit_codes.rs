use geoparquet_core::GeoParquetError;

/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
pub const VALIDATION_FAILED: i32 = 2;
pub const RUNTIME_ERROR: i32 = 4;

/// A bad input document is a validation failure; failing to write a
/// well-formed one back out is the tool's problem.
pub fn for_error(err: &GeoParquetError) -> i32 {
    match err {
        GeoParquetError::Parse(_) | GeoParquetError::Validation(_) => VALIDATION_FAILED,
        GeoParquetError::Render(_) => RUNTIME_ERROR,
    }
}
