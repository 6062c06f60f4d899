use std::path::Path;

use geoparquet_core::Validate;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::utils::load_bbox;
use crate::OutputArgs;

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    format: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

pub fn validate_cmd(path: &Path, output: OutputArgs) -> i32 {
    let parsed = match load_bbox(path, &output) {
        Ok(p) => p,
        Err(code) => return code,
    };

    match parsed.bbox.validate() {
        Ok(()) => {
            if output.format == OutputFormat::Text && !output.quiet {
                println!("ok: valid bbox ({:?})", parsed.format);
            } else {
                let result = ValidateResult {
                    valid: true,
                    format: format!("{:?}", parsed.format),
                    errors: vec![],
                };
                print_result(output.format, output.quiet, &result);
            }
            exit_codes::SUCCESS
        }
        Err(err) => {
            let errors: Vec<String> = err.violations.iter().map(ToString::to_string).collect();
            if output.format == OutputFormat::Text && !output.quiet {
                eprintln!("geoparquet: {err}");
                for e in &errors {
                    eprintln!("- {e}");
                }
            } else {
                let result = ValidateResult {
                    valid: false,
                    format: format!("{:?}", parsed.format),
                    errors,
                };
                print_result(output.format, output.quiet, &result);
            }
            exit_codes::for_error(&err.into())
        }
    }
}
