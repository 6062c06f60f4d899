use std::path::Path;

use geoparquet_core::{render_bbox, DocumentFormat};

use crate::exit_codes;
use crate::utils::{load_bbox, report_error};
use crate::{OutputArgs, TargetFormat};

pub fn convert_cmd(path: &Path, to: TargetFormat, output: OutputArgs) -> i32 {
    let parsed = match load_bbox(path, &output) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let format = match to {
        TargetFormat::Json => DocumentFormat::Json,
        TargetFormat::Yaml => DocumentFormat::Yaml,
    };

    match render_bbox(&parsed.bbox, format) {
        Ok(text) => {
            if !output.quiet {
                print!("{text}");
                if !text.ends_with('\n') {
                    println!();
                }
            }
            exit_codes::SUCCESS
        }
        Err(e) => report_error(&output, e),
    }
}
