use std::path::Path;

use geoparquet_core::{Axis, Bbox};
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::utils::load_bbox;
use crate::OutputArgs;

#[derive(Serialize)]
struct AxisInfo {
    axis: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_len: Option<usize>,
}

#[derive(Serialize)]
struct InspectResult {
    format: String,
    axes: Vec<AxisInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extension_keys: Vec<String>,
}

fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
        Axis::Z => "z",
    }
}

fn collect_axes(bbox: &Bbox) -> Vec<AxisInfo> {
    Axis::ALL
        .into_iter()
        .filter_map(|axis| {
            let (min, max) = bbox.axis(axis);
            if min.is_none() && max.is_none() {
                return None;
            }
            Some(AxisInfo {
                axis: axis_label(axis),
                min_len: min.map(<[String]>::len),
                max_len: max.map(<[String]>::len),
            })
        })
        .collect()
}

pub fn inspect_cmd(path: &Path, output: OutputArgs) -> i32 {
    let parsed = match load_bbox(path, &output) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let result = InspectResult {
        format: format!("{:?}", parsed.format),
        axes: collect_axes(&parsed.bbox),
        extension_keys: parsed.bbox.additional_properties.keys().cloned().collect(),
    };

    if output.format == OutputFormat::Text && !output.quiet {
        println!("format: {}", result.format);
        if result.axes.is_empty() {
            println!("axes: (none)");
        }
        for a in &result.axes {
            let len = |n: Option<usize>| n.map_or_else(|| "-".to_string(), |n| n.to_string());
            println!(
                "axis {}: min={} max={}",
                a.axis,
                len(a.min_len),
                len(a.max_len)
            );
        }
        for key in &result.extension_keys {
            println!("extension: {key}");
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}
