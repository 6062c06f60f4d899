use crate::types::{Axis, Bbox};
use crate::validate::rules::bounds;
use crate::validate::validator::BoundsLinter;

pub(crate) fn lint_bbox(v: &mut BoundsLinter, bbox: &Bbox) {
    v.lint_extensions(&bbox.additional_properties);

    for axis in Axis::ALL {
        bounds::lint_axis(v, bbox, axis);
    }

    // x and y describe the same set of extents, so their lengths must agree.
    let x_len = axis_len(bbox, Axis::X);
    let y_len = axis_len(bbox, Axis::Y);
    if let (Some(x), Some(y)) = (x_len, y_len) {
        if x != y {
            v.report(
                "$.ymin",
                format!("y bounds have {y} entries but x bounds have {x}"),
            );
        }
    }
}

fn axis_len(bbox: &Bbox, axis: Axis) -> Option<usize> {
    match bbox.axis(axis) {
        (Some(min), Some(max)) if min.len() == max.len() => Some(min.len()),
        _ => None,
    }
}
