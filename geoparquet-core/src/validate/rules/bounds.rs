use crate::types::{Axis, Bbox};
use crate::validate::validator::BoundsLinter;

pub(crate) fn lint_axis(v: &mut BoundsLinter, bbox: &Bbox, axis: Axis) {
    let (min_name, max_name) = axis.field_names();
    let min_path = format!("$.{min_name}");
    let max_path = format!("$.{max_name}");

    let (min, max) = match bbox.axis(axis) {
        (None, None) => return,
        (Some(_), None) => {
            v.report(max_path, format!("must be set when {min_name} is set"));
            return;
        }
        (None, Some(_)) => {
            v.report(min_path, format!("must be set when {max_name} is set"));
            return;
        }
        (Some(min), Some(max)) => (min, max),
    };

    let mins = v.parse_bounds(&min_path, min);
    let maxs = v.parse_bounds(&max_path, max);

    if mins.len() != maxs.len() {
        v.report(
            max_path,
            format!(
                "has {} entries but {min_name} has {}",
                maxs.len(),
                mins.len()
            ),
        );
        return;
    }

    for (idx, pair) in mins.iter().zip(&maxs).enumerate() {
        if let (Some(lo), Some(hi)) = pair {
            if lo > hi {
                v.report(
                    format!("{min_path}[{idx}]"),
                    format!("{min_name} ({lo}) is greater than {max_name} ({hi})"),
                );
            }
        }
    }
}
