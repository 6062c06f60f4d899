mod bbox;
mod common;

pub use bbox::{Axis, Bbox};
pub use common::*;
