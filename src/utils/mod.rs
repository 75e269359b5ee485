//! Utilities for reporting on parsed text.

mod join;
mod line_index;
mod locatable;

pub use join::Join;
pub use line_index::LineIndex;
pub use locatable::Locatable;
