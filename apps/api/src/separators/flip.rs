//! Back-face reordering for duplex printing.
//!
//! A back page is laid out in row-major raster order, `cells_per_row` wide.
//! Turning the printed sheet over mirrors it, so the back cells are reordered
//! to land behind their fronts:
//!
//! - `Long` (book flip): each row is reversed on its own, rows keep their order.
//!   A short last row is reversed over the cells it has; nothing is padded.
//! - `Short` (calendar flip): the whole page is reversed as one flat list,
//!   whatever the row width.
//!
//! Both are involutions.

use crate::separators::error::{require_nonzero, LayoutError};
use crate::separators::models::FlipEdge;

pub fn apply_flip_transformation<T: Clone>(
    cells: &[T],
    flip_edge: FlipEdge,
    cells_per_row: usize,
) -> Result<Vec<T>, LayoutError> {
    let cells_per_row = require_nonzero("cells_per_row", cells_per_row)?;

    let flipped = match flip_edge {
        FlipEdge::Long => cells
            .chunks(cells_per_row)
            .flat_map(|row| row.iter().rev().cloned())
            .collect(),
        // TODO: a true calendar flip keeps column order and reverses row order;
        // confirm against printed output before switching.
        FlipEdge::Short => cells.iter().rev().cloned().collect(),
    };

    Ok(flipped)
}
