use crate::separators::error::{require_nonzero, LayoutError};

/// Splits `items` into consecutive pages of `capacity` entries.
///
/// Every page is full except possibly the last. Empty input yields no pages.
pub fn chunk_into_pages<T>(items: &[T], capacity: usize) -> Result<Vec<&[T]>, LayoutError> {
    let capacity = require_nonzero("page_capacity", capacity)?;
    Ok(items.chunks(capacity).collect())
}
