use thiserror::Error;

/// Validation failures raised by the layout core before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invalid page capacity: {field} must be at least 1 (got {value})")]
    InvalidPageCapacity { field: &'static str, value: i64 },
}

/// Converts a caller-supplied grid dimension into a usable count.
///
/// Anything below 1 (including negatives coming off the wire) is rejected.
pub fn positive_dimension(field: &'static str, value: i64) -> Result<usize, LayoutError> {
    usize::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(LayoutError::InvalidPageCapacity { field, value })
}

pub(crate) fn require_nonzero(field: &'static str, value: usize) -> Result<usize, LayoutError> {
    if value == 0 {
        return Err(LayoutError::InvalidPageCapacity { field, value: 0 });
    }
    Ok(value)
}
