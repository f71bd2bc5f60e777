use crate::error::{OperationError, Result};

/// Returns the sub-slice of `seq` starting at `start` with at most `length`
/// elements.
///
/// - A negative `start` is treated as `0`.
/// - A `start` at or past the end yields an empty slice.
/// - A range running past the end is truncated.
///
/// # Errors
///
/// Returns `OperationError::InvalidArgument` if `length` is negative.
pub fn extract_range<T>(seq: &[T], start: isize, length: isize) -> Result<&[T]> {
    let Ok(length) = usize::try_from(length) else {
        return Err(OperationError::InvalidArgument {
            parameter: "length",
            value: length,
        }
        .into());
    };
    let start = usize::try_from(start).unwrap_or(0);
    if start >= seq.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(length).min(seq.len());
    Ok(&seq[start..end])
}
