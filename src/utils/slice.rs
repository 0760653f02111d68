//! Small slice helpers used by the repository consistency check.

use crate::core::{ProdmanError, Result};

/// Linear search for `needle`, returning the index of the first match.
#[must_use]
pub fn string_found_in_array<S: AsRef<str>>(haystack: &[S], needle: &str) -> Option<usize> {
    haystack.iter().position(|item| item.as_ref() == needle)
}

/// Returns a copy of `slice` without the element at `index`.
///
/// # Errors
///
/// Returns [`ProdmanError::IndexOutOfRange`] if `index >= slice.len()`.
pub fn remove_at<T: Clone>(slice: &[T], index: usize) -> Result<Vec<T>> {
    if index >= slice.len() {
        return Err(ProdmanError::IndexOutOfRange {
            index,
            len: slice.len(),
        });
    }

    let mut copy = Vec::with_capacity(slice.len() - 1);
    copy.extend_from_slice(&slice[..index]);
    copy.extend_from_slice(&slice[index + 1..]);
    Ok(copy)
}
