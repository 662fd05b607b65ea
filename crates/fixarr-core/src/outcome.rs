//! The construction result and its uniform unwrap.

use crate::error::ArrayError;

/// Result of constructing or cloning a container.
pub type ArrayResult<C> = Result<C, ArrayError>;

/// Split a construction result into an output slot and a diagnostic.
///
/// On success the container is moved into `out` and `None` is returned.
/// On failure `out` is reset to `None` and the static diagnostic message
/// is returned. Works for every container type.
pub fn unwrap_into<C>(result: ArrayResult<C>, out: &mut Option<C>) -> Option<&'static str> {
    match result {
        Ok(container) => {
            *out = Some(container);
            None
        }
        Err(e) => {
            *out = None;
            Some(e.message())
        }
    }
}
