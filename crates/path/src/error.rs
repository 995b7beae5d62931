use std::collections::TryReserveError;

use thiserror::Error;

/// An error that can happen while growing a path.
///
/// Degenerate geometry is never an error: it is either simplified (an arc with a
/// zero radius becomes a line) or dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum PathError {
    /// The segment store or the length table could not be grown.
    ///
    /// The path is left as it was before the failing call.
    #[error("Not enough memory to grow the path")]
    Memory,
}

impl From<TryReserveError> for PathError {
    fn from(_: TryReserveError) -> Self {
        PathError::Memory
    }
}

#[test]
fn reserve_failures_are_memory_errors() {
    let mut v: Vec<u64> = Vec::new();
    let err = v.try_reserve(usize::MAX).unwrap_err();

    let err = PathError::from(err);
    assert_eq!(err, PathError::Memory);
    assert_eq!(err.to_string(), "Not enough memory to grow the path");
}
