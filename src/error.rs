#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumeratorError {
    /// The enumerator has run past its last element.
    #[error("enumerator has no current element")]
    Exhausted,

    #[error("negative count {count} passed to {operation}")]
    NegativeCount { operation: &'static str, count: i64 },
}

impl EnumeratorError {
    pub(crate) fn check_count(operation: &'static str, count: i64) -> Result<usize> {
        if count < 0 {
            return Err(EnumeratorError::NegativeCount { operation, count });
        }
        // Counts beyond the address space behave like "everything".
        Ok(usize::try_from(count).unwrap_or(usize::MAX))
    }
}

pub type Result<T> = std::result::Result<T, EnumeratorError>;

/// Panics with the message used for every read or advance past the end.
#[track_caller]
pub(crate) fn exhausted() -> ! {
    panic!("{}", EnumeratorError::Exhausted)
}
