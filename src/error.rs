use std::collections::TryReserveError;

/// Errors surfaced by [`ProbingSet`](crate::ProbingSet).
///
/// Capacity exhaustion is not an error; see [`Insertion::Full`](crate::Insertion::Full).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    #[error("failed to allocate storage for {requested} slots: {source}")]
    Alloc {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl SetError {
    pub(crate) fn alloc(requested: usize, source: TryReserveError) -> Self {
        SetError::Alloc { requested, source }
    }
}
