use crate::PaginationRequest;

/// Side effects requested by [`crate::update`]; the engine executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page. Dropped by the executor if a fetch is already in flight.
    FetchPage(PaginationRequest),
}
