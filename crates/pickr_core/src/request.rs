/// Page number the remote listing operations start at.
pub const FIRST_PAGE: u32 = 1;

/// Page size the remote listing operations use when none is given.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Which listing to fetch and where in it.
///
/// `page` is 1-based and `per_page` is non-zero. Build requests with
/// [`PaginationRequest::recent`] or [`PaginationRequest::search`]; values
/// written directly into the variants are clamped by the accessors. A request
/// is never mutated; [`PaginationRequest::next_page`] builds the follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaginationRequest {
    Recent { page: u32, per_page: u32 },
    Search { query: String, page: u32, per_page: u32 },
}

impl PaginationRequest {
    /// First page of the recent-photos listing with the default page size.
    pub fn recent() -> Self {
        Self::Recent {
            page: FIRST_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// First page of a text search with the default page size.
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
            page: FIRST_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Same request with a different page size. Zero is clamped to one.
    pub fn with_per_page(self, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        match self {
            Self::Recent { page, .. } => Self::Recent { page, per_page },
            Self::Search { query, page, .. } => Self::Search {
                query,
                page,
                per_page,
            },
        }
    }

    /// Page to ask for, never below [`FIRST_PAGE`].
    pub fn page(&self) -> u32 {
        match self {
            Self::Recent { page, .. } | Self::Search { page, .. } => (*page).max(FIRST_PAGE),
        }
    }

    /// Page size to ask for, never zero.
    pub fn per_page(&self) -> u32 {
        match self {
            Self::Recent { per_page, .. } | Self::Search { per_page, .. } => (*per_page).max(1),
        }
    }

    /// The same listing, one page further. All other fields are preserved.
    pub fn next_page(&self) -> Self {
        let page = self.page().saturating_add(1);
        let per_page = self.per_page();
        match self {
            Self::Recent { .. } => Self::Recent { page, per_page },
            Self::Search { query, .. } => Self::Search {
                query: query.clone(),
                page,
                per_page,
            },
        }
    }
}
