use crate::fetch::PageQuery;
use crate::model::Page;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent<T> {
    SetSearch(String),
    /// Empty value clears the filter.
    SetFilter {
        key: String,
        value: String,
    },
    ClearFilters,
    /// Explicit page choice (numbered button). Out-of-range pages are rejected.
    GoToPage(u32),
    NextPage,
    PreviousPage,
    EditJump(String),
    /// Parse the jump box and go there if valid.
    SubmitJump,
    /// Re-fetch the current query.
    Refresh,
    DismissError,
    FetchStarted,
    FetchSucceeded {
        query: PageQuery,
        page: Page<T>,
    },
    FetchFailed {
        query: PageQuery,
        message: String,
    },
}

impl<T: Send + 'static> Intent for ListIntent<T> {}
