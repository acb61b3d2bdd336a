use crate::fetch::PageQuery;
use crate::model::Page;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
}

/// Server-backed list: the selection that drives fetching plus the last
/// page that arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub query: PageQuery,
    /// Last successfully fetched page. Failed fetches never replace it.
    pub page: Page<T>,
    pub phase: LoadPhase,
    pub error: Option<String>,
    /// Raw text of the page-jump box.
    pub jump_input: String,
}

impl<T> ListState<T> {
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            query: PageQuery::new(per_page),
            page: Page::empty(),
            phase: LoadPhase::Idle,
            error: None,
            jump_input: "1".to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Page shown to the user; this is the page of the last good fetch.
    pub fn current_page(&self) -> u32 {
        self.page.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages
    }

    pub fn items(&self) -> &[T] {
        &self.page.items
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::with_per_page(crate::fetch::DEFAULT_PER_PAGE)
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for ListState<T> {}
