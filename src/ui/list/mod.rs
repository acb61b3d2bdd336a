//! Paginated, filtered, server-backed list view.

mod controller;
mod intent;
mod pagination;
mod reducer;
mod state;

pub use controller::{FetchTicket, ListController};
pub use intent::ListIntent;
pub use pagination::{page_window, pagination_bar, PaginationBar, MAX_PAGE_BUTTONS};
pub use reducer::{ListReducer, INVALID_PAGE_MESSAGE};
pub use state::{ListState, LoadPhase};
