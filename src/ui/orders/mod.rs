//! Customer order history screen.

mod intent;
mod reducer;
mod state;

pub use intent::OrdersIntent;
pub use reducer::{OrdersReducer, HISTORY_LOAD_FAILED};
pub use state::{OrderFilters, OrdersState, SortKey, SortOrder, StatusFilter};
