//! Category management screen: list plus "add category" form.

mod intent;
mod reducer;
mod state;

pub use intent::CategoryIntent;
pub use reducer::{CategoryReducer, CREATED_FALLBACK_MESSAGE};
pub use state::{CategoryState, UNKNOWN_CATEGORY};
