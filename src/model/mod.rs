//! Records returned by the storefront backend.

mod catalog;
mod money;
mod order;
mod page;
mod record;

pub use catalog::{Category, MessageBody, NewCategory, Product};
pub use money::Money;
pub use order::{Order, OrderLine, OrderStatus};
pub use page::Page;
pub use record::RecordId;
