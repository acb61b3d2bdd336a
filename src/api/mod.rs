//! HTTP access to the storefront backend.

mod client;
mod csrf;
mod error;

pub use client::{validate_category_name, StoreClient};
pub use csrf::{decode_token, extract_cookie, CsrfSession};
pub use error::RequestError;
