//! Product Dash Common Library
//!
//! Web(WASM)フロントエンドと共有される型とユーティリティ

pub mod types;
pub mod normalize;
pub mod filter;
pub mod error;

pub use types::{parse_products, parse_users, Product, User};
pub use normalize::{derive_fields, format_price, resolve_capacity, resolve_color, DerivedFields};
pub use filter::{filter_products, filter_users, searchable_text};
pub use error::{Error, Result};
