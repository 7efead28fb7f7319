//! 外部APIクライアント

pub mod products;
pub mod users;
