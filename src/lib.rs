mod auth;
mod config;
mod dto;
mod engine;
mod error;
pub mod http;
pub mod server;
pub mod stores;

pub use auth::{AuthEngine, Claims};
pub use config::Config;
pub use dto::{
    ListRequest, ListResult, Payment, PaymentStatus, Role, SortKey, SortOrder, StatusSummary,
    User,
};
pub use engine::PaymentEngine;
pub use error::{Error, Result, TokenError};
pub use stores::MemoryStore;
