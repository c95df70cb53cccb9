//! Внешний API автомата.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (спин, пополнение, сброс);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - GraphQL-корень (graphql.rs) — для Linera service, только native.

pub mod commands;
pub mod dto;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod graphql;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
