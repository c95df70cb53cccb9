//! Главный модуль приложения Slot Machine на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим SlotState.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};
use crate::state::SlotState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SlotOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera. Пока не нужны.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SlotMessage {}

/// Запросы к сервису (read-only).
pub type SlotQuery = Query;

/// Ответы на запросы.
pub type SlotResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct SlotAbi;

impl ContractAbi for SlotAbi {
    type Operation = SlotOperation;
    type Response = ();
}

impl ServiceAbi for SlotAbi {
    type Query = SlotQuery;
    type QueryResponse = SlotResponse;
}

/// Экспортируем тип состояния, чтобы contract.rs и service.rs могли его использовать.
pub type Storage = SlotState;
