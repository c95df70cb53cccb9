use serde::{Deserialize, Serialize};

use crate::domain::machine::MachineConfig;
use crate::engine::session::GameSession;
use crate::infra::mapping::{map_catalog_to_paytable, map_session_to_state_dto};

use super::dto::{GameStateDto, PaytableDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Баланс, счётчики, последняя ставка и лимиты автомата.
    GetState,

    /// Таблица выплат с вероятностями.
    GetPaytable,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    State(GameStateDto),
    Paytable(PaytableDto),
}

pub fn execute_query(machine: &MachineConfig, session: &GameSession, query: Query) -> QueryResponse {
    match query {
        Query::GetState => QueryResponse::State(map_session_to_state_dto(session, machine)),
        Query::GetPaytable => QueryResponse::Paytable(map_catalog_to_paytable(machine)),
    }
}
