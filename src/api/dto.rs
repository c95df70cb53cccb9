use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::credits::Credits;
use crate::domain::symbol::Symbol;

/// DTO результата спина (то, что рисует фронт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinOutcomeDto {
    pub success: bool,
    /// Сетка по колонкам: `columns[col][row]`.
    pub columns: Vec<Vec<Symbol>>,
    pub winnings: Credits,
    pub winning_lines: Vec<usize>,
    pub total_bet: Credits,
    pub balance: Credits,
    pub total_spins: u64,
    pub last_win: Credits,
}

/// DTO состояния игры + справочные данные автомата.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameStateDto {
    pub balance: Credits,
    pub total_spins: u64,
    pub last_win: Credits,
    pub bet_per_line: Credits,
    pub lines: usize,
    /// Ключ — метка символа (`"A"`), значение — множитель.
    pub symbol_values: BTreeMap<String, u64>,
    pub symbol_counts: BTreeMap<String, u32>,
    pub max_lines: usize,
    pub min_bet: Credits,
    pub max_bet: Credits,
}

/// Одна строка таблицы выплат.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaytableEntryDto {
    pub symbol: Symbol,
    pub count: u32,
    pub value: u64,
    /// Вероятность, что одна линия целиком из этого символа.
    pub line_probability: f64,
}

/// Таблица выплат автомата.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaytableDto {
    pub entries: Vec<PaytableEntryDto>,
    /// Теоретический возврат на линию (доля ставки на линию).
    pub rtp: f64,
}

/// Ответ на пополнение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositDto {
    pub success: bool,
    pub balance: Credits,
    pub message: String,
}

/// Ответ на сброс игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetDto {
    pub success: bool,
    pub message: String,
    pub balance: Credits,
}

/// Неуспешный ответ: `success = false`, текст и баланс (если есть что показать).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Credits>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    Spin(SpinOutcomeDto),
    Deposit(DepositDto),
    /// Ставка запомнена, возвращаем обновлённое состояние.
    BetUpdated(GameStateDto),
    Reset(ResetDto),
}
