use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::credits::Credits;
use crate::domain::symbol::Symbol;

/// Категория ошибки: то, как её видит вызывающий слой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    /// Невозможная конфигурация (строки/колонки/веса) — фатально для вызова.
    Configuration,
    /// Ставка или число линий вне лимитов.
    InvalidBet,
    /// Некорректная сумма пополнения.
    InvalidAmount,
    /// Баланс меньше полной ставки.
    InsufficientFunds,
    Internal,
}

/// Ошибки движка автомата.
///
/// Все ошибки локальные: ни генератор, ни оценщик ничего не мутируют,
/// откатывать нечего.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Каталог символов пуст")]
    EmptyCatalog,

    #[error("Символ {0} встречается в каталоге больше одного раза")]
    DuplicateSymbol(Symbol),

    #[error("Символ {0} отсутствует в каталоге")]
    UnknownSymbol(Symbol),

    #[error("Сетка должна быть непустой: rows={rows}, cols={cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("Нельзя вытянуть {rows} символов из популяции размером {population}")]
    PopulationExhausted { rows: usize, population: usize },

    #[error("Колонка {column} содержит {actual} символов, ожидалось {expected}")]
    RaggedGrid {
        column: usize,
        expected: usize,
        actual: usize,
    },

    #[error("В сетке {rows} строк, а активных линий {lines}")]
    NotEnoughRows { rows: usize, lines: usize },

    #[error("Некорректные лимиты автомата: {0}")]
    InvalidLimits(String),

    #[error("Не удалось загрузить конфиг автомата: {0}")]
    ConfigLoad(String),

    #[error("Переполнение при расчёте суммы")]
    Overflow,

    #[error("Ставка на линию {bet} вне диапазона [{min}, {max}]")]
    BetOutOfRange {
        bet: Credits,
        min: Credits,
        max: Credits,
    },

    #[error("Количество линий {lines} вне диапазона [{min}, {max}]")]
    LinesOutOfRange { lines: usize, min: usize, max: usize },

    #[error("Сумма пополнения должна быть положительной")]
    InvalidDeposit,

    #[error("Недостаточно кредитов: баланс {balance}, нужно {required}")]
    InsufficientFunds { balance: Credits, required: Credits },

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EmptyCatalog
            | EngineError::DuplicateSymbol(_)
            | EngineError::UnknownSymbol(_)
            | EngineError::EmptyGrid { .. }
            | EngineError::PopulationExhausted { .. }
            | EngineError::RaggedGrid { .. }
            | EngineError::NotEnoughRows { .. }
            | EngineError::InvalidLimits(_)
            | EngineError::ConfigLoad(_)
            | EngineError::Overflow => ErrorKind::Configuration,

            EngineError::BetOutOfRange { .. } | EngineError::LinesOutOfRange { .. } => {
                ErrorKind::InvalidBet
            }

            EngineError::InvalidDeposit => ErrorKind::InvalidAmount,
            EngineError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }
}
