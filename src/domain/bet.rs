use serde::{Deserialize, Serialize};

use crate::domain::credits::Credits;
use crate::engine::errors::EngineError;

/// Лимиты ставок автомата.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLimits {
    pub min_lines: usize,
    pub max_lines: usize,
    pub min_bet: Credits,
    pub max_bet: Credits,
}

impl BetLimits {
    pub const fn new(min_lines: usize, max_lines: usize, min_bet: Credits, max_bet: Credits) -> Self {
        Self {
            min_lines,
            max_lines,
            min_bet,
            max_bet,
        }
    }

    /// Согласованность самих лимитов с геометрией автомата.
    pub fn validate(&self, rows: usize) -> Result<(), EngineError> {
        if self.min_lines == 0 {
            return Err(EngineError::InvalidLimits("min_lines должен быть >= 1".into()));
        }
        if self.min_lines > self.max_lines {
            return Err(EngineError::InvalidLimits(format!(
                "min_lines={} больше max_lines={}",
                self.min_lines, self.max_lines
            )));
        }
        if self.max_lines > rows {
            return Err(EngineError::InvalidLimits(format!(
                "max_lines={} больше числа строк {rows}",
                self.max_lines
            )));
        }
        if self.min_bet.is_zero() {
            return Err(EngineError::InvalidLimits("min_bet должен быть >= 1".into()));
        }
        if self.min_bet > self.max_bet {
            return Err(EngineError::InvalidLimits(format!(
                "min_bet={} больше max_bet={}",
                self.min_bet, self.max_bet
            )));
        }
        Ok(())
    }
}

/// Конфигурация одной ставки: ставка на линию + сколько линий играем.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetConfig {
    pub bet_per_line: Credits,
    pub lines: usize,
}

impl BetConfig {
    pub const fn new(bet_per_line: Credits, lines: usize) -> Self {
        Self {
            bet_per_line,
            lines,
        }
    }

    /// Полная ставка спина = ставка на линию × линии.
    pub fn total_bet(&self) -> Result<Credits, EngineError> {
        self.bet_per_line
            .checked_mul(self.lines as u64)
            .ok_or(EngineError::Overflow)
    }

    /// Проверка ставки против лимитов.
    /// Линий не может быть больше, чем строк: одна линия = одна строка.
    pub fn validate(&self, limits: &BetLimits, rows: usize) -> Result<(), EngineError> {
        let max_lines = limits.max_lines.min(rows);
        if self.lines < limits.min_lines || self.lines > max_lines {
            return Err(EngineError::LinesOutOfRange {
                lines: self.lines,
                min: limits.min_lines,
                max: max_lines,
            });
        }

        if self.bet_per_line < limits.min_bet || self.bet_per_line > limits.max_bet {
            return Err(EngineError::BetOutOfRange {
                bet: self.bet_per_line,
                min: limits.min_bet,
                max: limits.max_bet,
            });
        }

        Ok(())
    }
}
