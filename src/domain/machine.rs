use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::bet::{BetConfig, BetLimits};
use crate::domain::credits::Credits;
use crate::domain::symbol::{Symbol, SymbolCatalog};
use crate::engine::errors::EngineError;

// Геометрия и лимиты классического автомата 3×3.
pub const ROWS: usize = 3;
pub const COLS: usize = 3;
pub const MIN_LINES: usize = 1;
pub const MAX_LINES: usize = 3;
pub const MIN_BET: Credits = Credits(1);
pub const MAX_BET: Credits = Credits(100);

// Стартовое состояние игровой сессии.
pub const STARTING_BALANCE: Credits = Credits(1000);
pub const DEFAULT_BET_PER_LINE: Credits = Credits(10);
pub const DEFAULT_LINES: usize = 2;

/// Полная конфигурация автомата: геометрия, каталог символов, лимиты ставок.
/// Read-only, фиксируется при старте процесса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineConfig {
    pub rows: usize,
    pub cols: usize,
    pub catalog: SymbolCatalog,
    pub limits: BetLimits,
}

impl MachineConfig {
    pub fn standard() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            catalog: SymbolCatalog::standard(),
            limits: BetLimits::new(MIN_LINES, MAX_LINES, MIN_BET, MAX_BET),
        }
    }

    /// Конфиг с проверкой.
    pub fn new(
        rows: usize,
        cols: usize,
        catalog: SymbolCatalog,
        limits: BetLimits,
    ) -> Result<Self, EngineError> {
        let config = Self {
            rows,
            cols,
            catalog,
            limits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Проверить, что из такого конфига вообще можно собрать спин.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        self.catalog.validate()?;

        let population = self.catalog.population_size();
        if self.rows > population {
            return Err(EngineError::PopulationExhausted {
                rows: self.rows,
                population,
            });
        }

        self.limits.validate(self.rows)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let config: MachineConfig =
            serde_json::from_str(raw).map_err(|e| EngineError::ConfigLoad(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EngineError::ConfigLoad(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    /// Проверить ставку против лимитов этого автомата.
    pub fn validate_bet(&self, bet: &BetConfig) -> Result<(), EngineError> {
        bet.validate(&self.limits, self.rows)
    }

    /// Вероятность того, что конкретная линия целиком из `symbol`.
    ///
    /// Любая фиксированная позиция колонки при выборке без возвращения
    /// занята символом с вероятностью count/N, колонки независимы.
    pub fn line_hit_probability(&self, symbol: Symbol) -> f64 {
        let population = self.catalog.population_size();
        if population == 0 {
            return 0.0;
        }
        let count = self.catalog.count_of(symbol).unwrap_or(0);
        (count as f64 / population as f64).powf(self.cols as f64)
    }

    /// Теоретический возврат игроку на одну линию (доля от ставки на линию).
    pub fn theoretical_rtp(&self) -> f64 {
        self.catalog
            .iter()
            .map(|spec| spec.value as f64 * self.line_hit_probability(spec.symbol))
            .sum()
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
