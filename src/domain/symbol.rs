use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Символ на барабане. Односимвольная метка: `A`, `B`, `C`, ...
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub char);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Запись каталога: символ + его частота в популяции барабана + множитель выплаты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolSpec {
    pub symbol: Symbol,
    /// Сколько раз символ лежит в популяции одной колонки.
    /// Это и вес, и жёсткий потолок вхождений в колонку.
    pub count: u32,
    /// Множитель к ставке на линию, когда вся линия из этого символа.
    pub value: u64,
}

impl SymbolSpec {
    pub const fn new(label: char, count: u32, value: u64) -> Self {
        Self {
            symbol: Symbol(label),
            count,
            value,
        }
    }
}

/// Неизменяемый каталог символов автомата.
///
/// Порядок записей сохраняется (он же порядок в paytable для фронта).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SymbolCatalog {
    entries: Vec<SymbolSpec>,
}

impl SymbolCatalog {
    /// Каталог с проверкой: непустой, без повторов символов.
    pub fn new(entries: Vec<SymbolSpec>) -> Result<Self, EngineError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Стандартный набор классического автомата:
    /// A — редкий и дорогой, D — частый и дешёвый.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                SymbolSpec::new('A', 2, 5),
                SymbolSpec::new('B', 4, 4),
                SymbolSpec::new('C', 6, 3),
                SymbolSpec::new('D', 8, 2),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.entries.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        for spec in &self.entries {
            if !seen.insert(spec.symbol) {
                return Err(EngineError::DuplicateSymbol(spec.symbol));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolSpec> {
        self.entries.iter()
    }

    pub fn get(&self, symbol: Symbol) -> Option<&SymbolSpec> {
        self.entries.iter().find(|s| s.symbol == symbol)
    }

    pub fn count_of(&self, symbol: Symbol) -> Option<u32> {
        self.get(symbol).map(|s| s.count)
    }

    pub fn value_of(&self, symbol: Symbol) -> Option<u64> {
        self.get(symbol).map(|s| s.value)
    }

    /// Размер взвешенной популяции = сумма всех count.
    pub fn population_size(&self) -> usize {
        self.entries.iter().map(|s| s.count as usize).sum()
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
