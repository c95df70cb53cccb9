use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::symbol::Symbol;
use crate::engine::errors::EngineError;

/// Сетка барабанов: упорядоченные колонки, в каждой `rows` символов.
///
/// Хранится по колонкам (как барабан крутится), строка = payline.
/// В JSON уходит как `[[col0...], [col1...], ...]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Grid {
    pub columns: Vec<Vec<Symbol>>,
}

impl Grid {
    pub fn new(columns: Vec<Vec<Symbol>>) -> Self {
        Self { columns }
    }

    /// Собрать сетку из строк (удобно в тестах и для отображения).
    /// Короткие строки обрезают сетку до минимальной ширины.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Self {
        let width = rows.iter().map(Vec::len).min().unwrap_or(0);
        let columns = (0..width)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect();
        Self { columns }
    }

    /// Количество колонок (барабанов).
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Количество строк, если сетка прямоугольная.
    pub fn rows(&self) -> Result<usize, EngineError> {
        let expected = self.columns.first().map(Vec::len).unwrap_or(0);

        for (column, symbols) in self.columns.iter().enumerate() {
            if symbols.len() != expected {
                return Err(EngineError::RaggedGrid {
                    column,
                    expected,
                    actual: symbols.len(),
                });
            }
        }

        Ok(expected)
    }

    pub fn column(&self, index: usize) -> Option<&[Symbol]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Горизонтальная линия `index` через все колонки.
    /// None, если хотя бы одна колонка короче.
    pub fn row(&self, index: usize) -> Option<Vec<Symbol>> {
        self.columns.iter().map(|c| c.get(index).copied()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            let line: Vec<String> = self
                .columns
                .iter()
                .map(|c| c.get(row).map(|s| s.to_string()).unwrap_or_else(|| " ".into()))
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
