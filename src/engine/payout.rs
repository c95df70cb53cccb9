use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::credits::Credits;
use crate::domain::grid::Grid;
use crate::domain::symbol::{Symbol, SymbolCatalog};
use crate::engine::errors::EngineError;

/// Выигрыш одной линии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineWin {
    pub line: usize,
    pub symbol: Symbol,
    pub amount: Credits,
}

/// Итог оценки сетки.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub winnings: Credits,
    /// Индексы выигравших линий, по возрастанию.
    pub winning_lines: Vec<usize>,
    pub line_wins: Vec<LineWin>,
}

impl Payout {
    pub fn is_win(&self) -> bool {
        !self.winning_lines.is_empty()
    }
}

/// Оценить первые `active_lines` строк сетки.
///
/// Линия выигрывает, только если ВСЕ символы строки одинаковые.
/// Выигрыш линии = value(symbol) × bet_per_line. Строки >= active_lines
/// не смотрим вообще.
pub fn evaluate(
    grid: &Grid,
    active_lines: usize,
    bet_per_line: Credits,
    catalog: &SymbolCatalog,
) -> Result<Payout, EngineError> {
    let rows = grid.rows()?;
    if active_lines > rows {
        return Err(EngineError::NotEnoughRows {
            rows,
            lines: active_lines,
        });
    }

    let mut payout = Payout::default();

    for line in 0..active_lines {
        let Some(symbol) = line_symbol(grid, line) else {
            continue;
        };

        let value = catalog
            .value_of(symbol)
            .ok_or(EngineError::UnknownSymbol(symbol))?;
        let amount = bet_per_line
            .checked_mul(value)
            .ok_or(EngineError::Overflow)?;

        payout.winnings = payout
            .winnings
            .checked_add(amount)
            .ok_or(EngineError::Overflow)?;
        payout.winning_lines.push(line);
        payout.line_wins.push(LineWin {
            line,
            symbol,
            amount,
        });

        debug!("линия {line}: {symbol} x{value} -> {amount}");
    }

    Ok(payout)
}

/// Символ, из которого целиком состоит строка, или None.
fn line_symbol(grid: &Grid, row: usize) -> Option<Symbol> {
    let mut symbols = grid.columns.iter().map(|c| c[row]);
    let first = symbols.next()?;
    symbols.all(|s| s == first).then_some(first)
}
