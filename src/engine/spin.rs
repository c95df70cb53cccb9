use serde::{Deserialize, Serialize};

use crate::domain::bet::BetConfig;
use crate::domain::credits::Credits;
use crate::domain::grid::Grid;
use crate::domain::machine::MachineConfig;
use crate::engine::errors::EngineError;
use crate::engine::payout::{evaluate, LineWin};
use crate::engine::reels::generate;
use crate::engine::RandomSource;

/// Результат одного спина: сетка для отображения + выигрыш.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinOutcome {
    pub grid: Grid,
    pub winnings: Credits,
    pub winning_lines: Vec<usize>,
    pub line_wins: Vec<LineWin>,
}

/// Один спин без бухгалтерии баланса.
///
/// Списание ставки и зачисление выигрыша — забота вызывающего
/// (см. `GameSession::play_spin`).
pub fn spin<R: RandomSource>(
    machine: &MachineConfig,
    bet: &BetConfig,
    rng: &mut R,
) -> Result<SpinOutcome, EngineError> {
    machine.validate_bet(bet)?;

    let grid = generate(machine.rows, machine.cols, &machine.catalog, rng)?;
    let payout = evaluate(&grid, bet.lines, bet.bet_per_line, &machine.catalog)?;

    Ok(SpinOutcome {
        grid,
        winnings: payout.winnings,
        winning_lines: payout.winning_lines,
        line_wins: payout.line_wins,
    })
}
