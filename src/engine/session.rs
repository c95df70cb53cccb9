use std::sync::{Mutex, MutexGuard};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::bet::BetConfig;
use crate::domain::credits::Credits;
use crate::domain::machine::{MachineConfig, DEFAULT_BET_PER_LINE, DEFAULT_LINES, STARTING_BALANCE};
use crate::engine::errors::EngineError;
use crate::engine::spin::{spin, SpinOutcome};
use crate::engine::RandomSource;

/// Итог сыгранного спина вместе с состоянием сессии после него.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinRecord {
    pub outcome: SpinOutcome,
    pub total_bet: Credits,
    pub balance: Credits,
    pub total_spins: u64,
    pub last_win: Credits,
}

/// Игровая сессия: баланс и счётчики между спинами.
///
/// Простой последовательный аккумулятор:
///   balance ← balance − total_bet; balance ← balance + winnings.
/// Любая ошибка оставляет сессию нетронутой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSession {
    balance: Credits,
    total_spins: u64,
    last_win: Credits,
    bet_per_line: Credits,
    lines: usize,
    starting_balance: Credits,
}

impl GameSession {
    pub fn new(starting_balance: Credits) -> Self {
        Self {
            balance: starting_balance,
            total_spins: 0,
            last_win: Credits::ZERO,
            bet_per_line: DEFAULT_BET_PER_LINE,
            lines: DEFAULT_LINES,
            starting_balance,
        }
    }

    pub fn balance(&self) -> Credits {
        self.balance
    }

    pub fn total_spins(&self) -> u64 {
        self.total_spins
    }

    pub fn last_win(&self) -> Credits {
        self.last_win
    }

    pub fn bet_per_line(&self) -> Credits {
        self.bet_per_line
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Последняя использованная ставка.
    pub fn current_bet(&self) -> BetConfig {
        BetConfig::new(self.bet_per_line, self.lines)
    }

    /// Ставка из запроса: недостающие поля берём из последней ставки сессии.
    pub fn bet_or_last(&self, bet_per_line: Option<Credits>, lines: Option<usize>) -> BetConfig {
        BetConfig::new(
            bet_per_line.unwrap_or(self.bet_per_line),
            lines.unwrap_or(self.lines),
        )
    }

    /// Сыграть спин.
    ///
    /// Порядок: проверка ставки → проверка баланса → спин → списание и
    /// зачисление одним шагом. Исход считается до мутации баланса.
    pub fn play_spin<R: RandomSource>(
        &mut self,
        machine: &MachineConfig,
        bet: &BetConfig,
        rng: &mut R,
    ) -> Result<SpinRecord, EngineError> {
        machine.validate_bet(bet)?;
        let total_bet = bet.total_bet()?;

        if self.balance < total_bet {
            warn!(
                "спин отклонён: баланс {} меньше ставки {}",
                self.balance, total_bet
            );
            return Err(EngineError::InsufficientFunds {
                balance: self.balance,
                required: total_bet,
            });
        }

        let outcome = spin(machine, bet, rng)?;

        let balance = self
            .balance
            .checked_sub(total_bet)
            .and_then(|b| b.checked_add(outcome.winnings))
            .ok_or(EngineError::Overflow)?;

        self.balance = balance;
        self.total_spins += 1;
        self.last_win = outcome.winnings;
        self.bet_per_line = bet.bet_per_line;
        self.lines = bet.lines;

        info!(
            "спин #{}: ставка {}, выигрыш {}, линии {:?}, баланс {}",
            self.total_spins, total_bet, outcome.winnings, outcome.winning_lines, self.balance
        );

        Ok(SpinRecord {
            outcome,
            total_bet,
            balance: self.balance,
            total_spins: self.total_spins,
            last_win: self.last_win,
        })
    }

    /// Пополнить баланс. Возвращает новый баланс.
    pub fn deposit(&mut self, amount: Credits) -> Result<Credits, EngineError> {
        if amount.is_zero() {
            return Err(EngineError::InvalidDeposit);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(EngineError::Overflow)?;

        info!("пополнение на {amount}, баланс {}", self.balance);
        Ok(self.balance)
    }

    /// Запомнить ставку без спина (кнопки ставки / линий на фронте).
    pub fn set_bet(&mut self, machine: &MachineConfig, bet: BetConfig) -> Result<(), EngineError> {
        machine.validate_bet(&bet)?;
        self.bet_per_line = bet.bet_per_line;
        self.lines = bet.lines;
        Ok(())
    }

    /// Сбросить игру в стартовое состояние.
    pub fn reset(&mut self) {
        *self = Self::new(self.starting_balance);
        info!("сессия сброшена, баланс {}", self.balance);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}

/// Сессия для нескольких клиентов.
///
/// Вся цепочка read-check-deduct-credit идёт под одним захватом мьютекса,
/// поэтому параллельные спины не теряют обновления баланса.
#[derive(Debug, Default)]
pub struct SharedSession {
    inner: Mutex<GameSession>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    pub fn play_spin<R: RandomSource>(
        &self,
        machine: &MachineConfig,
        bet: &BetConfig,
        rng: &mut R,
    ) -> Result<SpinRecord, EngineError> {
        self.lock()?.play_spin(machine, bet, rng)
    }

    pub fn deposit(&self, amount: Credits) -> Result<Credits, EngineError> {
        self.lock()?.deposit(amount)
    }

    pub fn reset(&self) -> Result<(), EngineError> {
        self.lock()?.reset();
        Ok(())
    }

    /// Копия текущего состояния (для запросов только-чтение).
    pub fn snapshot(&self) -> Result<GameSession, EngineError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameSession>, EngineError> {
        self.inner
            .lock()
            .map_err(|_| EngineError::Internal("мьютекс сессии отравлен"))
    }
}
