//! Движок автомата: генерация барабанов, оценка выплат, сессия баланса.
//!
//! Основные операции:
//!   - `generate` – собрать сетку символов (выборка без возвращения по колонке)
//!   - `evaluate` – посчитать выигрыш по активным линиям
//!   - `spin` – проверить ставку, сгенерировать и оценить
//!   - `GameSession::play_spin` – то же самое плюс бухгалтерия баланса

pub mod errors;
pub mod payout;
pub mod reels;
pub mod session;
pub mod spin;

pub use errors::{EngineError, ErrorKind};
pub use payout::{evaluate, LineWin, Payout};
pub use reels::{build_population, generate};
pub use session::{GameSession, SharedSession, SpinRecord};
pub use spin::{spin, SpinOutcome};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртка над `rand` и hash-RNG для wasm).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
