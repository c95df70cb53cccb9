use serde::{Deserialize, Serialize};

use crate::api::dto::{CommandResponse, DepositDto, ResetDto};
use crate::api::errors::ApiError;
use crate::domain::bet::BetConfig;
use crate::domain::credits::Credits;
use crate::domain::machine::MachineConfig;
use crate::engine::session::GameSession;
use crate::engine::RandomSource;
use crate::infra::mapping::{map_session_to_state_dto, map_spin_record_to_dto};

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`SlotOperation`),
/// которые Linera экспонирует наружу в виде GraphQL mutations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Крутануть барабаны.
    Spin(SpinCommand),

    /// Пополнить баланс.
    Deposit(DepositCommand),

    /// Запомнить ставку/линии без спина.
    SetBet(SetBetCommand),

    /// Начать игру заново.
    Reset,
}

/// Спин. Пустые поля = последняя ставка сессии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinCommand {
    #[serde(default)]
    pub bet_per_line: Option<Credits>,
    #[serde(default)]
    pub lines: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositCommand {
    pub amount: Credits,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetBetCommand {
    pub bet_per_line: Credits,
    pub lines: usize,
}

/// Выполнить команду над сессией.
///
/// На ошибке сессия не меняется: все проверки делает `GameSession`
/// до мутации.
pub fn execute_command<R: RandomSource>(
    machine: &MachineConfig,
    session: &mut GameSession,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Spin(cmd) => {
            let bet = session.bet_or_last(cmd.bet_per_line, cmd.lines);
            let record = session.play_spin(machine, &bet, rng)?;
            Ok(CommandResponse::Spin(map_spin_record_to_dto(&record)))
        }

        Command::Deposit(cmd) => {
            let balance = session.deposit(cmd.amount)?;
            Ok(CommandResponse::Deposit(DepositDto {
                success: true,
                balance,
                message: format!("Deposited ${}", cmd.amount),
            }))
        }

        Command::SetBet(cmd) => {
            session.set_bet(machine, BetConfig::new(cmd.bet_per_line, cmd.lines))?;
            Ok(CommandResponse::BetUpdated(map_session_to_state_dto(
                session, machine,
            )))
        }

        Command::Reset => {
            session.reset();
            Ok(CommandResponse::Reset(ResetDto {
                success: true,
                message: "Game reset successfully".to_string(),
                balance: session.balance(),
            }))
        }
    }
}

/// То же, но команда приходит сырым JSON (как тело запроса).
pub fn execute_json_command<R: RandomSource>(
    machine: &MachineConfig,
    session: &mut GameSession,
    rng: &mut R,
    raw: &str,
) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(raw)?;
    execute_command(machine, session, rng, command)
}
