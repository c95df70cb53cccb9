use crate::api::dto::{GameStateDto, PaytableDto, PaytableEntryDto, SpinOutcomeDto};
use crate::domain::machine::MachineConfig;
use crate::engine::session::{GameSession, SpinRecord};

/// Маппинг сыгранного спина -> DTO для фронта.
pub fn map_spin_record_to_dto(record: &SpinRecord) -> SpinOutcomeDto {
    SpinOutcomeDto {
        success: true,
        columns: record.outcome.grid.columns.clone(),
        winnings: record.outcome.winnings,
        winning_lines: record.outcome.winning_lines.clone(),
        total_bet: record.total_bet,
        balance: record.balance,
        total_spins: record.total_spins,
        last_win: record.last_win,
    }
}

/// Сессия + конфиг автомата -> GameStateDto.
pub fn map_session_to_state_dto(session: &GameSession, machine: &MachineConfig) -> GameStateDto {
    let symbol_values = machine
        .catalog
        .iter()
        .map(|s| (s.symbol.to_string(), s.value))
        .collect();
    let symbol_counts = machine
        .catalog
        .iter()
        .map(|s| (s.symbol.to_string(), s.count))
        .collect();

    GameStateDto {
        balance: session.balance(),
        total_spins: session.total_spins(),
        last_win: session.last_win(),
        bet_per_line: session.bet_per_line(),
        lines: session.lines(),
        symbol_values,
        symbol_counts,
        max_lines: machine.limits.max_lines.min(machine.rows),
        min_bet: machine.limits.min_bet,
        max_bet: machine.limits.max_bet,
    }
}

/// Каталог -> таблица выплат, в порядке каталога.
pub fn map_catalog_to_paytable(machine: &MachineConfig) -> PaytableDto {
    let entries = machine
        .catalog
        .iter()
        .map(|s| PaytableEntryDto {
            symbol: s.symbol,
            count: s.count,
            value: s.value,
            line_probability: machine.line_hit_probability(s.symbol),
        })
        .collect();

    PaytableDto {
        entries,
        rtp: machine.theoretical_rtp(),
    }
}
