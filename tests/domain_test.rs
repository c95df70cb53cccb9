//! Доменные тесты: каталог символов, сетка, кредиты, ставки, конфиг автомата.

use slot_engine::domain::{
    BetConfig, BetLimits, Credits, Grid, MachineConfig, Symbol, SymbolCatalog, SymbolSpec, COLS,
    MAX_BET, MAX_LINES, MIN_BET, MIN_LINES, ROWS,
};
use slot_engine::engine::{EngineError, ErrorKind};

fn s(c: char) -> Symbol {
    Symbol(c)
}

// ----------------------
// SymbolCatalog
// ----------------------

#[test]
fn standard_catalog_matches_classic_machine() {
    let catalog = SymbolCatalog::standard();

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.value_of(s('A')), Some(5));
    assert_eq!(catalog.value_of(s('D')), Some(2));
    assert_eq!(catalog.count_of(s('B')), Some(4));
    assert_eq!(catalog.count_of(s('C')), Some(6));
    assert_eq!(catalog.population_size(), 2 + 4 + 6 + 8);
}

#[test]
fn catalog_population_is_sum_of_counts() {
    let catalog =
        SymbolCatalog::new(vec![SymbolSpec::new('A', 2, 5), SymbolSpec::new('B', 4, 3)]).unwrap();
    assert_eq!(catalog.population_size(), 6);
}

#[test]
fn catalog_rejects_duplicates_and_empty() {
    let dup = SymbolCatalog::new(vec![SymbolSpec::new('A', 2, 5), SymbolSpec::new('A', 1, 1)]);
    assert_eq!(dup, Err(EngineError::DuplicateSymbol(s('A'))));

    let empty = SymbolCatalog::new(Vec::new());
    assert_eq!(empty, Err(EngineError::EmptyCatalog));
    assert_eq!(EngineError::EmptyCatalog.kind(), ErrorKind::Configuration);
}

#[test]
fn unknown_symbol_has_no_value() {
    let catalog = SymbolCatalog::standard();
    assert_eq!(catalog.value_of(s('Z')), None);
    assert!(catalog.get(s('Z')).is_none());
}

// ----------------------
// Grid
// ----------------------

#[test]
fn grid_from_rows_is_transposed_into_columns() {
    let grid = Grid::from_rows(vec![
        vec![s('A'), s('B'), s('C')],
        vec![s('D'), s('A'), s('B')],
    ]);

    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), Ok(2));
    assert_eq!(grid.column(0), Some(&[s('A'), s('D')][..]));
    assert_eq!(grid.row(1), Some(vec![s('D'), s('A'), s('B')]));
    assert_eq!(grid.row(2), None);
}

#[test]
fn ragged_grid_is_reported() {
    let grid = Grid::new(vec![vec![s('A'), s('A')], vec![s('A')]]);
    assert_eq!(
        grid.rows(),
        Err(EngineError::RaggedGrid {
            column: 1,
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn grid_serializes_column_major() {
    let grid = Grid::new(vec![vec![s('A'), s('B')], vec![s('C'), s('D')]]);
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, r#"[["A","B"],["C","D"]]"#);
}

// ----------------------
// Credits
// ----------------------

#[test]
fn credits_checked_arithmetic() {
    assert_eq!(Credits(10).checked_sub(Credits(15)), None);
    assert_eq!(Credits(15).checked_sub(Credits(10)), Some(Credits(5)));
    assert_eq!(Credits(u64::MAX).checked_add(Credits(1)), None);
    assert_eq!(Credits(10).checked_mul(3), Some(Credits(30)));
    assert_eq!(Credits(42).to_string(), "42");
}

// ----------------------
// BetConfig / BetLimits
// ----------------------

fn standard_limits() -> BetLimits {
    BetLimits::new(MIN_LINES, MAX_LINES, MIN_BET, MAX_BET)
}

#[test]
fn total_bet_is_bet_per_line_times_lines() {
    let bet = BetConfig::new(Credits(10), 2);
    assert_eq!(bet.total_bet(), Ok(Credits(20)));
}

#[test]
fn lines_boundaries() {
    let limits = standard_limits();

    assert!(BetConfig::new(Credits(10), 1).validate(&limits, ROWS).is_ok());
    assert!(BetConfig::new(Credits(10), ROWS).validate(&limits, ROWS).is_ok());

    let too_many = BetConfig::new(Credits(10), ROWS + 1).validate(&limits, ROWS);
    assert_eq!(
        too_many,
        Err(EngineError::LinesOutOfRange {
            lines: 4,
            min: 1,
            max: 3
        })
    );

    let zero = BetConfig::new(Credits(10), 0).validate(&limits, ROWS);
    assert!(matches!(zero, Err(EngineError::LinesOutOfRange { .. })));
}

#[test]
fn lines_are_capped_by_rows_even_if_limits_allow_more() {
    let limits = BetLimits::new(1, 5, MIN_BET, MAX_BET);
    let err = BetConfig::new(Credits(1), 3).validate(&limits, 2).unwrap_err();

    assert_eq!(err, EngineError::LinesOutOfRange { lines: 3, min: 1, max: 2 });
    assert_eq!(err.kind(), ErrorKind::InvalidBet);
}

#[test]
fn bet_per_line_boundaries() {
    let limits = standard_limits();

    assert!(BetConfig::new(MIN_BET, 1).validate(&limits, ROWS).is_ok());
    assert!(BetConfig::new(MAX_BET, 1).validate(&limits, ROWS).is_ok());

    let zero = BetConfig::new(Credits::ZERO, 1).validate(&limits, ROWS);
    assert!(matches!(zero, Err(EngineError::BetOutOfRange { .. })));

    let too_big = BetConfig::new(Credits(101), 1).validate(&limits, ROWS);
    assert_eq!(
        too_big,
        Err(EngineError::BetOutOfRange {
            bet: Credits(101),
            min: MIN_BET,
            max: MAX_BET
        })
    );
}

// ----------------------
// MachineConfig
// ----------------------

#[test]
fn standard_machine_is_valid() {
    let machine = MachineConfig::standard();
    assert_eq!(machine.rows, ROWS);
    assert_eq!(machine.cols, COLS);
    assert!(machine.validate().is_ok());
}

#[test]
fn machine_with_more_rows_than_population_is_rejected() {
    let catalog = SymbolCatalog::new(vec![SymbolSpec::new('A', 1, 5), SymbolSpec::new('B', 1, 3)])
        .unwrap();
    let limits = BetLimits::new(1, 2, MIN_BET, MAX_BET);

    let err = MachineConfig::new(3, 3, catalog, limits).unwrap_err();
    assert_eq!(err, EngineError::PopulationExhausted { rows: 3, population: 2 });
}

#[test]
fn machine_with_inconsistent_limits_is_rejected() {
    let limits = BetLimits::new(1, 4, MIN_BET, MAX_BET);
    let err = MachineConfig::new(3, 3, SymbolCatalog::standard(), limits).unwrap_err();
    assert!(matches!(err, EngineError::InvalidLimits(_)));
}

#[test]
fn machine_config_loads_from_json() {
    let raw = r#"{
        "rows": 3,
        "cols": 5,
        "catalog": [
            {"symbol": "X", "count": 3, "value": 10},
            {"symbol": "Y", "count": 9, "value": 2}
        ],
        "limits": {"min_lines": 1, "max_lines": 3, "min_bet": 5, "max_bet": 50}
    }"#;

    let machine = MachineConfig::from_json_str(raw).unwrap();
    assert_eq!(machine.cols, 5);
    assert_eq!(machine.catalog.value_of(s('X')), Some(10));
    assert_eq!(machine.limits.min_bet, Credits(5));
}

#[test]
fn machine_config_json_is_validated() {
    let raw = r#"{
        "rows": 3,
        "cols": 3,
        "catalog": [{"symbol": "X", "count": 2, "value": 10}],
        "limits": {"min_lines": 1, "max_lines": 3, "min_bet": 1, "max_bet": 100}
    }"#;
    assert_eq!(
        MachineConfig::from_json_str(raw),
        Err(EngineError::PopulationExhausted { rows: 3, population: 2 })
    );

    let broken = MachineConfig::from_json_str("{ not json");
    assert!(matches!(broken, Err(EngineError::ConfigLoad(_))));
}

#[test]
fn line_probability_and_rtp_of_standard_machine() {
    let machine = MachineConfig::standard();

    // D: 8 из 20 на каждой из трёх колонок.
    let p = machine.line_hit_probability(s('D'));
    assert!((p - 0.064).abs() < 1e-12);

    // 5*0.001 + 4*0.008 + 3*0.027 + 2*0.064
    let rtp = machine.theoretical_rtp();
    assert!((rtp - 0.246).abs() < 1e-12);

    assert_eq!(machine.line_hit_probability(s('Z')), 0.0);
}
