//! Генератор барабанов.
//!
//! Проверяем:
//! - колонка никогда не содержит символа больше его count;
//! - в каждой колонке ровно rows символов;
//! - колонки тянут из независимых копий популяции;
//! - одинаковый seed → одинаковая сетка;
//! - невозможные запросы → ошибка конфигурации, без обрезки.

use std::collections::HashMap;

use slot_engine::domain::{Symbol, SymbolCatalog, SymbolSpec};
use slot_engine::engine::{build_population, generate, EngineError, ErrorKind};
use slot_engine::infra::{DeterministicRng, HashRng, RngSeed, SystemRng};

fn counts(column: &[Symbol]) -> HashMap<Symbol, u32> {
    let mut map = HashMap::new();
    for symbol in column {
        *map.entry(*symbol).or_insert(0) += 1;
    }
    map
}

#[test]
fn population_repeats_each_symbol_count_times() {
    let catalog =
        SymbolCatalog::new(vec![SymbolSpec::new('A', 2, 5), SymbolSpec::new('B', 4, 3)]).unwrap();

    let population = build_population(&catalog);

    assert_eq!(population.len(), catalog.population_size());
    let c = counts(&population);
    assert_eq!(c[&Symbol('A')], 2);
    assert_eq!(c[&Symbol('B')], 4);
}

#[test]
fn columns_never_exceed_symbol_count() {
    let catalog = SymbolCatalog::standard();

    for seed in 0..500u64 {
        let mut rng = DeterministicRng::from_seed(seed);
        let grid = generate(3, 3, &catalog, &mut rng).unwrap();

        for column in &grid.columns {
            for (symbol, n) in counts(column) {
                let cap = catalog.count_of(symbol).unwrap();
                assert!(n <= cap, "seed {seed}: {symbol} x{n} > count {cap}");
            }
        }
    }
}

#[test]
fn every_column_has_exactly_rows_symbols() {
    let catalog = SymbolCatalog::standard();
    let mut rng = DeterministicRng::from_seed(7);

    let grid = generate(4, 5, &catalog, &mut rng).unwrap();

    assert_eq!(grid.cols(), 5);
    assert_eq!(grid.rows(), Ok(4));
    for column in &grid.columns {
        let total: u32 = counts(column).values().sum();
        assert_eq!(total as usize, 4);
    }
}

#[test]
fn columns_draw_from_independent_pools() {
    // Популяция ровно из трёх символов: если бы колонки делили пул,
    // вторая колонка не смогла бы получить ещё два A.
    let catalog =
        SymbolCatalog::new(vec![SymbolSpec::new('A', 2, 5), SymbolSpec::new('B', 1, 3)]).unwrap();
    let mut rng = DeterministicRng::from_seed(99);

    let grid = generate(3, 4, &catalog, &mut rng).unwrap();

    for column in &grid.columns {
        let c = counts(column);
        assert_eq!(c[&Symbol('A')], 2);
        assert_eq!(c[&Symbol('B')], 1);
    }
}

#[test]
fn rows_equal_to_population_is_allowed() {
    let catalog = SymbolCatalog::new(vec![SymbolSpec::new('A', 3, 5)]).unwrap();
    let grid = generate(3, 3, &catalog, &mut SystemRng).unwrap();

    for column in &grid.columns {
        assert_eq!(column, &vec![Symbol('A'); 3]);
    }
}

#[test]
fn rows_above_population_is_configuration_error() {
    let catalog =
        SymbolCatalog::new(vec![SymbolSpec::new('A', 1, 5), SymbolSpec::new('B', 1, 3)]).unwrap();
    let mut rng = DeterministicRng::from_seed(1);

    let err = generate(3, 3, &catalog, &mut rng).unwrap_err();

    assert_eq!(err, EngineError::PopulationExhausted { rows: 3, population: 2 });
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn zero_dimensions_are_rejected() {
    let catalog = SymbolCatalog::standard();
    let mut rng = DeterministicRng::from_seed(1);

    assert_eq!(
        generate(0, 3, &catalog, &mut rng),
        Err(EngineError::EmptyGrid { rows: 0, cols: 3 })
    );
    assert_eq!(
        generate(3, 0, &catalog, &mut rng),
        Err(EngineError::EmptyGrid { rows: 3, cols: 0 })
    );
}

#[test]
fn deserialized_catalog_with_duplicates_is_rejected() {
    // serde обходит SymbolCatalog::new: два A по 2 дали бы колонку [A, A, A].
    let catalog: SymbolCatalog = serde_json::from_str(
        r#"[{"symbol":"A","count":2,"value":5},{"symbol":"A","count":2,"value":5}]"#,
    )
    .unwrap();
    let mut rng = DeterministicRng::from_seed(1);

    let err = generate(3, 3, &catalog, &mut rng).unwrap_err();

    assert_eq!(err, EngineError::DuplicateSymbol(Symbol('A')));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn deserialized_empty_catalog_is_rejected() {
    let catalog: SymbolCatalog = serde_json::from_str("[]").unwrap();
    let mut rng = DeterministicRng::from_seed(1);

    assert_eq!(
        generate(3, 3, &catalog, &mut rng),
        Err(EngineError::EmptyCatalog)
    );
}

#[test]
fn same_seed_same_grid() {
    let catalog = SymbolCatalog::standard();

    let a = generate(3, 3, &catalog, &mut DeterministicRng::from_seed(2024)).unwrap();
    let b = generate(3, 3, &catalog, &mut DeterministicRng::from_seed(2024)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn hash_rng_grids_are_reproducible_and_capped() {
    let catalog = SymbolCatalog::standard();
    let seed = RngSeed::from_u64(5).derive(1, 0);

    let a = generate(3, 3, &catalog, &mut seed.to_hash_rng()).unwrap();
    let b = generate(3, 3, &catalog, &mut HashRng::new(seed.bytes)).unwrap();
    assert_eq!(a, b);

    for column in &a.columns {
        for (symbol, n) in counts(column) {
            assert!(n <= catalog.count_of(symbol).unwrap());
        }
    }
}

#[test]
fn all_symbols_eventually_show_up() {
    let catalog = SymbolCatalog::standard();
    let mut rng = DeterministicRng::from_seed(31337);
    let mut seen: HashMap<Symbol, u32> = HashMap::new();

    for _ in 0..200 {
        let grid = generate(3, 3, &catalog, &mut rng).unwrap();
        for column in &grid.columns {
            for symbol in column {
                *seen.entry(*symbol).or_insert(0) += 1;
            }
        }
    }

    for spec in catalog.iter() {
        assert!(seen.contains_key(&spec.symbol), "{} never drawn", spec.symbol);
    }
}
