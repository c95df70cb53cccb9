use log::debug;

use crate::domain::grid::Grid;
use crate::domain::symbol::{Symbol, SymbolCatalog};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Взвешенная популяция: каждый символ повторён `count` раз.
/// Одна и та же для всех колонок.
pub fn build_population(catalog: &SymbolCatalog) -> Vec<Symbol> {
    let mut population = Vec::with_capacity(catalog.population_size());
    for spec in catalog.iter() {
        population.extend(std::iter::repeat(spec.symbol).take(spec.count as usize));
    }
    population
}

/// Сгенерировать сетку `rows × cols`.
///
/// Каждая колонка тянет `rows` символов без возвращения из СВОЕЙ копии
/// популяции: внутри колонки символ не встречается чаще своего count,
/// а колонки друг друга не истощают.
pub fn generate<R: RandomSource>(
    rows: usize,
    cols: usize,
    catalog: &SymbolCatalog,
    rng: &mut R,
) -> Result<Grid, EngineError> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::EmptyGrid { rows, cols });
    }
    // Каталог мог прийти из serde в обход SymbolCatalog::new.
    catalog.validate()?;

    let population = build_population(catalog);
    if rows > population.len() {
        return Err(EngineError::PopulationExhausted {
            rows,
            population: population.len(),
        });
    }

    let mut columns = Vec::with_capacity(cols);
    for _ in 0..cols {
        let mut pool = population.clone();
        rng.shuffle(&mut pool);
        pool.truncate(rows);
        columns.push(pool);
    }

    let grid = Grid::new(columns);
    debug!("сгенерирована сетка {rows}x{cols}:\n{grid}");
    Ok(grid)
}
