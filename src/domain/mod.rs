//! Доменная модель автомата: символы, каталог, сетка, кредиты, ставки, конфиг.

pub mod bet;
pub mod credits;
pub mod grid;
pub mod machine;
pub mod symbol;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Grid и т.п.
pub use bet::*;
pub use credits::*;
pub use grid::*;
pub use machine::*;
pub use symbol::*;
