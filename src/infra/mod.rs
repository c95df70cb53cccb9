//! Инфраструктурный слой вокруг движка автомата:
//! - RNG-реализации для движка;
//! - seed'ы для воспроизводимых спинов;
//! - загрузка конфига автомата;
//! - маппинги между engine и API.

pub mod config;
pub mod mapping;
pub mod rng;
pub mod rng_seed;

pub use config::*;
pub use mapping::*;
pub use rng::*;
pub use rng_seed::RngSeed;
