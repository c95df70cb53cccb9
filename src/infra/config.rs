use std::path::{Path, PathBuf};

use log::info;

use crate::domain::machine::MachineConfig;
use crate::engine::errors::EngineError;

/// Переменная окружения с путём к JSON-конфигу автомата.
pub const CONFIG_ENV_VAR: &str = "SLOT_MACHINE_CONFIG";

/// Откуда брать конфиг: явный путь > переменная окружения > стандартный автомат.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// Загрузить и проверить конфиг автомата.
pub fn load_machine_config(explicit: Option<&Path>) -> Result<MachineConfig, EngineError> {
    match resolve_config_path(explicit) {
        Some(path) => {
            let config = MachineConfig::from_json_file(&path)?;
            info!(
                "конфиг автомата загружен из {}: {}x{}, символов {}",
                path.display(),
                config.rows,
                config.cols,
                config.catalog.len()
            );
            Ok(config)
        }
        None => {
            info!("используется стандартный автомат 3x3");
            Ok(MachineConfig::standard())
        }
    }
}
