use serde::{Deserialize, Serialize};

use crate::api::dto::FailureDto;
use crate::domain::credits::Credits;
use crate::engine::{EngineError, ErrorKind};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Ставка или линии вне лимитов.
    InvalidBet(String),

    /// Баланса не хватает на полную ставку.
    InsufficientFunds { balance: Credits, required: Credits },

    /// Сумма пополнения <= 0.
    InvalidAmount,

    /// Конфиг автомата не позволяет выполнить операцию.
    Configuration(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl ApiError {
    /// Текст для пользователя.
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::InvalidBet(msg)
            | ApiError::Configuration(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::InsufficientFunds { .. } => "Insufficient credits".to_string(),
            ApiError::InvalidAmount => "Invalid deposit amount".to_string(),
        }
    }

    /// Собрать неуспешный ответ; баланс прикладываем, если он известен.
    pub fn to_failure(&self, balance: Option<Credits>) -> FailureDto {
        FailureDto {
            success: false,
            message: self.message(),
            balance,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match (err.kind(), &err) {
            (_, EngineError::InsufficientFunds { balance, required }) => {
                ApiError::InsufficientFunds {
                    balance: *balance,
                    required: *required,
                }
            }
            (ErrorKind::InvalidBet, _) => ApiError::InvalidBet(err.to_string()),
            (ErrorKind::InvalidAmount, _) => ApiError::InvalidAmount,
            (ErrorKind::Configuration, _) => ApiError::Configuration(err.to_string()),
            (ErrorKind::InsufficientFunds | ErrorKind::Internal, _) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
