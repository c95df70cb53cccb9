use linera_sdk::views::{linera_views, RegisterView, RootView, ViewStorageContext};

use crate::engine::session::GameSession;
use crate::infra::{HashRng, RngSeed};

/// Глобальное состояние приложения-автомата на Linera.
///
/// Сессия целиком сериализуемая, поэтому храним её одним регистром:
/// спин читает, проверяет и пишет её за одну операцию.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct SlotState {
    /// Баланс, счётчики, последняя ставка.
    pub session: RegisterView<GameSession>,

    /// Базовый seed; seed спина = base.derive(resets, total_spins).
    pub base_seed: RegisterView<RngSeed>,

    /// Сколько раз игру сбрасывали (он же session_id для derive).
    pub resets: RegisterView<u64>,
}

impl SlotState {
    /// Источник случайности для следующего спина текущей сессии.
    pub fn spin_rng(&self) -> HashRng {
        self.base_seed
            .get()
            .next_spin_rng(*self.resets.get(), self.session.get())
    }

    /// Сброс игры: стартовая сессия и новый session_id для derive.
    pub fn reset_session(&mut self) {
        self.session.get_mut().reset();
        let resets = *self.resets.get();
        self.resets.set(resets + 1);
    }
}
