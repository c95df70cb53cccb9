//! RngSeed — доменный seed для RNG автомата.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding на каждый спин:
//!         new = H(domain || old || session_id || spin_index)
//!   - создавать RNG из seed (HashRng везде, DeterministicRng на native)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[cfg(not(target_arch = "wasm32"))]
use crate::infra::rng::DeterministicRng;
use crate::engine::session::GameSession;
use crate::infra::rng::HashRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного спина конкретной сессии.
    pub fn derive(&self, session_id: u64, spin_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"SLOT_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(session_id.to_le_bytes());
        hasher.update(spin_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// RNG очередного спина сессии: номер спина = сколько уже сыграно.
    pub fn next_spin_rng(&self, session_id: u64, session: &GameSession) -> HashRng {
        self.derive(session_id, session.total_spins()).to_hash_rng()
    }

    pub fn to_hash_rng(&self) -> HashRng {
        HashRng::new(self.bytes)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
