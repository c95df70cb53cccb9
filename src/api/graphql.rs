//! GraphQL-корень для Linera service (только чтение).

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};

use crate::domain::machine::MachineConfig;
use crate::engine::session::GameSession;

/// Строка paytable в GraphQL-представлении.
#[derive(Clone, Debug, SimpleObject)]
pub struct PaytableEntryObject {
    pub symbol: String,
    pub count: u32,
    pub value: u64,
    pub line_probability: f64,
}

/// Корень запросов над снапшотом сессии.
pub struct SlotQueryRoot {
    machine: MachineConfig,
    session: GameSession,
}

impl SlotQueryRoot {
    pub fn new(machine: MachineConfig, session: GameSession) -> Self {
        Self { machine, session }
    }
}

#[Object]
impl SlotQueryRoot {
    async fn balance(&self) -> u64 {
        self.session.balance().0
    }

    async fn total_spins(&self) -> u64 {
        self.session.total_spins()
    }

    async fn last_win(&self) -> u64 {
        self.session.last_win().0
    }

    async fn bet_per_line(&self) -> u64 {
        self.session.bet_per_line().0
    }

    async fn lines(&self) -> u64 {
        self.session.lines() as u64
    }

    async fn paytable(&self) -> Vec<PaytableEntryObject> {
        self.machine
            .catalog
            .iter()
            .map(|s| PaytableEntryObject {
                symbol: s.symbol.to_string(),
                count: s.count,
                value: s.value,
                line_probability: self.machine.line_hit_probability(s.symbol),
            })
            .collect()
    }

    async fn rtp(&self) -> f64 {
        self.machine.theoretical_rtp()
    }
}

pub type SlotSchema = Schema<SlotQueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(machine: MachineConfig, session: GameSession) -> SlotSchema {
    Schema::build(
        SlotQueryRoot::new(machine, session),
        EmptyMutation,
        EmptySubscription,
    )
    .finish()
}
