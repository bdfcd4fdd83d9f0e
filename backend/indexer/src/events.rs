//! Canonical event types emitted by the funding ledger contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/funding_ledger/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the funding ledger contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new project was appended to the ledger (`created` topic).
    ProjectCreated,
    /// A contribution was accepted into custody (`funded` topic).
    Funded,
    /// The owner withdrew the raised amount (`withdrawn` topic).
    FundWithdrawn,
    /// A contributor reclaimed their pledge (`refunded` topic).
    Refunded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProjectCreated,
            "funded" => Self::Funded,
            "withdrawn" => Self::FundWithdrawn,
            "refunded" => Self::Refunded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::Funded => "funded",
            Self::FundWithdrawn => "fund_withdrawn",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded ledger event, ready to be stored in the database.
///
/// `actor` is the owner for `project_created`, the contributor for `funded`
/// and `refunded`, and absent for `fund_withdrawn` (the recipient is always
/// the stored owner). `amount` is the goal for `project_created` and the
/// moved value for the other kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub event_type: String,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
