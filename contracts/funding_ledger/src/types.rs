//! # Types
//!
//! Shared data structures of the funding ledger.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Project` is internally stored as two separate ledger entries:
//!
//! - [`ProjectConfig`] — written once at creation; never mutated.
//! - [`ProjectState`] — written on every `fund` and on `withdraw`.
//!
//! The public API exposes the reconstructed [`Project`] struct for
//! convenience. Per-contributor balances are not part of either entry; they
//! live under their own storage keys because the contributor set is unbounded.
//!
//! ### `is_funded` is a historical marker
//!
//! The flag is set the moment `amount_raised` first reaches `goal` and is
//! never cleared again — not even by `withdraw`, which zeroes
//! `amount_raised`. "The goal was met" and "funds are currently held" are
//! distinct facts; refunds stay blocked forever once the goal was met.

use soroban_sdk::{contracttype, Address, String};

/// Immutable project configuration, written once at creation.
///
/// Stored separately from mutable state so that frequent writes (`fund`)
/// only touch the small [`ProjectState`] entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    /// Address that created the project and receives the raised funds.
    pub owner: Address,
    pub title: String,
    pub description: String,
    /// Target funding amount; always > 0.
    pub goal: i128,
    /// Ledger timestamp after which funding closes; strictly after creation.
    pub deadline: u64,
}

/// Mutable project state, updated on `fund` and `withdraw`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    /// Value currently held in custody for this project. Zeroed by a
    /// successful `withdraw`; never decreased for any other reason.
    pub amount_raised: i128,
    /// Set once `amount_raised` first reaches `goal`; monotone.
    pub is_funded: bool,
}

/// Full public snapshot of a project.
///
/// Used as the read-accessor return type; reconstructed from the split
/// `ProjectConfig` + `ProjectState` storage entries. The per-contributor
/// balances are intentionally not included — query them individually via
/// `get_contribution`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Unique identifier (auto-incremented, append-only).
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub deadline: u64,
    pub amount_raised: i128,
    pub is_funded: bool,
}
