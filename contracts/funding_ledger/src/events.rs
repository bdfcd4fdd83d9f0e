//! # Events
//!
//! One event per successful mutating entry point, published with a
//! `symbol_short!` leading topic and the project ID as the second topic so
//! indexers can filter per project. Payloads are typed `#[contracttype]`
//! structs rather than bare tuples; off-chain consumers decode them by field
//! name.
//!
//! | Topic       | Payload           |
//! |-------------|-------------------|
//! | `created`   | [`ProjectCreated`] |
//! | `funded`    | [`Funded`]         |
//! | `withdrawn` | [`FundWithdrawn`]  |
//! | `refunded`  | [`Refunded`]       |
//!
//! Failed calls publish nothing: every emit helper runs after the guards and
//! storage writes of its entry point, and the host discards events of a
//! trapped invocation.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A new project was appended to the ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub owner: Address,
    pub goal: i128,
    pub deadline: u64,
}

/// A contribution was accepted into custody.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

/// The owner withdrew the full raised amount of a funded project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundWithdrawn {
    pub project_id: u64,
    pub amount: i128,
}

/// A contributor reclaimed their pledge from an expired unfunded project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_project_created(env: &Env, project_id: u64, owner: &Address, goal: i128, deadline: u64) {
    env.events().publish(
        (symbol_short!("created"), project_id),
        ProjectCreated {
            project_id,
            owner: owner.clone(),
            goal,
            deadline,
        },
    );
}

pub fn emit_funded(env: &Env, project_id: u64, contributor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funded"), project_id),
        Funded {
            project_id,
            contributor: contributor.clone(),
            amount,
        },
    );
}

pub fn emit_fund_withdrawn(env: &Env, project_id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), project_id),
        FundWithdrawn { project_id, amount },
    );
}

pub fn emit_refunded(env: &Env, project_id: u64, contributor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("refunded"), project_id),
        Refunded {
            project_id,
            contributor: contributor.clone(),
            amount,
        },
    );
}
