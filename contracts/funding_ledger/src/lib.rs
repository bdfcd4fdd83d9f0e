//! # Funding Ledger Contract
//!
//! This is the root crate of the crowdfunding **funding ledger**. It exposes
//! the single Soroban contract `FundingLedger` whose entry points cover the
//! full campaign lifecycle:
//!
//! | Phase      | Entry Point(s)                                    |
//! |------------|---------------------------------------------------|
//! | Bootstrap  | [`FundingLedger::init`]                           |
//! | Creation   | [`FundingLedger::create_project`]                 |
//! | Funding    | [`FundingLedger::fund`]                           |
//! | Settlement | [`FundingLedger::withdraw`], [`FundingLedger::refund`] |
//! | Queries    | `get_project`, `get_project_count`, `get_contribution` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event publishing to
//! [`events`]. This file contains the guard checks and state transitions of
//! the four mutating operations and nothing else.
//!
//! ## Settlement discipline
//!
//! `withdraw` and `refund` zero the bookkeeping entry *before* invoking the
//! token transfer. A transfer that fails (or that attempts a nested call
//! back into this contract) aborts the invocation with
//! [`Error::TransferFailed`], and the host rolls back every storage write of
//! the call, so no operation's effect set is ever applied twice for one
//! logical request.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String,
};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_transfer;

pub use events::{FundWithdrawn, Funded, ProjectCreated, Refunded};
use storage::{
    get_and_increment_project_id, get_contribution, get_project_count, get_token, load_project,
    load_project_config, load_project_state, save_project, save_project_state, set_contribution,
    set_token,
};
pub use types::{Project, ProjectConfig, ProjectState};

const SECONDS_PER_DAY: u64 = 86_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    ProjectNotFound    = 1,
    InvalidGoal        = 2,
    InvalidDuration    = 3,
    ZeroValue          = 4,
    DeadlinePassed     = 5,
    AlreadyFunded      = 6,
    NotOwner           = 7,
    GoalNotReached     = 8,
    NothingToWithdraw  = 9,
    DeadlineNotPassed  = 10,
    ProjectIsFunded    = 11,
    NoContribution     = 12,
    TransferFailed     = 13,
    AlreadyInitialized = 14,
    NotInitialized     = 15,
}

#[contract]
pub struct FundingLedger;

#[contractimpl]
impl FundingLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger with the single funding asset.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// Every `fund`, `withdraw`, and `refund` moves value in this one token;
    /// there is no per-project asset choice.
    pub fn init(env: Env, token: Address) {
        if get_token(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_token(&env, &token);
    }

    // ─────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────

    /// Append a new funding project and return its ID.
    ///
    /// - `owner` must sign; it receives the raised funds on `withdraw`.
    /// - `goal` must be > 0.
    /// - `duration_days` must be > 0; the deadline is the current ledger
    ///   timestamp plus that many days.
    pub fn create_project(
        env: Env,
        owner: Address,
        title: String,
        description: String,
        goal: i128,
        duration_days: u64,
    ) -> u64 {
        owner.require_auth();

        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }

        if duration_days == 0 {
            panic_with_error!(&env, Error::InvalidDuration);
        }
        let Some(deadline) = duration_days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|d| env.ledger().timestamp().checked_add(d))
        else {
            panic_with_error!(&env, Error::InvalidDuration);
        };

        let id = get_and_increment_project_id(&env);

        let config = types::ProjectConfig {
            id,
            owner: owner.clone(),
            title,
            description,
            goal,
            deadline,
        };
        let state = types::ProjectState {
            amount_raised: 0,
            is_funded: false,
        };
        save_project(&env, &config, &state);

        events::emit_project_created(&env, id, &owner, goal, deadline);
        id
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Pledge `amount` of the funding asset to an open project.
    ///
    /// Accepted only strictly before the deadline and only while the goal has
    /// not been reached yet. The contribution that pushes `amount_raised` to
    /// or past the goal is accepted in full; overfunding is permitted and the
    /// excess is not returned.
    ///
    /// Bookkeeping (contribution balance, running total, funded flag) is
    /// committed before the token transfer into custody is invoked.
    pub fn fund(env: Env, contributor: Address, project_id: u64, amount: i128) {
        contributor.require_auth();

        let Some(config) = load_project_config(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };
        let Some(mut state) = load_project_state(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };

        if env.ledger().timestamp() >= config.deadline {
            panic_with_error!(&env, Error::DeadlinePassed);
        }
        if state.is_funded {
            panic_with_error!(&env, Error::AlreadyFunded);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::ZeroValue);
        }

        let pledged = get_contribution(&env, project_id, &contributor) + amount;
        set_contribution(&env, project_id, &contributor, pledged);

        state.amount_raised += amount;
        // Checked exactly once per call, after the increment; never reset.
        if state.amount_raised >= config.goal {
            state.is_funded = true;
        }
        save_project_state(&env, project_id, &state);

        let token_client = token::Client::new(&env, &Self::funding_token(&env));
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        events::emit_funded(&env, project_id, &contributor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Pay the full raised amount out to the project owner.
    ///
    /// Only the owner may call, only once the goal was met, and only while a
    /// non-zero balance is held (a second call fails with
    /// `NothingToWithdraw`). `amount_raised` is zeroed before the transfer is
    /// attempted.
    pub fn withdraw(env: Env, caller: Address, project_id: u64) {
        caller.require_auth();

        let Some(config) = load_project_config(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };
        let Some(mut state) = load_project_state(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };

        if caller != config.owner {
            panic_with_error!(&env, Error::NotOwner);
        }
        if !state.is_funded {
            panic_with_error!(&env, Error::GoalNotReached);
        }
        if state.amount_raised <= 0 {
            panic_with_error!(&env, Error::NothingToWithdraw);
        }

        let amount = state.amount_raised;
        state.amount_raised = 0;
        save_project_state(&env, project_id, &state);

        let token_client = token::Client::new(&env, &Self::funding_token(&env));
        if token_client
            .try_transfer(&env.current_contract_address(), &config.owner, &amount)
            .is_err()
        {
            panic_with_error!(&env, Error::TransferFailed);
        }

        events::emit_fund_withdrawn(&env, project_id, amount);
    }

    /// Return a contributor's pledge after an unfunded project expired.
    ///
    /// Allowed only strictly after the deadline and only while the project
    /// never reached its goal; once `is_funded` is set, refunds are blocked
    /// forever, regardless of any later withdrawal. The contribution balance
    /// is zeroed before the transfer is attempted. `amount_raised` keeps the
    /// historical total; it only ever drops to zero through `withdraw`.
    pub fn refund(env: Env, contributor: Address, project_id: u64) {
        contributor.require_auth();

        let Some(config) = load_project_config(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };
        let Some(state) = load_project_state(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };

        if env.ledger().timestamp() <= config.deadline {
            panic_with_error!(&env, Error::DeadlineNotPassed);
        }
        if state.is_funded {
            panic_with_error!(&env, Error::ProjectIsFunded);
        }

        let amount = get_contribution(&env, project_id, &contributor);
        if amount <= 0 {
            panic_with_error!(&env, Error::NoContribution);
        }

        set_contribution(&env, project_id, &contributor, 0);

        let token_client = token::Client::new(&env, &Self::funding_token(&env));
        if token_client
            .try_transfer(&env.current_contract_address(), &contributor, &amount)
            .is_err()
        {
            panic_with_error!(&env, Error::TransferFailed);
        }

        events::emit_refunded(&env, project_id, &contributor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve the public snapshot of a project by its ID.
    pub fn get_project(env: Env, project_id: u64) -> Project {
        let Some(project) = load_project(&env, project_id) else {
            panic_with_error!(&env, Error::ProjectNotFound);
        };
        project
    }

    /// Number of projects ever created.
    pub fn get_project_count(env: Env) -> u64 {
        get_project_count(&env)
    }

    /// Cumulative contribution of `contributor` to a project; 0 if none.
    pub fn get_contribution(env: Env, project_id: u64, contributor: Address) -> i128 {
        if load_project_config(&env, project_id).is_none() {
            panic_with_error!(&env, Error::ProjectNotFound);
        }
        get_contribution(&env, project_id, &contributor)
    }

    fn funding_token(env: &Env) -> Address {
        let Some(token) = get_token(env) else {
            panic_with_error!(env, Error::NotInitialized);
        };
        token
    }
}
