//! Transfer-failure and nested-call tests.
//!
//! The ledger zeroes its bookkeeping before invoking the token transfer and
//! treats any transfer failure as reason to abort the whole call. These tests
//! drive that path with a stub token whose `transfer` can be told to reject
//! outright or to attempt a nested call back into the ledger mid-transfer.

extern crate std;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short,
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{Error, FundingLedger, FundingLedgerClient};

const DAY: u64 = 86_400;

/// What the stub token does when its `transfer` is invoked.
#[contracttype]
#[derive(Clone)]
pub enum TransferBehavior {
    /// Accept silently.
    Pass,
    /// Reject the transfer.
    Fail,
    /// Attempt a nested `withdraw(caller, project_id)` on the ledger.
    ReenterWithdraw(Address, Address, u64),
    /// Attempt a nested `refund(contributor, project_id)` on the ledger.
    ReenterRefund(Address, Address, u64),
}

/// Minimal token contract exposing only the `transfer` entry point the
/// ledger uses. It keeps no balances; the behavior knob is all there is.
#[contract]
pub struct StubToken;

#[contractimpl]
impl StubToken {
    pub fn set_behavior(env: Env, behavior: TransferBehavior) {
        env.storage()
            .instance()
            .set(&symbol_short!("behavior"), &behavior);
    }

    pub fn transfer(env: Env, _from: Address, _to: Address, _amount: i128) {
        let behavior: TransferBehavior = env
            .storage()
            .instance()
            .get(&symbol_short!("behavior"))
            .unwrap_or(TransferBehavior::Pass);

        match behavior {
            TransferBehavior::Pass => {}
            TransferBehavior::Fail => panic!("transfer rejected"),
            TransferBehavior::ReenterWithdraw(ledger, caller, project_id) => {
                // Host rejects the re-entrant frame; the transfer fails with it.
                FundingLedgerClient::new(&env, &ledger).withdraw(&caller, &project_id);
            }
            TransferBehavior::ReenterRefund(ledger, contributor, project_id) => {
                FundingLedgerClient::new(&env, &ledger).refund(&contributor, &project_id);
            }
        }
    }
}

fn setup() -> (
    Env,
    FundingLedgerClient<'static>,
    StubTokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register(StubToken, ());
    let stub = StubTokenClient::new(&env, &token_id);

    let contract_id = env.register(FundingLedger, ());
    let client = FundingLedgerClient::new(&env, &contract_id);
    client.init(&token_id);

    (env, client, stub)
}

fn create_project(env: &Env, client: &FundingLedgerClient, owner: &Address, goal: i128) -> u64 {
    client.create_project(
        owner,
        &String::from_str(env, "Solar Farm"),
        &String::from_str(env, "Community-owned solar panels"),
        &goal,
        &1,
    )
}

#[test]
fn withdraw_rolls_back_when_transfer_fails() {
    let (env, client, stub) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let id = create_project(&env, &client, &owner, 1_000);
    client.fund(&alice, &id, &1_000);

    stub.set_behavior(&TransferBehavior::Fail);
    let result = client.try_withdraw(&owner, &id);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));

    // The zeroing of amount_raised was undone with the rest of the call.
    let project = client.get_project(&id);
    assert_eq!(project.amount_raised, 1_000);
    assert!(project.is_funded);

    stub.set_behavior(&TransferBehavior::Pass);
    client.withdraw(&owner, &id);
    assert_eq!(client.get_project(&id).amount_raised, 0);
}

#[test]
fn withdraw_rejects_nested_call() {
    let (env, client, stub) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let id = create_project(&env, &client, &owner, 1_000);
    client.fund(&alice, &id, &1_000);

    stub.set_behavior(&TransferBehavior::ReenterWithdraw(
        client.address.clone(),
        owner.clone(),
        id,
    ));
    let result = client.try_withdraw(&owner, &id);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));

    let project = client.get_project(&id);
    assert_eq!(project.amount_raised, 1_000);

    // With a well-behaved token the withdrawal applies exactly once.
    stub.set_behavior(&TransferBehavior::Pass);
    client.withdraw(&owner, &id);
    let result = client.try_withdraw(&owner, &id);
    assert_eq!(result, Err(Ok(Error::NothingToWithdraw)));
}

#[test]
fn refund_rolls_back_when_transfer_fails() {
    let (env, client, stub) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let id = create_project(&env, &client, &owner, 1_000);
    client.fund(&alice, &id, &300);

    env.ledger().with_mut(|li| li.timestamp += DAY + 1);

    stub.set_behavior(&TransferBehavior::Fail);
    let result = client.try_refund(&alice, &id);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));

    // The contribution balance was restored with the rollback.
    assert_eq!(client.get_contribution(&id, &alice), 300);

    stub.set_behavior(&TransferBehavior::Pass);
    client.refund(&alice, &id);
    assert_eq!(client.get_contribution(&id, &alice), 0);
}

#[test]
fn refund_rejects_nested_call() {
    let (env, client, stub) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let id = create_project(&env, &client, &owner, 1_000);
    client.fund(&alice, &id, &300);

    env.ledger().with_mut(|li| li.timestamp += DAY + 1);

    stub.set_behavior(&TransferBehavior::ReenterRefund(
        client.address.clone(),
        alice.clone(),
        id,
    ));
    let result = client.try_refund(&alice, &id);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));
    assert_eq!(client.get_contribution(&id, &alice), 300);

    // With a well-behaved token the refund applies exactly once.
    stub.set_behavior(&TransferBehavior::Pass);
    client.refund(&alice, &id);
    let result = client.try_refund(&alice, &id);
    assert_eq!(result, Err(Ok(Error::NoContribution)));
}
