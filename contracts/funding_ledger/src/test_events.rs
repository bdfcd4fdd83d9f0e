extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{FundWithdrawn, Funded, ProjectCreated, Refunded};
use crate::{FundingLedger, FundingLedgerClient};

const DAY: u64 = 86_400;

fn setup() -> (
    Env,
    FundingLedgerClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(token_admin);
    let token_sac = token::StellarAssetClient::new(&env, &asset.address());

    let contract_id = env.register(FundingLedger, ());
    let client = FundingLedgerClient::new(&env, &contract_id);
    client.init(&asset.address());

    (env, client, token_sac)
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
fn project_created_event() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let goal = 5_000i128;
    let deadline = env.ledger().timestamp() + DAY;

    let id = create_project(&env, &client, &owner, goal);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ProjectCreated struct
    let event_data: ProjectCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectCreated {
            project_id: id,
            owner: owner.clone(),
            goal,
            deadline,
        }
    );
}

#[test]
fn funded_event() {
    let (env, client, token_sac) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let amount = 1_000i128;
    let id = create_project(&env, &client, &owner, 10_000);

    token_sac.mint(&alice, &amount);
    client.fund(&alice, &id, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: Funded struct
    let event_data: Funded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Funded {
            project_id: id,
            contributor: alice.clone(),
            amount,
        }
    );
}

#[test]
fn fund_withdrawn_event() {
    let (env, client, token_sac) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let id = create_project(&env, &client, &owner, 1_000);

    token_sac.mint(&alice, &1_000);
    client.fund(&alice, &id, &1_000);
    client.withdraw(&owner, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("withdrawn"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: FundWithdrawn struct
    let event_data: FundWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundWithdrawn {
            project_id: id,
            amount: 1_000,
        }
    );
}

#[test]
fn refunded_event() {
    let (env, client, token_sac) = setup();
    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let id = create_project(&env, &client, &owner, 1_000);

    token_sac.mint(&alice, &300);
    client.fund(&alice, &id, &300);

    env.ledger().with_mut(|li| li.timestamp += DAY + 1);
    client.refund(&alice, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("refunded"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: Refunded struct
    let event_data: Refunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Refunded {
            project_id: id,
            contributor: alice.clone(),
            amount: 300,
        }
    );
}
