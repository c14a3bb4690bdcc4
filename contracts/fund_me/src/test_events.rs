extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{Funded, Withdrawn};
use crate::test::{Setup, SEND_VALUE};

#[test]
fn test_funded_event() {
    let s = Setup::new();
    let funder = s.funder(2 * SEND_VALUE);

    s.client.fund(&funder, &SEND_VALUE);
    s.client.fund(&funder, &SEND_VALUE);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), funder)
    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("funded").into_val(&s.env),
        funder.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Funded = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        Funded {
            funder: funder.clone(),
            amount: SEND_VALUE,
            total_funded: 2 * SEND_VALUE,
        }
    );
}

fn assert_withdrawn_event(s: &Setup, amount: i128, funder_count: u32) {
    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("withdrawn").into_val(&s.env),
        s.owner.into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Withdrawn = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        Withdrawn {
            owner: s.owner.clone(),
            amount,
            funder_count,
        }
    );
}

#[test]
fn test_withdrawn_event() {
    let s = Setup::new();
    let a = s.funder(SEND_VALUE);
    let b = s.funder(SEND_VALUE);
    s.client.fund(&a, &SEND_VALUE);
    s.client.fund(&b, &SEND_VALUE);

    s.client.withdraw(&s.owner);

    assert_withdrawn_event(&s, 2 * SEND_VALUE, 2);
}

#[test]
fn test_cheaper_withdrawn_event_matches() {
    let s = Setup::new();
    let a = s.funder(2 * SEND_VALUE);
    s.client.fund(&a, &SEND_VALUE);
    s.client.fund(&a, &SEND_VALUE);

    s.client.cheaper_withdraw(&s.owner);

    assert_withdrawn_event(&s, 2 * SEND_VALUE, 2);
}
