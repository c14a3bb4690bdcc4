// Property tests over funding sequences.
//
// Every case builds its own Env, so case counts are kept small.

extern crate std;

use proptest::prelude::*;
use soroban_sdk::Address;
use std::vec::Vec;

use crate::test::{Setup, MIN_FUNDABLE, SEND_VALUE};
use crate::Error;

const MAX_FUNDERS: usize = 4;

/// Run `(funder index, amount)` contributions against a fresh setup.
/// Returns the setup and the funder addresses, indexed as in `plan`.
fn run_plan(plan: &[(usize, i128)]) -> (Setup, Vec<Address>) {
    let s = Setup::new();
    let funders: Vec<Address> = (0..MAX_FUNDERS)
        .map(|_| s.funder(100 * SEND_VALUE))
        .collect();
    for (index, amount) in plan {
        s.client.fund(&funders[*index], amount);
    }
    (s, funders)
}

fn contribution() -> impl Strategy<Value = (usize, i128)> {
    (0..MAX_FUNDERS, MIN_FUNDABLE..=SEND_VALUE)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn below_threshold_is_rejected_and_changes_nothing(amount in -SEND_VALUE..MIN_FUNDABLE) {
        let s = Setup::new();
        let funder = s.funder(SEND_VALUE);

        prop_assert_eq!(
            s.client.try_fund(&funder, &amount),
            Err(Ok(Error::InsufficientAmount))
        );
        prop_assert_eq!(s.client.get_address_to_amount_funded(&funder), 0);
        prop_assert_eq!(s.client.get_funder_count(), 0);
        prop_assert_eq!(s.token.balance(&funder), SEND_VALUE);
    }

    #[test]
    fn amount_funded_is_sum_of_accepted(plan in prop::collection::vec(contribution(), 1..8)) {
        let (s, funders) = run_plan(&plan);

        for (index, funder) in funders.iter().enumerate() {
            let expected: i128 = plan
                .iter()
                .filter(|(i, _)| *i == index)
                .map(|(_, amount)| amount)
                .sum();
            prop_assert_eq!(s.client.get_address_to_amount_funded(funder), expected);
        }
        prop_assert_eq!(s.client.get_funder_count(), plan.len() as u32);

        let total: i128 = plan.iter().map(|(_, amount)| amount).sum();
        prop_assert_eq!(s.contract_balance(), total);
    }

    #[test]
    fn withdraw_variants_are_equivalent(plan in prop::collection::vec(contribution(), 0..8)) {
        let (a, funders_a) = run_plan(&plan);
        let (b, funders_b) = run_plan(&plan);

        a.client.withdraw(&a.owner);
        b.client.cheaper_withdraw(&b.owner);

        let total: i128 = plan.iter().map(|(_, amount)| amount).sum();
        prop_assert_eq!(a.token.balance(&a.owner), total);
        prop_assert_eq!(b.token.balance(&b.owner), total);
        prop_assert_eq!(a.contract_balance(), 0);
        prop_assert_eq!(b.contract_balance(), 0);

        for (fa, fb) in funders_a.iter().zip(funders_b.iter()) {
            prop_assert_eq!(a.client.get_address_to_amount_funded(fa), 0);
            prop_assert_eq!(b.client.get_address_to_amount_funded(fb), 0);
            prop_assert_eq!(a.token.balance(fa), b.token.balance(fb));
        }

        prop_assert_eq!(a.client.get_funder_count(), 0);
        prop_assert_eq!(b.client.get_funder_count(), 0);
        prop_assert_eq!(a.client.try_get_funder(&0), Err(Ok(Error::IndexOutOfRange)));
        prop_assert_eq!(b.client.try_get_funder(&0), Err(Ok(Error::IndexOutOfRange)));
    }

    #[test]
    fn non_owner_cannot_withdraw(plan in prop::collection::vec(contribution(), 1..6), caller in 0..MAX_FUNDERS) {
        let (s, funders) = run_plan(&plan);
        let before: Vec<i128> = funders
            .iter()
            .map(|f| s.client.get_address_to_amount_funded(f))
            .collect();
        let balance = s.contract_balance();

        prop_assert_eq!(
            s.client.try_withdraw(&funders[caller]),
            Err(Ok(Error::NotOwner))
        );
        prop_assert_eq!(
            s.client.try_cheaper_withdraw(&funders[caller]),
            Err(Ok(Error::NotOwner))
        );

        let after: Vec<i128> = funders
            .iter()
            .map(|f| s.client.get_address_to_amount_funded(f))
            .collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(s.contract_balance(), balance);
        prop_assert_eq!(s.client.get_funder_count(), plan.len() as u32);
    }
}
