use log::debug;

use crate::{
    common::{event::Outcome, money::Money},
    domain::{account_number::AccountNumberSource, ledger::Ledger},
};

pub fn handle<S: AccountNumberSource>(
    ledger: &mut Ledger<S>,
    account_number: String,
    amount: Money,
) -> Outcome {
    let Some(acc) = ledger.get_account_mut(&account_number) else {
        debug!("withdrawal from unknown account {account_number:?}");
        return Outcome::AccountNotFound;
    };

    // Callers only see one rejection; the cause goes to the log.
    match acc.try_withdraw(amount) {
        Ok(balance) => Outcome::Withdrew {
            account_number,
            amount,
            balance,
        },
        Err(err) => {
            debug!("withdrawal from {account_number} rejected: {err}");
            Outcome::WithdrawRejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account_number::RandomAccountNumbers;

    fn money(v: i64) -> Money {
        Money::from_units(v)
    }

    fn seed_account(ledger: &mut Ledger, balance: Money) -> String {
        ledger
            .create_account("Bob", balance)
            .unwrap()
            .account_number()
            .to_string()
    }

    fn ledger() -> Ledger {
        Ledger::with_source(RandomAccountNumbers::seeded(2))
    }

    #[test]
    fn handle_decreases_balance_when_sufficient_funds() {
        let mut ledger = ledger();
        let number = seed_account(&mut ledger, money(100));

        let outcome = handle(&mut ledger, number.clone(), money(40));

        assert_eq!(
            outcome,
            Outcome::Withdrew {
                account_number: number.clone(),
                amount: money(40),
                balance: money(60),
            }
        );
        assert_eq!(ledger.get_account(&number).unwrap().balance(), money(60));
    }

    #[test]
    fn handle_rejects_insufficient_funds_without_touching_balance() {
        let mut ledger = ledger();
        let number = seed_account(&mut ledger, money(30));

        let outcome = handle(&mut ledger, number.clone(), money(50));

        assert_eq!(outcome, Outcome::WithdrawRejected);
        assert_eq!(
            ledger.get_account(&number).unwrap().balance(),
            money(30),
            "balance must not go negative"
        );
    }

    #[test]
    fn handle_rejects_non_positive_amount_with_same_outcome() {
        let mut ledger = ledger();
        let number = seed_account(&mut ledger, money(30));

        assert_eq!(handle(&mut ledger, number.clone(), money(0)), Outcome::WithdrawRejected);
        assert_eq!(handle(&mut ledger, number.clone(), money(-5)), Outcome::WithdrawRejected);
        assert_eq!(ledger.get_account(&number).unwrap().balance(), money(30));
    }

    #[test]
    fn handle_reports_unknown_account() {
        let mut ledger = ledger();
        seed_account(&mut ledger, money(30));

        assert_eq!(
            handle(&mut ledger, "1234567".into(), money(1)),
            Outcome::AccountNotFound
        );
    }
}
