use crate::{
    common::event::Outcome,
    domain::{account_number::AccountNumberSource, ledger::Ledger},
};

pub fn handle<S: AccountNumberSource>(ledger: &Ledger<S>, account_number: String) -> Outcome {
    match ledger.get_account(&account_number) {
        Some(acc) => Outcome::Balance {
            balance: acc.balance(),
            account_number,
        },
        None => Outcome::AccountNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::money::Money, domain::account_number::RandomAccountNumbers};

    #[test]
    fn reports_balance_of_known_account() {
        let mut ledger = Ledger::with_source(RandomAccountNumbers::seeded(5));
        let number = ledger
            .create_account("Carol", Money::from_units(12))
            .unwrap()
            .account_number()
            .to_string();

        assert_eq!(
            handle(&ledger, number.clone()),
            Outcome::Balance {
                account_number: number,
                balance: Money::from_units(12),
            }
        );
    }

    #[test]
    fn unknown_account_is_not_found() {
        let ledger = Ledger::with_source(RandomAccountNumbers::seeded(5));
        assert_eq!(handle(&ledger, "000000".into()), Outcome::AccountNotFound);
    }
}
