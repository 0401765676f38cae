use crate::{
    common::event::{AccountSummary, Outcome},
    domain::{account_number::AccountNumberSource, ledger::Ledger},
};

pub fn handle<S: AccountNumberSource>(ledger: &Ledger<S>) -> Outcome {
    Outcome::Accounts(
        ledger
            .list_accounts()
            .iter()
            .map(AccountSummary::from)
            .collect(),
    )
}
