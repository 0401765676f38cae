use log::debug;

use crate::{
    common::{error::AccountError, event::Outcome, money::Money},
    domain::{account_number::AccountNumberSource, ledger::Ledger},
};

pub fn handle<S: AccountNumberSource>(
    ledger: &mut Ledger<S>,
    account_number: String,
    amount: Money,
) -> Outcome {
    let Some(acc) = ledger.get_account_mut(&account_number) else {
        debug!("deposit to unknown account {account_number:?}");
        return Outcome::AccountNotFound;
    };

    match acc.try_deposit(amount) {
        // Non-positive amounts are a silent no-op, not a failure.
        Ok(_) | Err(AccountError::InvalidAmount(_)) => Outcome::Deposited {
            balance: acc.balance(),
            account_number,
            amount,
        },
        Err(err) => {
            debug!("deposit to {account_number} rejected: {err}");
            Outcome::DepositRejected
        }
    }
}
