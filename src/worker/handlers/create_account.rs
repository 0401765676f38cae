use crate::{
    common::{
        error::AppError,
        event::{AccountSummary, Outcome},
        money::Money,
    },
    domain::{account_number::AccountNumberSource, ledger::Ledger},
};

pub fn handle<S: AccountNumberSource>(
    ledger: &mut Ledger<S>,
    holder_name: String,
    initial_balance: Money,
) -> Result<Outcome, AppError> {
    let acc = ledger.create_account(holder_name, initial_balance)?;
    Ok(Outcome::Created(AccountSummary::from(acc)))
}
