use crate::{
    common::{
        error::AppError,
        event::{MenuAction, Outcome},
    },
    domain::{account_number::AccountNumberSource, ledger::Ledger},
    worker::handlers::{check_balance, create_account, deposit, list_accounts, withdraw},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process<S: AccountNumberSource>(
        &mut self,
        ledger: &mut Ledger<S>,
        action: MenuAction,
    ) -> Result<Outcome, AppError> {
        let outcome = match action {
            MenuAction::CreateAccount {
                holder_name,
                initial_balance,
            } => create_account::handle(ledger, holder_name, initial_balance)?,
            MenuAction::Deposit {
                account_number,
                amount,
            } => deposit::handle(ledger, account_number, amount),
            MenuAction::Withdraw {
                account_number,
                amount,
            } => withdraw::handle(ledger, account_number, amount),
            MenuAction::CheckBalance { account_number } => {
                check_balance::handle(ledger, account_number)
            }
            MenuAction::ListAccounts => list_accounts::handle(ledger),
            MenuAction::Exit => Outcome::Goodbye,
        };
        Ok(outcome)
    }
}
