use crate::{
    common::money::Money,
    domain::{account::Account, account_number::AccountNumber},
};

/// One entry of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ListAccounts,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::ListAccounts,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::ListAccounts => "List Accounts",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Accepts the 1-based menu position or the label, ignoring case.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let input = input.trim();
        if let Ok(position) = input.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL
            .into_iter()
            .find(|choice| choice.label().eq_ignore_ascii_case(input))
    }
}

/// A fully collected user request, handed from the prompts to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    CreateAccount {
        holder_name: String,
        initial_balance: Money,
    },
    Deposit {
        account_number: String,
        amount: Money,
    },
    Withdraw {
        account_number: String,
        amount: Money,
    },
    CheckBalance {
        account_number: String,
    },
    ListAccounts,
    Exit,
}

/// Snapshot of an account for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub account_number: AccountNumber,
    pub holder_name: String,
    pub balance: Money,
}

impl From<&Account> for AccountSummary {
    fn from(acc: &Account) -> Self {
        Self {
            account_number: acc.account_number().clone(),
            holder_name: acc.holder_name().to_owned(),
            balance: acc.balance(),
        }
    }
}

/// What happened as a result of one [`MenuAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(AccountSummary),
    Deposited {
        account_number: String,
        amount: Money,
        balance: Money,
    },
    DepositRejected,
    Withdrew {
        account_number: String,
        amount: Money,
        balance: Money,
    },
    WithdrawRejected,
    Balance {
        account_number: String,
        balance: Money,
    },
    Accounts(Vec<AccountSummary>),
    AccountNotFound,
    Goodbye,
}
