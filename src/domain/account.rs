use log::warn;

use crate::{
    common::{error::AccountError, money::Money},
    domain::account_number::AccountNumber,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: AccountNumber,
    holder_name: String,
    /// Never negative once the account exists.
    balance: Money,
}

impl Account {
    /// `initial_balance` is expected to be validated by the caller.
    pub fn new(
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        Self {
            account_number,
            holder_name: holder_name.into(),
            balance: initial_balance,
        }
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Credits `amount`. Non-positive amounts are ignored without any signal,
    /// as are credits that would overflow the balance.
    pub fn deposit(&mut self, amount: Money) {
        if let Err(AccountError::BalanceOverflow { .. }) = self.try_deposit(amount) {
            warn!(
                "deposit of {} to account {} would overflow, ignored",
                amount, self.account_number
            );
        }
    }

    /// Same rule as [`Account::deposit`], returning the new balance or the
    /// reason nothing was credited.
    pub fn try_deposit(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                requested: amount,
                balance: self.balance,
            })?;
        Ok(self.balance)
    }

    /// Debits `amount` and reports whether it happened. A non-positive amount
    /// and an amount above the balance both return `false`.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    /// Same rule as [`Account::withdraw`], returning the new balance or the
    /// reason the debit was refused.
    pub fn try_withdraw(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }
        let insufficient = AccountError::InsufficientFunds {
            requested: amount,
            available: self.balance,
        };
        if self.balance < amount {
            return Err(insufficient);
        }
        self.balance = self.balance.checked_sub(amount).ok_or(insufficient)?;
        Ok(self.balance)
    }
}
