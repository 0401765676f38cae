use crate::common::money::Money;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
    #[error("crediting {requested} would overflow balance {balance}")]
    BalanceOverflow { requested: Money, balance: Money },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("every account number is already issued")]
    AccountNumbersExhausted,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
