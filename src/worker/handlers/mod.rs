pub mod check_balance;
pub mod create_account;
pub mod deposit;
pub mod list_accounts;
pub mod withdraw;
