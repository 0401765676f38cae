pub mod account;
pub mod account_number;
pub mod ledger;
