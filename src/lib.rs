//! Interactive in-memory bank ledger: named accounts with balances, driven
//! from a text menu.

pub mod app;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod worker;
