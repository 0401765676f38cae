use clap::Parser;

use crate::domain::{
    account_number::RandomAccountNumbers,
    ledger::{CollisionPolicy, Ledger},
};

/// Command-line flags. With none given the session behaves like the plain
/// interactive ledger: random account numbers, no uniqueness check.
#[derive(Debug, Parser)]
#[command(name = "bank_ledger", version, about = "Interactive in-memory bank ledger")]
pub struct Args {
    /// Seed account-number generation for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Redraw account numbers that are already in use instead of replacing
    /// the existing account.
    #[arg(long)]
    pub unique_account_numbers: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub collision_policy: CollisionPolicy,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            collision_policy: if args.unique_account_numbers {
                CollisionPolicy::Retry
            } else {
                CollisionPolicy::Overwrite
            },
        }
    }
}

impl Config {
    pub fn build_ledger(&self) -> Ledger {
        let numbers = match self.seed {
            Some(seed) => RandomAccountNumbers::seeded(seed),
            None => RandomAccountNumbers::from_entropy(),
        };
        Ledger::with_source(numbers).with_collision_policy(self.collision_policy)
    }
}
