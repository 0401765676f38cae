use std::{borrow::Borrow, fmt};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Number of distinct account numbers: every 6-digit decimal string.
pub const ACCOUNT_NUMBER_SPACE: u32 = 1_000_000;

/// Six-digit, zero-padded account identifier such as `"004217"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn from_index(index: u32) -> Self {
        Self(format!("{:06}", index % ACCOUNT_NUMBER_SPACE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Supplies raw draws for new account numbers.
pub trait AccountNumberSource {
    /// Returns a value in `[0, ACCOUNT_NUMBER_SPACE)`.
    fn next_number(&mut self) -> u32;
}

/// Uniform random draws, the default for interactive use.
#[derive(Debug, Clone)]
pub struct RandomAccountNumbers {
    rng: StdRng,
}

impl RandomAccountNumbers {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAccountNumbers {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AccountNumberSource for RandomAccountNumbers {
    fn next_number(&mut self) -> u32 {
        self.rng.gen_range(0..ACCOUNT_NUMBER_SPACE)
    }
}
