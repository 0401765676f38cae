use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        account::Account,
        account_number::{
            ACCOUNT_NUMBER_SPACE, AccountNumber, AccountNumberSource, RandomAccountNumbers,
        },
    },
};

/// What `create_account` does when a freshly drawn number is already in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Replace the existing account, keeping its listing position.
    #[default]
    Overwrite,
    /// Draw again until an unused number comes up.
    Retry,
}

/// In-memory registry of every account, listed in creation order.
#[derive(Debug)]
pub struct Ledger<S = RandomAccountNumbers> {
    accounts: Vec<Account>,
    index: HashMap<AccountNumber, usize>,
    numbers: S,
    collision_policy: CollisionPolicy,
}

impl Ledger<RandomAccountNumbers> {
    pub fn new() -> Self {
        Self::with_source(RandomAccountNumbers::from_entropy())
    }
}

impl Default for Ledger<RandomAccountNumbers> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AccountNumberSource> Ledger<S> {
    pub fn with_source(numbers: S) -> Self {
        Self {
            accounts: Vec::new(),
            index: HashMap::new(),
            numbers,
            collision_policy: CollisionPolicy::default(),
        }
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collision_policy
    }

    /// Registers a new account under a freshly drawn number and returns it.
    ///
    /// Only [`CollisionPolicy::Retry`] can fail, once all numbers are taken.
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        initial_balance: Money,
    ) -> Result<&Account, LedgerError> {
        let number = self.draw_number()?;
        let account = Account::new(number.clone(), holder_name, initial_balance);

        let slot = match self.index.get(&number) {
            Some(&slot) => {
                warn!("account number {number} already issued, replacing its account");
                self.accounts[slot] = account;
                slot
            }
            None => {
                self.accounts.push(account);
                let slot = self.accounts.len() - 1;
                self.index.insert(number, slot);
                slot
            }
        };

        let account = &self.accounts[slot];
        debug!(
            "created account {} for {:?} with balance {}",
            account.account_number(),
            account.holder_name(),
            account.balance()
        );
        Ok(account)
    }

    /// Looks an account up by its exact number string.
    pub fn get_account(&self, account_number: &str) -> Option<&Account> {
        self.index
            .get(account_number)
            .map(|&slot| &self.accounts[slot])
    }

    pub fn get_account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        let slot = *self.index.get(account_number)?;
        self.accounts.get_mut(slot)
    }

    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn draw_number(&mut self) -> Result<AccountNumber, LedgerError> {
        match self.collision_policy {
            CollisionPolicy::Overwrite => Ok(AccountNumber::from_index(self.numbers.next_number())),
            CollisionPolicy::Retry => {
                if self.index.len() >= ACCOUNT_NUMBER_SPACE as usize {
                    return Err(LedgerError::AccountNumbersExhausted);
                }
                loop {
                    let number = AccountNumber::from_index(self.numbers.next_number());
                    if !self.index.contains_key(&number) {
                        return Ok(number);
                    }
                    debug!("account number {number} taken, drawing again");
                }
            }
        }
    }
}
