use std::io::{self, Write};

use crate::common::event::{AccountSummary, Outcome};

/// Writes the human-readable lines for one outcome.
///
/// Amounts use the short [`Money`](crate::common::money::Money) display, so a
/// balance of 75 prints as `75` and 12.5 as `12.5`.
///
/// # Examples
///
/// ```
/// use bank_ledger::common::event::Outcome;
/// use bank_ledger::io::writer::write_outcome;
///
/// let mut out = Vec::new();
/// write_outcome(&mut out, &Outcome::Accounts(Vec::new())).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "No accounts found.\n");
/// ```
pub fn write_outcome<W: Write>(mut writer: W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Created(summary) => writeln!(
            writer,
            "Account created: Number: {}, Holder: {}, Balance: {}",
            summary.account_number, summary.holder_name, summary.balance
        )?,
        Outcome::Deposited {
            account_number,
            amount,
            balance,
        } => writeln!(
            writer,
            "Deposited {amount} to account {account_number}. New balance: {balance}"
        )?,
        Outcome::DepositRejected => {
            writeln!(writer, "Deposit rejected: balance limit exceeded.")?
        }
        Outcome::Withdrew {
            account_number,
            amount,
            balance,
        } => writeln!(
            writer,
            "Withdrew {amount} from account {account_number}. New balance: {balance}"
        )?,
        Outcome::WithdrawRejected => writeln!(writer, "Insufficient funds or invalid amount.")?,
        Outcome::Balance {
            account_number,
            balance,
        } => writeln!(writer, "Account {account_number} balance: {balance}")?,
        Outcome::Accounts(summaries) if summaries.is_empty() => {
            writeln!(writer, "No accounts found.")?
        }
        Outcome::Accounts(summaries) => {
            for summary in summaries {
                write_summary(&mut writer, summary)?;
            }
        }
        Outcome::AccountNotFound => writeln!(writer, "Account not found.")?,
        Outcome::Goodbye => writeln!(writer, "Goodbye!")?,
    }
    writer.flush()
}

fn write_summary<W: Write>(writer: &mut W, summary: &AccountSummary) -> io::Result<()> {
    writeln!(
        writer,
        "Number: {}, Holder: {}, Balance: {}",
        summary.account_number, summary.holder_name, summary.balance
    )
}
