use std::io::{self, BufRead, Write};

use crate::common::{
    event::{MenuAction, MenuChoice},
    money::Money,
};

pub const INVALID_AMOUNT: &str = "Please enter a valid amount.";
pub const INVALID_CHOICE: &str = "Please select a valid option.";

/// Which amounts an amount prompt lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRule {
    /// Zero or more, for opening balances.
    NonNegative,
    /// Strictly above zero, for deposits and withdrawals.
    Positive,
}

impl AmountRule {
    fn accepts(self, amount: Money) -> bool {
        match self {
            AmountRule::NonNegative => !amount.is_negative(),
            AmountRule::Positive => amount.is_positive(),
        }
    }
}

/// Line-oriented prompts over any buffered input and writable output.
///
/// Every read returns `Ok(None)` once the input is exhausted, so a closed
/// stdin ends the session instead of spinning on empty reads.
///
/// # Examples
///
/// ```
/// use bank_ledger::common::event::MenuAction;
/// use bank_ledger::io::reader::Prompter;
///
/// let input = "3\n000042\nlots\n12.5\n";
/// let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
///
/// let action = prompter.read_action().unwrap();
/// assert!(matches!(
///     action,
///     Some(MenuAction::Withdraw { ref account_number, .. }) if account_number == "000042"
/// ));
/// ```
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line without its terminator.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        // Bytes, not `String`: invalid UTF-8 must not end the session.
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        let line = String::from_utf8_lossy(&raw).into_owned();
        Ok(Some(line))
    }

    /// Shows the main menu until a valid entry is picked.
    pub fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            writeln!(self.output, "What would you like to do?")?;
            for (position, choice) in MenuChoice::ALL.iter().enumerate() {
                writeln!(self.output, "  {}) {}", position + 1, choice.label())?;
            }
            let Some(line) = self.read_line(">")? else {
                return Ok(None);
            };
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "{INVALID_CHOICE}")?,
            }
        }
    }

    /// Re-prompts until the answer parses as an amount allowed by `rule`.
    pub fn read_amount(&mut self, prompt: &str, rule: AmountRule) -> io::Result<Option<Money>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<Money>() {
                Ok(amount) if rule.accepts(amount) => return Ok(Some(amount)),
                _ => writeln!(self.output, "{INVALID_AMOUNT}")?,
            }
        }
    }

    /// Runs the menu and the follow-up questions for the picked entry.
    pub fn read_action(&mut self) -> io::Result<Option<MenuAction>> {
        let Some(choice) = self.read_choice()? else {
            return Ok(None);
        };

        let action = match choice {
            MenuChoice::CreateAccount => {
                let Some(holder_name) = self.read_line("Enter account holder name:")? else {
                    return Ok(None);
                };
                let Some(initial_balance) =
                    self.read_amount("Enter initial balance:", AmountRule::NonNegative)?
                else {
                    return Ok(None);
                };
                MenuAction::CreateAccount {
                    holder_name,
                    initial_balance,
                }
            }
            MenuChoice::Deposit => {
                let Some((account_number, amount)) =
                    self.read_transfer("Enter amount to deposit:")?
                else {
                    return Ok(None);
                };
                MenuAction::Deposit {
                    account_number,
                    amount,
                }
            }
            MenuChoice::Withdraw => {
                let Some((account_number, amount)) =
                    self.read_transfer("Enter amount to withdraw:")?
                else {
                    return Ok(None);
                };
                MenuAction::Withdraw {
                    account_number,
                    amount,
                }
            }
            MenuChoice::CheckBalance => {
                let Some(account_number) = self.read_line("Enter account number:")? else {
                    return Ok(None);
                };
                MenuAction::CheckBalance { account_number }
            }
            MenuChoice::ListAccounts => MenuAction::ListAccounts,
            MenuChoice::Exit => MenuAction::Exit,
        };
        Ok(Some(action))
    }

    fn read_transfer(&mut self, amount_prompt: &str) -> io::Result<Option<(String, Money)>> {
        let Some(account_number) = self.read_line("Enter account number:")? else {
            return Ok(None);
        };
        let Some(amount) = self.read_amount(amount_prompt, AmountRule::Positive)? else {
            return Ok(None);
        };
        Ok(Some((account_number, amount)))
    }
}
