use std::io::{BufRead, Write, stdin, stdout};

use log::{debug, info};

use crate::{
    common::{
        error::AppError,
        event::{MenuAction, Outcome},
    },
    config::Config,
    domain::{account_number::AccountNumberSource, ledger::Ledger},
    io::{reader::Prompter, writer},
    worker::processor::Processor,
};

/// One interactive run: menu, questions, ledger call, printed result, repeat.
pub struct Session<S, R, W> {
    ledger: Ledger<S>,
    prompter: Prompter<R, W>,
    processor: Processor,
}

impl<S, R, W> Session<S, R, W>
where
    S: AccountNumberSource,
    R: BufRead,
    W: Write,
{
    pub fn new(ledger: Ledger<S>, prompter: Prompter<R, W>) -> Self {
        Self {
            ledger,
            prompter,
            processor: Processor::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    /// Loops until the user picks Exit or the input ends, then says goodbye.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            let action = match self.prompter.read_action()? {
                Some(action) => action,
                None => {
                    debug!("input closed, ending session");
                    MenuAction::Exit
                }
            };

            let outcome = self.processor.process(&mut self.ledger, action)?;
            writer::write_outcome(self.prompter.output_mut(), &outcome)?;

            if outcome == Outcome::Goodbye {
                info!("session ended with {} account(s)", self.ledger.len());
                return Ok(());
            }
        }
    }

    pub fn into_parts(self) -> (Ledger<S>, Prompter<R, W>) {
        (self.ledger, self.prompter)
    }
}

/// Runs a session on the process's stdin and stdout.
pub fn run(config: Config) -> Result<(), AppError> {
    info!(
        "starting ledger session (seeded: {}, collisions: {:?})",
        config.seed.is_some(),
        config.collision_policy
    );

    let stdin = stdin();
    let stdout = stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    Session::new(config.build_ledger(), prompter).run()
}
