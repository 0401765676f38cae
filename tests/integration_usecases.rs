use bank_ledger::{
    app::Session,
    common::money::Money,
    domain::{
        account_number::{AccountNumberSource, RandomAccountNumbers},
        ledger::{CollisionPolicy, Ledger},
    },
    io::reader::Prompter,
};

// Issues the given draws in order.
struct Draws(std::vec::IntoIter<u32>);

impl AccountNumberSource for Draws {
    fn next_number(&mut self) -> u32 {
        self.0.next().expect("test ran out of account numbers")
    }
}

fn run_session<S: AccountNumberSource>(ledger: Ledger<S>, input: &str) -> (Ledger<S>, String) {
    run_session_bytes(ledger, input.as_bytes())
}

fn run_session_bytes<S: AccountNumberSource>(
    ledger: Ledger<S>,
    input: &[u8],
) -> (Ledger<S>, String) {
    let prompter = Prompter::new(input, Vec::new());
    let mut session = Session::new(ledger, prompter);
    session.run().expect("session failed");

    let (ledger, prompter) = session.into_parts();
    let out = String::from_utf8(prompter.into_output()).expect("output was not valid UTF-8");
    (ledger, out)
}

// Keeps only the result lines, dropping menu and prompt text.
fn result_lines(out: &str) -> Vec<&str> {
    out.lines()
        .map(strip_prompts)
        .filter(|l| !l.is_empty())
        .filter(|l| !l.starts_with("What would you like to do?") && !l.starts_with("  "))
        .collect()
}

// Prompts share a line with whatever is printed next; cut everything up to
// the last prompt on the line.
fn strip_prompts(line: &str) -> &str {
    const PROMPTS: [&str; 6] = [
        "> ",
        "Enter account holder name: ",
        "Enter initial balance: ",
        "Enter account number: ",
        "Enter amount to deposit: ",
        "Enter amount to withdraw: ",
    ];
    let mut rest = line;
    while let Some(p) = PROMPTS.iter().find(|p| rest.starts_with(**p)) {
        rest = &rest[p.len()..];
    }
    rest
}

#[test]
fn case1_create_deposit_withdraw_scenario() {
    let ledger = Ledger::with_source(Draws(vec![42].into_iter()));
    let input = "\
1\nAlice\n50\n\
2\n000042\n25\n\
3\n000042\n100\n\
3\n000042\n75\n\
4\n000042\n\
6\n";

    let (ledger, out) = run_session(ledger, input);

    assert_eq!(
        result_lines(&out),
        [
            "Account created: Number: 000042, Holder: Alice, Balance: 50",
            "Deposited 25 to account 000042. New balance: 75",
            "Insufficient funds or invalid amount.",
            "Withdrew 75 from account 000042. New balance: 0",
            "Account 000042 balance: 0",
            "Goodbye!",
        ]
    );
    assert_eq!(ledger.get_account("000042").unwrap().balance(), Money::zero());
}

#[test]
fn case2_listing_follows_creation_order() {
    let ledger = Ledger::with_source(Draws(vec![300, 5, 120000].into_iter()));
    let input = "5\n1\nA\n1\n1\nB\n2.5\n1\nC\n0\n5\n6\n";

    let (_, out) = run_session(ledger, input);
    let lines = result_lines(&out);

    assert_eq!(lines[0], "No accounts found.");
    assert_eq!(
        &lines[4..7],
        [
            "Number: 000300, Holder: A, Balance: 1",
            "Number: 000005, Holder: B, Balance: 2.5",
            "Number: 120000, Holder: C, Balance: 0",
        ]
    );
}

#[test]
fn case3_unknown_accounts_and_invalid_input() {
    let ledger = Ledger::with_source(Draws(vec![1].into_iter()));
    let input = "\
seven\n\
1\nBob\n-3\nten\n10\n\
2\n1\n5\n\
3\n000001\n0\n4\n\
4\n999999\n\
Exit\n";

    let (ledger, out) = run_session(ledger, input);

    assert_eq!(out.matches("Please select a valid option.").count(), 1);
    assert_eq!(out.matches("Please enter a valid amount.").count(), 3);
    assert_eq!(out.matches("Account not found.").count(), 2);
    assert!(out.contains("Withdrew 4 from account 000001. New balance: 6"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn case4_closed_input_ends_session_politely() {
    let ledger = Ledger::with_source(RandomAccountNumbers::seeded(11));
    let (ledger, out) = run_session(ledger, "1\nHalf way\n");

    assert!(ledger.is_empty());
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn case5_retry_policy_never_replaces_accounts() {
    let ledger = Ledger::with_source(Draws(vec![8, 8, 9].into_iter()))
        .with_collision_policy(CollisionPolicy::Retry);
    let input = "1\nA\n1\n1\nB\n2\n5\n6\n";

    let (ledger, out) = run_session(ledger, input);

    assert_eq!(ledger.len(), 2);
    assert!(out.contains("Number: 000008, Holder: A, Balance: 1"));
    assert!(out.contains("Number: 000009, Holder: B, Balance: 2"));
}

#[test]
fn case6_invalid_utf8_name_does_not_end_session() {
    let ledger = Ledger::with_source(Draws(vec![77].into_iter()));
    let (ledger, out) = run_session_bytes(ledger, b"1\nJ\xFFo\n10\n5\n6\n");

    assert_eq!(ledger.get_account("000077").unwrap().holder_name(), "J\u{FFFD}o");
    assert!(out.contains("Number: 000077, Holder: J\u{FFFD}o, Balance: 10"));
    assert!(out.ends_with("Goodbye!\n"));
}
