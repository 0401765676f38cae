use std::process;

use bank_ledger::{
    app,
    config::{Args, Config},
};
use clap::Parser;
use log::error;

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = app::run(Config::from(args)) {
        error!("ledger session failed: {err}");
        process::exit(1);
    }
}
