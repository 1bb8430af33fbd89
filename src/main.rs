//! Deals one round and prints both hand values.

use std::process::ExitCode;

use bjdeal::{Round, RoundOptions};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut round = Round::from_entropy(RoundOptions::default());
    match round.play() {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("deal failed: {err}");
            ExitCode::FAILURE
        }
    }
}
