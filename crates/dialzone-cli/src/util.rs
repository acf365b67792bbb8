use anyhow::{Context as _, Result};
use std::io::{self, BufRead};

/// Phone numbers from the command line, or one per stdin line when none given.
pub fn read_phone_numbers(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    let stdin = io::stdin().lock();
    stdin
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| "read phone numbers from stdin")
}
