use anyhow::Result;
use dialzone_config::AppConfig;
use dialzone_core::AreaCodeTable;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod filter;
pub mod lookup;
pub mod timezones;
pub mod validate;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub table: &'a AreaCodeTable,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
