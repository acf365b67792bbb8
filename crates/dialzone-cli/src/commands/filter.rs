use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::read_phone_numbers;
use anyhow::Result;
use clap::Args;
use dialzone_core::{filter_by_timezone, Dataset};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Timezone code (PST, EST, CST, MST, AKST, HST)
    #[arg(long, short)]
    pub timezone: Option<String>,
    /// Phone numbers; read from stdin when omitted
    pub phones: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FilterDto<'a> {
    timezone: String,
    total: usize,
    kept: usize,
    numbers: Vec<&'a str>,
}

pub fn filter(ctx: &Context<'_>, args: FilterArgs) -> Result<()> {
    let timezone = match (args.timezone, ctx.config.default_timezone) {
        (Some(raw), _) => raw,
        (None, Some(default)) => default.to_string(),
        (None, None) => {
            return Err(invalid_input(
                "timezone is required (provide --timezone or default_timezone in config)",
            ))
        }
    };

    let phones = read_phone_numbers(args.phones)?;
    let dataset = Dataset::from_phone_numbers(phones.into_iter().map(Some));
    let filtered = filter_by_timezone(&dataset, &timezone, ctx.table)?;
    let numbers: Vec<&str> = filtered
        .records()
        .iter()
        .filter_map(|record| record.value(0))
        .collect();

    if ctx.json {
        print_json(&FilterDto {
            timezone: timezone.trim().to_ascii_uppercase(),
            total: dataset.len(),
            kept: numbers.len(),
            numbers,
        })?;
        return Ok(());
    }

    for number in numbers {
        println!("{}", number);
    }
    Ok(())
}
