use crate::commands::{print_json, Context};
use crate::util::read_phone_numbers;
use anyhow::Result;
use clap::Args;
use dialzone_core::{classify_validity, Dataset};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Phone numbers; read from stdin when omitted
    pub phones: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ValidateDto<'a> {
    valid_count: usize,
    invalid_count: usize,
    numbers: Vec<&'a str>,
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let phones = read_phone_numbers(args.phones)?;
    let dataset = Dataset::from_phone_numbers(phones.into_iter().map(Some));
    let report = classify_validity(&dataset, ctx.table)?;
    let numbers: Vec<&str> = report
        .valid
        .records()
        .iter()
        .filter_map(|record| record.value(0))
        .collect();

    if ctx.json {
        print_json(&ValidateDto {
            valid_count: report.valid_count,
            invalid_count: report.invalid_count,
            numbers,
        })?;
        return Ok(());
    }

    for number in numbers {
        println!("{}", number);
    }
    eprintln!(
        "{} valid, {} invalid",
        report.valid_count, report.invalid_count
    );
    Ok(())
}
