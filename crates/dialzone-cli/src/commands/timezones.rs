use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct TimezonesArgs {}

#[derive(Debug, Args)]
pub struct AreaCodesArgs {
    pub timezone: String,
}

#[derive(Debug, Serialize)]
struct TimezoneDto {
    timezone: String,
    area_codes: usize,
}

pub fn list_timezones(ctx: &Context<'_>, _args: TimezonesArgs) -> Result<()> {
    let items: Vec<TimezoneDto> = ctx
        .table
        .timezones()
        .map(|timezone| TimezoneDto {
            timezone: timezone.to_string(),
            area_codes: ctx.table.area_codes(timezone).map_or(0, |codes| codes.len()),
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    for item in items {
        println!("{} ({})", item.timezone, item.area_codes);
    }
    Ok(())
}

pub fn list_area_codes(ctx: &Context<'_>, args: AreaCodesArgs) -> Result<()> {
    let (_, codes) = ctx.table.resolve_zone(&args.timezone)?;

    if ctx.json {
        print_json(&codes)?;
        return Ok(());
    }

    for code in codes {
        println!("{}", code);
    }
    Ok(())
}
