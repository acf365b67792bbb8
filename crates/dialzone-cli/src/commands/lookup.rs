use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialzone_core::{classify, Classification};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(required = true)]
    pub phones: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LookupDto<'a> {
    input: &'a str,
    valid: bool,
    area_code: Option<String>,
    timezone: Option<String>,
    reason: Option<String>,
}

pub fn lookup(ctx: &Context<'_>, args: LookupArgs) -> Result<()> {
    let items: Vec<LookupDto<'_>> = args
        .phones
        .iter()
        .map(|raw| match classify(Some(raw.as_str()), ctx.table) {
            Classification::Valid {
                area_code,
                timezone,
            } => LookupDto {
                input: raw,
                valid: true,
                area_code: Some(area_code.to_string()),
                timezone: Some(timezone.to_string()),
                reason: None,
            },
            Classification::Invalid(reason) => LookupDto {
                input: raw,
                valid: false,
                area_code: None,
                timezone: None,
                reason: Some(reason.to_string()),
            },
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    for item in items {
        match item.reason {
            None => println!(
                "{}\t{}\t{}",
                item.input,
                item.area_code.unwrap_or_default(),
                item.timezone.unwrap_or_default()
            ),
            Some(reason) => println!("{}\tinvalid: {}", item.input, reason),
        }
    }
    Ok(())
}
