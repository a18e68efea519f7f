use anyhow::Result;

use super::{CommandResult, CommandSummary, context::CommandContext};
use crate::{
    cli::args::{FormatCommand, FormatKind},
    format::{format_currency, format_date, format_number, parse_date},
};

pub fn format(cmd: &FormatCommand, ctx: &CommandContext) -> Result<CommandResult> {
    let languages = &ctx.languages;
    let text = match &cmd.kind {
        FormatKind::Number { value, language } => format_number(languages, *value, language),
        FormatKind::Currency { amount, language } => format_currency(languages, *amount, language),
        FormatKind::Date {
            date,
            language,
            style,
        } => {
            let date = parse_date(date)?;
            format_date(languages, &date, language, *style)
        }
    };
    Ok(CommandResult::clean(CommandSummary::Output(text)))
}
