use anyhow::Result;

use super::{CommandResult, CommandSummary, context::CommandContext};
use crate::{cli::args::TranslateCommand, i18n::Interpolations};

/// Resolve one key. Never fails: unresolved keys print the missing sentinel.
pub fn translate(cmd: &TranslateCommand, ctx: &CommandContext) -> Result<CommandResult> {
    let translator = ctx.translator();
    let values: Interpolations = cmd.vars.iter().cloned().collect();
    let interpolations = (!values.is_empty()).then_some(&values);

    let text = translator.t(&cmd.language, &cmd.key, interpolations);
    Ok(CommandResult::clean(CommandSummary::Output(text)))
}
