use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, LanguagesSummary, context::CommandContext};
use crate::cli::args::LanguagesCommand;

pub fn languages(cmd: &LanguagesCommand, ctx: &CommandContext) -> Result<CommandResult> {
    let config = &ctx.languages;
    let json = if cmd.json {
        Some(
            config
                .to_json_pretty()
                .context("Failed to serialize language config")?,
        )
    } else {
        None
    };

    Ok(CommandResult::clean(CommandSummary::Languages(
        LanguagesSummary {
            languages: config.languages().to_vec(),
            default_language: config.default_language().code.clone(),
            json,
        },
    )))
}
