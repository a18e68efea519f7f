use anyhow::Result;

use super::{CommandResult, CommandSummary, context::CommandContext};
use crate::{
    cli::args::{UrlAction, UrlCommand},
    i18n::{alternate_url, current_language, localize_url},
};

pub fn url(cmd: &UrlCommand, ctx: &CommandContext) -> Result<CommandResult> {
    let languages = &ctx.languages;
    let text = match &cmd.action {
        UrlAction::Localize { url, language } => localize_url(languages, url, language),
        UrlAction::Alternate { url, target } => alternate_url(languages, url, target),
        UrlAction::Detect { url } => current_language(languages, url).to_string(),
    };
    Ok(CommandResult::clean(CommandSummary::Output(text)))
}
