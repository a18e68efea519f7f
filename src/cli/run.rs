//! Command dispatch.
//!
//! Every command except `init` needs the project context (config file,
//! language config); `init` must work before either exists.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, context::CommandContext, format::format, init::init,
        languages::languages, translate::translate, url::url,
    },
};

pub fn run(Arguments { common, command }: Arguments) -> Result<CommandResult> {
    let Some(command) = command else {
        anyhow::bail!("No command provided. Use --help to see available commands.")
    };

    if matches!(command, Command::Init) {
        return init();
    }

    let ctx = CommandContext::new(&common)?;
    match command {
        Command::T(cmd) => translate(&cmd, &ctx),
        Command::Format(cmd) => format(&cmd, &ctx),
        Command::Languages(cmd) => languages(&cmd, &ctx),
        Command::Url(cmd) => url(&cmd, &ctx),
        Command::Check(cmd) => check(&cmd, &ctx),
        Command::Init => init(),
    }
}
