use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::HandleStatus;
use crate::state::AppState;
use crate::telegram::actions;
use crate::telegram::commands::{BOT_NAME, UserCommand};

pub async fn handle(app: &'static AppState, m: &Message) -> anyhow::Result<HandleStatus> {
    let Some(text) = m.text() else {
        return Ok(HandleStatus::Skipped);
    };

    if !text.starts_with('/') {
        return Ok(HandleStatus::Skipped);
    }

    // Anything that is not /start or /help falls through, the `/gen ...`
    // line of an awaiting chat included
    let Ok(command) = UserCommand::parse(text, BOT_NAME) else {
        return Ok(HandleStatus::Skipped);
    };

    match command {
        UserCommand::Start => actions::start::handle(app, m).await,
        UserCommand::Help => actions::help::handle(app, m).await,
    }
}
