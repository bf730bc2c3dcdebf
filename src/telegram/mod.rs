use handlers::HandleStatus;
use teloxide::prelude::*;

pub mod actions;
pub mod commands;
pub mod handlers;
pub mod inline_buttons;

use crate::state::AppState;

macro_rules! return_if_handled {
    ($handle:expr) => {
        if matches!($handle, HandleStatus::Handled) {
            return Ok(HandleStatus::Handled);
        }
    };
}

#[tracing::instrument(skip_all, fields(chat_id = %m.chat.id))]
pub async fn handle_message(app: &'static AppState, m: Message) -> anyhow::Result<HandleStatus> {
    return_if_handled!(handlers::commands::handle(app, &m).await?);
    return_if_handled!(handlers::gen_request::handle(app, &m).await?);

    // Free text outside the awaiting state gets no reply at all
    Ok(HandleStatus::Skipped)
}
