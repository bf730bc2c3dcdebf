use teloxide::prelude::*;

use super::HandleStatus;
use crate::state::AppState;
use crate::telegram::actions;

#[tracing::instrument(skip_all, fields(chat_id = %m.chat.id))]
pub async fn handle(app: &'static AppState, m: &Message) -> anyhow::Result<HandleStatus> {
    let Some(text) = m.text() else {
        return Ok(HandleStatus::Skipped);
    };

    // The awaiting mark drops on the first message even when it fails to parse
    if !app.sessions().take(m.chat.id).await {
        return Ok(HandleStatus::Skipped);
    }

    actions::generate::handle(app, m, text).await
}
