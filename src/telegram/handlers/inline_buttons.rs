use anyhow::Context as _;
use teloxide::dispatching::dialogue::GetChatId as _;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::state::AppState;
use crate::telegram::actions;
use crate::telegram::inline_buttons::InlineButtons;

#[tracing::instrument(skip_all, fields(user_id = %q.from.id))]
pub async fn handle(app: &'static AppState, q: CallbackQuery) -> anyhow::Result<()> {
    let data = q.data.as_deref().context("Callback needs data")?;

    let button = match data.parse::<InlineButtons>() {
        Ok(button) => button,
        Err(err) => {
            app.bot()
                .answer_callback_query(q.id.clone())
                .text("Button is broken. Try another one")
                .await?;

            tracing::error!(err = ?err, data, "Error parsing inline button");

            return Ok(());
        },
    };

    match button {
        InlineButtons::Generate => {
            let chat_id = q.chat_id().context("Callback needs a chat")?;

            // Re-entry keeps the existing mark in place
            if app.sessions().begin(chat_id).await {
                tracing::debug!(%chat_id, "Chat is awaiting a generation request");
            }

            app.bot().answer_callback_query(q.id.clone()).await?;

            app.bot()
                .send_message(chat_id, actions::generate::prompt_text())
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        },
    }

    Ok(())
}
