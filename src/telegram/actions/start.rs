use indoc::formatdoc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::state::AppState;
use crate::telegram::handlers::HandleStatus;
use crate::telegram::inline_buttons::InlineButtons;

pub async fn handle(app: &'static AppState, m: &Message) -> anyhow::Result<HandleStatus> {
    let text = formatdoc!(
        "
            👋 Welcome\\!

            I generate Luhn\\-valid test card numbers from a BIN pattern\\.
            Press the button below, then send me a line like `/gen 414720|01|2025|450 10`\\."
    );

    app.bot()
        .send_message(m.chat.id, text)
        .reply_markup(InlineButtons::markup())
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(HandleStatus::Handled)
}
