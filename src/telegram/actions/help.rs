use indoc::formatdoc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::state::AppState;
use crate::telegram::handlers::HandleStatus;

/// Shared by /help and every reply to a line that fails to parse.
pub fn usage_text() -> String {
    formatdoc!(
        "
            💳 *Card generator*

            Send a line in this format:
            `/gen BIN|MM|YYYY|CVV QTY`

            *BIN*: 6 to 8 digits
            *MM*, *YYYY*, *CVV*: a literal value, or `skip`/`random` to draw a fresh one per card
            *QTY*: card count or a `low-high` range, kept between 10 and 100

            Example: `/gen 414720|01|2025|450 10`"
    )
}

pub async fn handle(app: &'static AppState, m: &Message) -> anyhow::Result<HandleStatus> {
    app.bot()
        .send_message(m.chat.id, usage_text())
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(HandleStatus::Handled)
}
