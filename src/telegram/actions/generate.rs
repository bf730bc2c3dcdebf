use indoc::formatdoc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::markdown;

use crate::bin_lookup::BinInfo;
use crate::cards::generator::{self, GeneratedCard, Vendor};
use crate::cards::request::GenRequest;
use crate::state::AppState;
use crate::telegram::actions::help;
use crate::telegram::handlers::HandleStatus;

pub fn prompt_text() -> String {
    formatdoc!(
        "
            Send me a generation request:
            `/gen BIN|MM|YYYY|CVV QTY`

            Example: `/gen 414720|01|2025|450 10`"
    )
}

#[tracing::instrument(skip_all, fields(chat_id = %m.chat.id))]
pub async fn handle(
    app: &'static AppState,
    m: &Message,
    text: &str,
) -> anyhow::Result<HandleStatus> {
    let request = {
        let mut rng = rand::rng();

        GenRequest::parse(text, &mut rng)
    };

    let Some(request) = request else {
        app.bot()
            .send_message(m.chat.id, help::usage_text())
            .parse_mode(ParseMode::MarkdownV2)
            .await?;

        return Ok(HandleStatus::Handled);
    };

    let info = match app.bin_lookup().lookup(&request.bin).await {
        Ok(info) => info,
        Err(err) => {
            tracing::warn!(err = ?err, bin = %request.bin, "BIN lookup failed, falling back to unknown record");

            BinInfo::unknown()
        },
    };

    let vendor = Vendor::from_name(&info.vendor);

    let cards = {
        let mut rng = rand::rng();

        generator::generate_batch(&request, vendor, &mut rng)
    };

    tracing::info!(
        bin = %request.bin,
        qty = cards.len(),
        vendor = vendor.as_ref(),
        "Generated card batch"
    );

    app.bot()
        .send_message(m.chat.id, render_reply(&request, &info, &cards))
        .parse_mode(ParseMode::MarkdownV2)
        .await?;

    Ok(HandleStatus::Handled)
}

fn render_reply(request: &GenRequest, info: &BinInfo, cards: &[GeneratedCard]) -> String {
    let lines = cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    formatdoc!(
        "
            💳 BIN: {bin}
            🏷 Vendor: {vendor} • {card_type} • {level}
            🏦 Bank: {bank}
            {emoji} Country: {country}

            {cards}",
        bin = markdown::code_inline(&request.bin),
        vendor = markdown::escape(&info.vendor),
        card_type = markdown::escape(&info.card_type),
        level = markdown::escape(&info.level),
        bank = markdown::escape(&info.bank),
        emoji = info.country_emoji,
        country = markdown::escape(&info.country_name),
        cards = markdown::code_block(&lines),
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn reply_renders_every_card_inside_a_code_block() {
        let mut rng = StdRng::seed_from_u64(42);
        let request =
            GenRequest::parse("/gen 414720|01|2025|450 10", &mut rng).expect("Should parse");
        let cards = generator::generate_batch(&request, Vendor::Visa, &mut rng);

        let reply = render_reply(&request, &BinInfo::unknown(), &cards);

        assert!(reply.contains("```"));
        assert!(reply.contains("🌍"));

        for card in &cards {
            assert!(reply.contains(&card.to_string()));
        }
    }
}
