use std::str::FromStr;

use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_file(false)
        .with_line_number(true)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let level = dotenv::var("LOG_LEVEL").unwrap_or_else(|_| "warn".into());

    subscriber
        .with(
            Targets::new()
                .with_target(
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    tracing::Level::TRACE,
                )
                .with_target("teloxide", tracing::Level::INFO)
                .with_default(tracing::Level::from_str(&level)?),
        )
        .try_init()?;

    Ok(())
}
