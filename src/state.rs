use std::collections::HashSet;

use anyhow::Context;
use teloxide::Bot;
use teloxide::types::ChatId;
use tokio::sync::RwLock;

use crate::bin_lookup::BinLookup;

pub struct AppState {
    bot: Bot,
    bin_lookup: BinLookup,
    sessions: SessionStore,
}

impl AppState {
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    pub fn bin_lookup(&self) -> &BinLookup {
        &self.bin_lookup
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

impl AppState {
    pub fn init() -> anyhow::Result<&'static Self> {
        tracing::trace!("Init application");

        let bot = Bot::new(dotenv::var("TOKEN").context("Need TOKEN variable")?);

        let bin_lookup = BinLookup::from_env()?;

        // Make state global static variable to prevent hassle with Arc and cloning this mess
        let app = Box::new(Self {
            bot,
            bin_lookup,
            sessions: SessionStore::new(),
        });

        Ok(&*Box::leak(app))
    }
}

/// Chats that pressed the generate button and owe the bot one request line.
/// The entry survives until the next text message, no matter how it parses.
#[derive(Default)]
pub struct SessionStore {
    awaiting: RwLock<HashSet<ChatId>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the chat as awaiting. Returns `false` on re-entry.
    pub async fn begin(&self, chat_id: ChatId) -> bool {
        self.awaiting.write().await.insert(chat_id)
    }

    /// Clears the awaiting mark, reporting whether it was set.
    pub async fn take(&self, chat_id: ChatId) -> bool {
        self.awaiting.write().await.remove(&chat_id)
    }
}
