use cardify::state::AppState;
use cardify::telegram;
use cardify::telegram::commands::UserCommand;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use teloxide::utils::markdown;

async fn run() {
    cardify::logger::init().expect("Logger should be built");

    tracing::info!("Starting Cardify bot...");

    let app = AppState::init().expect("State to be built");

    app.bot()
        .set_my_commands(UserCommand::bot_commands())
        .await
        .expect("update commands should be working");

    tokio::spawn(cardify::utils::listen_for_ctrl_c());

    let handler = dptree::entry()
        .branch(
            Update::filter_message().endpoint(move |m: Message| async move {
                let chat_id = m.chat.id;

                let result = telegram::handle_message(app, m).await;

                if let Err(err) = &result {
                    tracing::error!(err = ?err, "Error on message handling");

                    app.bot()
                        .send_message(chat_id, markdown::escape("Sorry, error has happened :("))
                        .parse_mode(ParseMode::MarkdownV2)
                        .send()
                        .await?;
                }

                result.map(|_| ())
            }),
        )
        .branch(
            Update::filter_callback_query().endpoint(move |q: CallbackQuery| async move {
                telegram::handlers::inline_buttons::handle(app, q).await
            }),
        );

    let mut dispatcher = Dispatcher::builder(app.bot().clone(), handler).build();

    let token = dispatcher.shutdown_token();

    tokio::spawn(async move {
        cardify::utils::ctrl_c().await;

        token.shutdown().expect("To be good").await;
    });

    dispatcher.dispatch().await;
}

#[tokio::main(worker_threads = 4)]
async fn main() {
    run().await;
}
