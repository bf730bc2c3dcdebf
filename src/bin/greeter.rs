use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Copy, PartialEq, Eq, Debug)]
#[command(rename_rule = "snake_case")]
enum GreeterCommand {
    #[command(description = "start")]
    Start,
}

async fn run() {
    cardify::logger::init().expect("Logger should be built");

    tracing::info!("Starting greeter bot...");

    let bot = Bot::new(dotenv::var("TOKEN").expect("Need TOKEN variable"));

    tokio::spawn(cardify::utils::listen_for_ctrl_c());

    let handler = Update::filter_message()
        .filter_command::<GreeterCommand>()
        .endpoint(|bot: Bot, m: Message, command: GreeterCommand| async move {
            match command {
                GreeterCommand::Start => {
                    bot.send_message(m.chat.id, "Hello, World!").await?;
                },
            }

            anyhow::Ok(())
        });

    let mut dispatcher = Dispatcher::builder(bot, handler).build();

    let token = dispatcher.shutdown_token();

    tokio::spawn(async move {
        cardify::utils::ctrl_c().await;

        token.shutdown().expect("To be good").await;
    });

    dispatcher.dispatch().await;
}

#[tokio::main]
async fn main() {
    run().await;
}
