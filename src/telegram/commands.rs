use teloxide::utils::command::BotCommands;

pub const BOT_NAME: &str = "CardifyBot";

#[derive(BotCommands, PartialEq, Eq, Debug)]
#[command(rename_rule = "snake_case", parse_with = "split")]
pub enum UserCommand {
    #[command(description = "show usage")]
    Help,

    #[command(description = "start")]
    Start,
}
