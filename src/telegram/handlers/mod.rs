pub mod commands;
pub mod gen_request;
pub mod inline_buttons;

pub enum HandleStatus {
    Handled,
    Skipped,
}
