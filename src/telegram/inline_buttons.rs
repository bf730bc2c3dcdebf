use strum_macros::{AsRefStr, EnumString};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
pub enum InlineButtons {
    #[strum(serialize = "gen")]
    Generate,
}

impl InlineButtons {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InlineButtons::Generate => "💳 Generate cards",
        }
    }

    #[must_use]
    pub fn into_inline_keyboard_button(self) -> InlineKeyboardButton {
        InlineKeyboardButton::new(
            self.label(),
            InlineKeyboardButtonKind::CallbackData(self.as_ref().to_owned()),
        )
    }

    #[must_use]
    pub fn markup() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![vec![
            Self::Generate.into_inline_keyboard_button(),
        ]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_data_roundtrips() {
        assert_eq!(InlineButtons::Generate.as_ref(), "gen");
        assert_eq!(
            "gen".parse::<InlineButtons>().expect("Should parse"),
            InlineButtons::Generate
        );
    }

    #[test]
    fn unknown_callback_data_is_rejected() {
        assert!("nope".parse::<InlineButtons>().is_err());
    }
}
