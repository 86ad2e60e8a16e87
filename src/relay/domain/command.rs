//! Chat commands recognised before translation.

/// Fixed reply to the `help` command.
pub const HELP_MESSAGE: &str = concat!(
    "🤖 *WhatsApp Translator Bot*\n\n",
    "Send me any text in Indonesian or English and I'll translate it!\n\n",
    "*Examples:*\n",
    "• \"Hello, how are you?\" → Indonesian\n",
    "• \"Selamat pagi\" → English",
);

/// A command that short-circuits translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Asks for usage instructions.
    Help,
}

impl BotCommand {
    /// Recognises a command from raw message text.
    ///
    /// The whole message must equal the command word once surrounding
    /// whitespace is trimmed; case is ignored. Returns `None` for anything
    /// that should be translated instead.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.to_lowercase() == "help" {
            Some(Self::Help)
        } else {
            None
        }
    }

    /// Returns the fixed reply for the command.
    #[must_use]
    pub const fn reply(self) -> &'static str {
        match self {
            Self::Help => HELP_MESSAGE,
        }
    }
}
