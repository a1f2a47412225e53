use std::fmt;

/// Anything wrong with a line typed at the console.
///
/// `Display` is the message shown to the player before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Player-count prompt got something that is not a number.
    InvalidCount,
    PlayerCountOutOfRange { max: u8 },
    /// A turn prompt got something that is not a number.
    NotANumber,
    PlayerOutOfRange,
    UnknownTarget,
    HitsOutOfRange,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCount => write!(f, "Please enter a valid number."),
            Self::PlayerCountOutOfRange { max } => {
                write!(f, "Please enter a number between 1 and {max}.")
            },
            Self::NotANumber => write!(f, "Please enter valid numbers."),
            Self::PlayerOutOfRange => write!(f, "Invalid player number."),
            Self::UnknownTarget => write!(f, "Invalid target number."),
            Self::HitsOutOfRange => write!(f, "Invalid number of hits."),
        }
    }
}

impl std::error::Error for InputError {}
