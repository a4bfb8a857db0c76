/// Validation failures raised by the game rules. None of them end a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError
{
    /// Nothing was typed.
    #[display("Guess is empty")]
    EmptyGuess,

    /// More than one character was submitted as a single guess.
    #[display("Guess '{}' must be a single letter", _0)]
    MultipleCharacters(String),

    /// The guess is a single character but not an ASCII letter.
    #[display("'{}' is not a letter", _0)]
    NotALetter(char),

    /// A target word was empty or contained non-letters.
    #[display("'{}' is not a valid word", _0)]
    InvalidWord(String),

    /// There is nothing to pick a word from.
    #[display("Word list is empty")]
    EmptyWordList,
}

impl std::error::Error for GameError {}
