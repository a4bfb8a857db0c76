use crate::game::session::Session;
use crate::languages::{self, LANGUAGES, Language};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile
{
    Hidden,
    Guessed(char),
    /// Shown only after a loss, for letters the player never found.
    Missed(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState
{
    Unused,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key
{
    pub letter: char,
    pub state: KeyState,
    pub disabled: bool,
}

pub struct Chip
{
    pub language: &'static Language,
    pub lost: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner
{
    None,
    Farewell(String),
    Won,
    Lost,
}

impl Banner
{
    pub fn lines(&self) -> Vec<String>
    {
        match self {
            Banner::None => Vec::new(),
            Banner::Farewell(message) => vec![message.clone()],
            Banner::Won => vec!["You win!".to_string(), "Well done!".to_string()],
            Banner::Lost => vec![
                "Game over!".to_string(),
                "You lose! Better start learning Assembly".to_string(),
            ],
        }
    }
}

pub fn tiles(session: &Session) -> Vec<Tile>
{
    let reveal = session.status().is_game_lost;
    session
        .word()
        .chars()
        .map(|ch| {
            if session.has_guessed(ch) {
                Tile::Guessed(ch)
            } else if reveal {
                Tile::Missed(ch)
            } else {
                Tile::Hidden
            }
        })
        .collect()
}

pub fn keyboard(session: &Session) -> Vec<Key>
{
    let disabled = session.status().is_game_over;
    ('a'..='z')
        .map(|letter| {
            let state = if !session.has_guessed(letter) {
                KeyState::Unused
            } else if session.word().contains(letter) {
                KeyState::Correct
            } else {
                KeyState::Incorrect
            };
            Key { letter, state, disabled }
        })
        .collect()
}

pub fn chips(session: &Session) -> Vec<Chip>
{
    let wrong = session.status().wrong_guess_count;
    LANGUAGES
        .iter()
        .enumerate()
        .map(|(idx, language)| Chip {
            language,
            lost: idx < wrong,
        })
        .collect()
}

pub fn banner(session: &Session) -> Banner
{
    let status = session.status();
    if status.is_game_won {
        return Banner::Won;
    }
    if status.is_game_lost {
        return Banner::Lost;
    }
    // the latest farewell stays up until the next miss or the end of the game
    languages::farewell_message(status.wrong_guess_count)
        .map_or(Banner::None, Banner::Farewell)
}
