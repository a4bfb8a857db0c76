use crate::error::GameError;
use crate::languages::LANGUAGES;
use crate::words;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status
{
    pub wrong_guess_count: usize,
    pub is_game_won: bool,
    pub is_game_lost: bool,
    pub is_game_over: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome
{
    Correct,
    Wrong,
    AlreadyGuessed,
    /// The game had already ended; nothing changed.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Session
{
    word: String,
    guessed: Vec<char>,
    language_count: usize,
}

impl Session
{
    pub fn new<R>(rng: &mut R) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        Self::with_word(words::random_word(rng)?)
    }

    pub fn with_word(word: &str) -> Result<Self, GameError>
    {
        Ok(Self {
            word: validate_word(word)?,
            guessed: Vec::new(),
            language_count: LANGUAGES.len(),
        })
    }

    pub fn word(&self) -> &str
    {
        &self.word
    }

    pub fn guessed_letters(&self) -> &[char]
    {
        &self.guessed
    }

    pub fn language_count(&self) -> usize
    {
        self.language_count
    }

    pub fn has_guessed(&self, letter: char) -> bool
    {
        self.guessed.contains(&letter)
    }

    pub fn status(&self) -> Status
    {
        compute_status(&self.word, &self.guessed, self.language_count)
    }

    /// Accepts exactly one ASCII letter, in either case.
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome, GameError>
    {
        let letter = parse_letter(input)?;
        if self.status().is_game_over {
            return Ok(GuessOutcome::Ignored);
        }
        if self.has_guessed(letter) {
            return Ok(GuessOutcome::AlreadyGuessed);
        }

        self.guessed.push(letter);
        tracing::debug!(letter = %letter, guessed = self.guessed.len(), "letter guessed");
        if self.word.contains(letter) {
            Ok(GuessOutcome::Correct)
        } else {
            Ok(GuessOutcome::Wrong)
        }
    }

    pub fn new_game<R>(&mut self, rng: &mut R) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        self.word = words::random_word(rng)?.to_string();
        self.guessed.clear();
        Ok(())
    }
}

pub fn compute_status(word: &str, guessed: &[char], language_count: usize) -> Status
{
    let wrong_guess_count = guessed
        .iter()
        .filter(|letter| !word.contains(**letter))
        .count();
    let is_game_won = word.chars().all(|ch| guessed.contains(&ch));
    let is_game_lost = wrong_guess_count >= language_count.saturating_sub(1);

    Status {
        wrong_guess_count,
        is_game_won,
        is_game_lost,
        is_game_over: is_game_won || is_game_lost,
    }
}

fn parse_letter(input: &str) -> Result<char, GameError>
{
    let mut chars = input.chars();
    let first = chars.next().ok_or(GameError::EmptyGuess)?;
    if chars.next().is_some() {
        return Err(GameError::MultipleCharacters(input.to_string()));
    }
    if !first.is_ascii_alphabetic() {
        return Err(GameError::NotALetter(first));
    }
    Ok(first.to_ascii_lowercase())
}

fn validate_word(word: &str) -> Result<String, GameError>
{
    if word.is_empty() || !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(GameError::InvalidWord(word.to_string()));
    }
    Ok(word.to_ascii_lowercase())
}
