use crate::game::session::{GuessOutcome, Session};
use crate::game::view::{self, Banner, Chip, Key, KeyState, Tile};
use crate::languages::Rgb;
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use rand::Rng;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;
const CONFETTI_WIDTH: usize = 48;
const CONFETTI_GLYPHS: &[char] = &['*', '+', '.', 'o', '~', '^'];
const KEY_ROW: usize = 13;

const CORRECT: Rgb = Rgb { r: 0x10, g: 0xA9, b: 0x5B };
const INCORRECT: Rgb = Rgb { r: 0xEC, g: 0x5D, b: 0x49 };
const UNUSED: Rgb = Rgb { r: 0xFC, g: 0xBA, b: 0x29 };
const TILE: Rgb = Rgb { r: 0x32, g: 0x32, b: 0x32 };
const WON: Rgb = Rgb { r: 0x10, g: 0xA9, b: 0x5B };
const LOST: Rgb = Rgb { r: 0xBA, g: 0x2A, b: 0x2A };
const FAREWELL: Rgb = Rgb { r: 0x7A, g: 0x5E, b: 0xA7 };
const WHITE: Rgb = Rgb { r: 0xFF, g: 0xFF, b: 0xFF };
const CREAM: Rgb = Rgb { r: 0xF9, g: 0xF4, b: 0xDA };
const INK: Rgb = Rgb { r: 0x1E, g: 0x1E, b: 0x1E };

struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

enum Action
{
    Quit,
    Guess(char),
    NewGame,
}

pub fn run<R>(mut session: Session, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    let mut term = TerminalGuard::enter().context("failed to prepare terminal")?;
    tracing::info!(letters = session.word().len(), "game started");

    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        while event::poll(Duration::from_millis(0))? {
            match read_action(event::read()?) {
                Some(Action::Quit) => {
                    tracing::info!("player quit");
                    return Ok(());
                }
                Some(Action::Guess(letter)) => {
                    apply_guess(&mut session, letter);
                    dirty = true;
                }
                Some(Action::NewGame) if session.status().is_game_over => {
                    session.new_game(rng)?;
                    tracing::info!(letters = session.word().len(), "new game started");
                    dirty = true;
                }
                _ => {}
            }
        }

        let won = session.status().is_game_won;
        if dirty || (won && last_tick.elapsed() >= Duration::from_millis(TICK_MS)) {
            draw_ui(term.stdout(), &session, rng)?;
            last_tick = Instant::now();
            dirty = false;
        }

        std::thread::sleep(Duration::from_millis(5));
    }
}

fn read_action(event: Event) -> Option<Action>
{
    let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event else {
        return None;
    };
    if kind == KeyEventKind::Release {
        return None;
    }
    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Enter => Some(Action::NewGame),
        KeyCode::Char(ch) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Action::Guess(ch))
        }
        _ => None,
    }
}

fn apply_guess(session: &mut Session, letter: char)
{
    let before = session.status();
    match session.guess_letter(&letter.to_string()) {
        Ok(GuessOutcome::Wrong) => {
            tracing::debug!(wrong = session.status().wrong_guess_count, "missed");
        }
        Ok(GuessOutcome::Ignored) => {
            tracing::debug!(letter = %letter, "guess after game over ignored");
        }
        Ok(_) => {}
        Err(err) => tracing::warn!("rejected guess: {err}"),
    }

    let after = session.status();
    if !before.is_game_over && after.is_game_over {
        if after.is_game_won {
            tracing::info!(wrong = after.wrong_guess_count, "game won");
        } else {
            tracing::info!(word = session.word(), "game lost");
        }
    }
}

fn draw_ui<R>(stdout: &mut Stdout, session: &Session, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    let status = session.status();
    let mut lines = Vec::new();

    if status.is_game_won {
        lines.push(render_confetti(rng));
    }
    lines.push("Assembly: Endgame".to_string());
    lines.push(format!(
        "Guess the word within {} attempts to keep the programming world safe from Assembly!",
        session.language_count().saturating_sub(1)
    ));
    lines.push(String::new());

    let banner = view::banner(session);
    for line in banner.lines() {
        lines.push(paint(&format!(" {line} "), banner_color(&banner), WHITE));
    }
    if matches!(banner, Banner::None) {
        lines.push(String::new());
    }
    lines.push(String::new());

    lines.push(render_chips(&view::chips(session)));
    lines.push(String::new());
    lines.push(render_tiles(&view::tiles(session)));
    lines.push(String::new());

    let keys = view::keyboard(session);
    for row in keys.chunks(KEY_ROW) {
        lines.push(render_keys(row));
    }
    lines.push(String::new());

    if status.is_game_over {
        lines.push("Press ENTER for a new game. Esc quits.".to_string());
    } else {
        lines.push(format!(
            "Type a letter to guess. Wrong guesses: {}/{}. Esc quits.",
            status.wrong_guess_count,
            session.language_count().saturating_sub(1)
        ));
    }
    if status.is_game_won {
        lines.push(render_confetti(rng));
    }

    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn banner_color(banner: &Banner) -> Rgb
{
    match banner {
        Banner::Won => WON,
        Banner::Lost => LOST,
        Banner::Farewell(_) | Banner::None => FAREWELL,
    }
}

fn paint(text: &str, background: Rgb, foreground: Rgb) -> String
{
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}\x1b[0m",
        background.r, background.g, background.b, foreground.r, foreground.g, foreground.b, text
    )
}

fn render_chips(chips: &[Chip]) -> String
{
    chips
        .iter()
        .map(|chip| {
            let label = format!(" {} ", chip.language.name);
            if chip.lost {
                // dimmed and struck through
                format!("\x1b[2;9m{}\x1b[0m", paint(&label, TILE, chip.language.color))
            } else {
                paint(&label, chip.language.background, chip.language.color)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn letter_cell(letter: char) -> String
{
    format!(" {} ", letter.to_ascii_uppercase())
}

fn render_tiles(tiles: &[Tile]) -> String
{
    let mut row = String::new();
    for tile in tiles {
        let cell = match tile {
            Tile::Hidden => paint("   ", TILE, TILE),
            Tile::Guessed(ch) => paint(&letter_cell(*ch), TILE, CREAM),
            Tile::Missed(ch) => paint(&letter_cell(*ch), TILE, INCORRECT),
        };
        row.push_str(&cell);
        row.push(' ');
    }
    row
}

fn render_keys(keys: &[Key]) -> String
{
    let mut row = String::new();
    for key in keys {
        let background = match key.state {
            KeyState::Unused => UNUSED,
            KeyState::Correct => CORRECT,
            KeyState::Incorrect => INCORRECT,
        };
        let mut cell = paint(&letter_cell(key.letter), background, INK);
        if key.disabled || key.state != KeyState::Unused {
            cell = format!("\x1b[2m{cell}");
        }
        row.push_str(&cell);
        row.push(' ');
    }
    row
}

fn render_confetti<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let mut row = String::new();
    for _ in 0..CONFETTI_WIDTH {
        if rng.gen_bool(0.4) {
            let glyph = CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())];
            row.push_str(&format!(
                "\x1b[38;2;{};{};{}m{}\x1b[0m",
                rng.gen_range(64..=255u8),
                rng.gen_range(64..=255u8),
                rng.gen_range(64..=255u8),
                glyph
            ));
        } else {
            row.push(' ');
        }
    }
    row
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event
    {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn keys_map_to_actions()
    {
        assert!(matches!(
            read_action(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        ));
        assert!(matches!(
            read_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
        assert!(matches!(
            read_action(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Action::Guess('c'))
        ));
        assert!(matches!(
            read_action(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::NewGame)
        ));
        assert!(read_action(key(KeyCode::Left, KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn modified_letters_are_not_guesses()
    {
        assert!(read_action(key(KeyCode::Char('a'), KeyModifiers::CONTROL)).is_none());
        assert!(read_action(key(KeyCode::Char('e'), KeyModifiers::ALT)).is_none());
        assert!(matches!(
            read_action(key(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(Action::Guess('E'))
        ));
    }

    #[test]
    fn invalid_keys_do_not_count_as_guesses()
    {
        let mut session = Session::with_word("react").unwrap();
        apply_guess(&mut session, '1');
        apply_guess(&mut session, 'R');
        assert_eq!(session.guessed_letters(), &['r']);
    }

    fn visible(text: &str) -> String
    {
        let mut out = String::new();
        let mut in_escape = false;
        for ch in text.chars() {
            match (in_escape, ch) {
                (false, '\x1b') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, _) => out.push(ch),
            }
        }
        out
    }

    #[test]
    fn confetti_has_fixed_width()
    {
        let mut rng = StdRng::seed_from_u64(9);
        let row = visible(&render_confetti(&mut rng));
        assert_eq!(row.chars().count(), CONFETTI_WIDTH);
        assert!(row.chars().all(|ch| ch == ' ' || CONFETTI_GLYPHS.contains(&ch)));
    }

    #[test]
    fn tiles_hide_unguessed_letters()
    {
        let row = visible(&render_tiles(&[Tile::Hidden, Tile::Guessed('a'), Tile::Missed('b')]));
        assert_eq!(row, "     A   B  ");
    }
}
