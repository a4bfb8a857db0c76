#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug)]
pub struct Language
{
    pub name: &'static str,
    pub background: Rgb,
    pub color: Rgb,
}

const LIGHT: Rgb = Rgb { r: 0xF9, g: 0xF4, b: 0xDA };
const DARK: Rgb = Rgb { r: 0x1E, g: 0x1E, b: 0x1E };

/// Eliminated front to back, one per wrong guess. The last entry is the one
/// left standing when the game is lost.
pub const LANGUAGES: &[Language] = &[
    Language { name: "HTML", background: Rgb { r: 0xE2, g: 0x68, b: 0x0F }, color: LIGHT },
    Language { name: "CSS", background: Rgb { r: 0x32, g: 0x8A, b: 0xF1 }, color: LIGHT },
    Language { name: "JavaScript", background: Rgb { r: 0xF4, g: 0xEB, b: 0x13 }, color: DARK },
    Language { name: "React", background: Rgb { r: 0x2E, g: 0xD3, b: 0xE9 }, color: DARK },
    Language { name: "TypeScript", background: Rgb { r: 0x29, g: 0x8E, b: 0xC6 }, color: LIGHT },
    Language { name: "Node.js", background: Rgb { r: 0x59, g: 0x91, b: 0x37 }, color: LIGHT },
    Language { name: "Python", background: Rgb { r: 0xFF, g: 0xD7, b: 0x42 }, color: DARK },
    Language { name: "Ruby", background: Rgb { r: 0xD0, g: 0x2B, b: 0x2B }, color: LIGHT },
    Language { name: "Assembly", background: Rgb { r: 0x2D, g: 0x51, b: 0x9F }, color: LIGHT },
];

const FAREWELLS: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

pub fn max_wrong_guesses() -> usize
{
    LANGUAGES.len().saturating_sub(1)
}

/// Message for the language knocked out by the `wrong_guess_count`-th miss.
/// The template is chosen by position so the same count always reads the same.
pub fn farewell_message(wrong_guess_count: usize) -> Option<String>
{
    let index = wrong_guess_count.checked_sub(1)?;
    let language = LANGUAGES.get(index)?;
    let template = FAREWELLS[index % FAREWELLS.len()];
    Some(template.replace("{}", language.name))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn eight_wrong_guesses_allowed()
    {
        assert_eq!(LANGUAGES.len(), 9);
        assert_eq!(max_wrong_guesses(), 8);
        assert_eq!(LANGUAGES.last().map(|lang| lang.name), Some("Assembly"));
    }

    #[test]
    fn no_farewell_before_first_miss()
    {
        assert_eq!(farewell_message(0), None);
    }

    #[test]
    fn farewell_names_the_eliminated_language()
    {
        assert_eq!(farewell_message(1).as_deref(), Some("Farewell, HTML"));
        assert_eq!(farewell_message(3).as_deref(), Some("R.I.P., JavaScript"));
        assert_eq!(farewell_message(6).as_deref(), Some("Node.js bites the dust"));
        for count in 1..=LANGUAGES.len() {
            let message = farewell_message(count).unwrap();
            assert!(message.contains(LANGUAGES[count - 1].name));
            assert_eq!(farewell_message(count), Some(message));
        }
    }

    #[test]
    fn no_farewell_past_the_list()
    {
        assert_eq!(farewell_message(LANGUAGES.len() + 1), None);
    }
}
