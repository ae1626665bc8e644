//! Rendering of a walked board as bordered text and/or ANSI colors.

use crate::{Board, Error, Result};
use core::{fmt, str};

/// Symbols the art is drawn with, indexed by `count mod 8`.
const ALPHABET: [char; 8] = [' ', '.', '0', '+', '^', 'E', 'R', 'I'];

/// Background color escapes parallel to [`ALPHABET`].
///
/// Index 0 is the designated reset/background entry; the rest are the basic
/// ANSI 256-color backgrounds.
const COLORS: [&str; 8] = [
    "\x1b[0m",
    "\x1b[48;5;1m",
    "\x1b[48;5;2m",
    "\x1b[48;5;3m",
    "\x1b[48;5;4m",
    "\x1b[48;5;5m",
    "\x1b[48;5;6m",
    "\x1b[48;5;7m",
];

/// SGR reset emitted after every colored cell.
const RESET: &str = "\x1b[0m";

/// Title decoration for the canonical board width.
const TITLE: &str = "ViHash 1.0";

/// Board width the titled top border applies to.
const TITLED_COLS: usize = 16;

/// Render mode.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Mode {
    /// Alphabet symbols only.
    #[default]
    Symbols,

    /// Alphabet symbols on colored backgrounds.
    ColorSymbols,

    /// Colored backgrounds only.
    Colors,
}

impl Mode {
    /// Decode render mode from the given string identifier.
    ///
    /// # Supported modes
    /// - `symbols`
    /// - `color-symbols`
    /// - `colors`
    pub fn new(id: &str) -> Result<Self> {
        id.parse()
    }

    /// Get the string identifier for this render mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Symbols => "symbols",
            Mode::ColorSymbols => "color-symbols",
            Mode::Colors => "colors",
        }
    }
}

impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Mode {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        match id {
            "symbols" => Ok(Mode::Symbols),
            "color-symbols" => Ok(Mode::ColorSymbols),
            "colors" => Ok(Mode::Colors),
            _ => Err(Error::ModeUnknown),
        }
    }
}

/// Art renderer: projects a finished [`Board`] to bordered output.
///
/// The board itself is never mutated; rendering the same board twice in the
/// same mode produces identical output.
pub struct Art<'a> {
    board: &'a Board,
    mode: Mode,
}

impl<'a> Art<'a> {
    /// Create new art from the given board and render mode.
    pub fn new(board: &'a Board, mode: Mode) -> Self {
        Self { board, mode }
    }
}

impl fmt::Display for Art<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.board.layout().cols();

        if cols == TITLED_COLS {
            writeln!(f, "+{:-^width$}+", TITLE, width = cols)?;
        } else {
            writeln!(f, "+{:-^width$}+", "", width = cols)?;
        }

        for row in self.board.cells().chunks(cols) {
            write!(f, "|")?;

            for &count in row {
                let index = glyph_index(count);

                match self.mode {
                    Mode::Symbols => write!(f, "{}", ALPHABET[index])?,
                    Mode::ColorSymbols => {
                        write!(f, "{}{}{RESET}", COLORS[index], ALPHABET[index])?
                    }
                    Mode::Colors => write!(f, "{} {RESET}", COLORS[index])?,
                }
            }

            writeln!(f, "|")?;
        }

        write!(f, "+{:-^width$}+", "", width = cols)
    }
}

/// Map a visit count to its alphabet/color index.
///
/// Counts may be negative; `rem_euclid` keeps the index in `[0, 8)`.
fn glyph_index(count: i32) -> usize {
    count.rem_euclid(ALPHABET.len() as i32) as usize
}
