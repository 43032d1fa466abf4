//! Six-dot Braille cells and their textual dot pattern notation
//!
//! A cell is written as six symbols, `O` for a raised dot and `.` for a flat
//! one. The symbols read the cell row by row, left column first, so the
//! positions of the pattern correspond to the dots 1, 4, 2, 5, 3 and 6.

use std::str::FromStr;

use enumset::{EnumSet, EnumSetType};

/// Symbol for a raised dot
pub const RAISED: char = 'O';
/// Symbol for a flat dot
pub const FLAT: char = '.';
/// Number of symbols in the pattern of one cell
pub const CELL_WIDTH: usize = 6;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid dot symbol {character:?}")]
    InvalidDot { character: char },
    #[error("A dot pattern needs 6 symbols, got {length}")]
    InvalidLength { length: usize },
}

#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

/// The dots in the order in which they appear in a dot pattern
const PATTERN_ORDER: [BrailleDot; CELL_WIDTH] = [
    BrailleDot::Dot1,
    BrailleDot::Dot4,
    BrailleDot::Dot2,
    BrailleDot::Dot5,
    BrailleDot::Dot3,
    BrailleDot::Dot6,
];

fn dot_to_hex(dot: BrailleDot) -> u32 {
    match dot {
        BrailleDot::Dot1 => 0x01,
        BrailleDot::Dot2 => 0x02,
        BrailleDot::Dot3 => 0x04,
        BrailleDot::Dot4 => 0x08,
        BrailleDot::Dot5 => 0x10,
        BrailleDot::Dot6 => 0x20,
    }
}

/// Return true if `c` is one of the two symbols of the dot pattern notation
pub fn is_dot_symbol(c: char) -> bool {
    matches!(c, RAISED | FLAT)
}

/// One Braille cell, i.e. the set of its raised dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(EnumSet<BrailleDot>);

impl Cell {
    /// The cell as a character of the Unicode braille patterns block
    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(dot_to_hex)
            .fold(0x2800, |acc, x| acc | x);
        char::from_u32(unicode).unwrap_or('\u{2800}')
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != CELL_WIDTH {
            return Err(ParseError::InvalidLength { length });
        }
        let mut dots = EnumSet::new();
        for (c, dot) in s.chars().zip(PATTERN_ORDER) {
            match c {
                RAISED => {
                    dots.insert(dot);
                }
                FLAT => (),
                character => return Err(ParseError::InvalidDot { character }),
            }
        }
        Ok(Cell(dots))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pattern: String = PATTERN_ORDER
            .iter()
            .map(|dot| if self.0.contains(*dot) { RAISED } else { FLAT })
            .collect();
        write!(f, "{}", pattern)
    }
}

/// A sequence of cells, displayed as the concatenation of their dot patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cells(Vec<Cell>);

impl std::ops::Deref for Cells {
    type Target = Vec<Cell>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Cells {
    pub fn push(&mut self, cell: Cell) {
        self.0.push(cell);
    }

    pub fn to_unicode(&self) -> String {
        self.0.iter().map(Cell::to_unicode).collect()
    }
}

impl std::fmt::Display for Cells {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

/// Split a dot pattern string into windows of [`CELL_WIDTH`] symbols.
///
/// Every window is parsed on its own, so a malformed window (including a
/// trailing window that is too short) yields an error without affecting its
/// neighbours.
pub fn windows(input: &str) -> impl Iterator<Item = Result<Cell, ParseError>> + '_ {
    let symbols: Vec<char> = input.chars().collect();
    let windows: Vec<String> = symbols
        .chunks(CELL_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect();
    windows.into_iter().map(|w| w.parse())
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;

    #[test]
    fn parse_cell() {
        assert_eq!("O.....".parse(), Ok(Cell(enum_set!(BrailleDot::Dot1))));
        assert_eq!(
            "O...OO".parse(),
            Ok(Cell(enum_set!(
                BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot6
            )))
        );
        assert_eq!("......".parse(), Ok(Cell::default()));
    }

    #[test]
    fn parse_invalid_cell() {
        assert_eq!(
            "O..x..".parse::<Cell>(),
            Err(ParseError::InvalidDot { character: 'x' })
        );
        assert_eq!(
            "O..".parse::<Cell>(),
            Err(ParseError::InvalidLength { length: 3 })
        );
        assert_eq!(
            "".parse::<Cell>(),
            Err(ParseError::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn display_cell() {
        for pattern in ["O.....", "OO.OOO", ".O.OOO", "......", "OOOOOO"] {
            assert_eq!(pattern.parse::<Cell>().unwrap().to_string(), pattern);
        }
    }

    #[test]
    fn unicode() {
        assert_eq!("O.....".parse::<Cell>().unwrap().to_unicode(), '⠁');
        assert_eq!("O.O...".parse::<Cell>().unwrap().to_unicode(), '⠃');
        assert_eq!(".O.OOO".parse::<Cell>().unwrap().to_unicode(), '⠼');
        assert_eq!(Cell::default().to_unicode(), '⠀');
    }

    #[test]
    fn display_cells() {
        let mut cells = Cells::default();
        cells.push("O.....".parse().unwrap());
        cells.push("O.O...".parse().unwrap());
        assert_eq!(cells.to_string(), "O.....O.O...");
        assert_eq!(cells.to_unicode(), "⠁⠃");
        assert_eq!(Cells::default().to_string(), "");
    }

    #[test]
    fn split_windows() {
        let w: Vec<_> = windows("O.....O.O...OO").collect();
        assert_eq!(w.len(), 3);
        assert_eq!(w[0], "O.....".parse());
        assert_eq!(w[1], "O.O...".parse());
        assert_eq!(w[2], Err(ParseError::InvalidLength { length: 2 }));
        assert_eq!(windows("").count(), 0);
    }

    #[test]
    fn dot_symbols() {
        assert!(is_dot_symbol('O'));
        assert!(is_dot_symbol('.'));
        assert!(!is_dot_symbol('o'));
        assert!(!is_dot_symbol('0'));
    }
}
