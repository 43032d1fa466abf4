//! Symbol tables mapping English characters to Braille cells
//!
//! The tables are plain constants. [`SymbolTable::compile`] turns them into
//! lookup maps for both directions. Letters and digits share patterns (`1`
//! to `0` reuse the cells of `a` to `j`) and `.` and `!` share a cell, so the
//! reverse maps are kept per table and the translator decides from its mode
//! which one applies.

use std::collections::HashMap;

use crate::braille::{Cell, ParseError};

/// Lowercase letters. Uppercase letters use the same cells, preceded by
/// [`Indicator::Capital`].
pub const LETTERS: [(char, &str); 26] = [
    ('a', "O....."),
    ('b', "O.O..."),
    ('c', "OO...."),
    ('d', "OO.O.."),
    ('e', "O..O.."),
    ('f', "OOO..."),
    ('g', "OOOO.."),
    ('h', "O.OO.."),
    ('i', ".OO..."),
    ('j', ".OOO.."),
    ('k', "O...O."),
    ('l', "O.O.O."),
    ('m', "OO..O."),
    ('n', "OO.OO."),
    ('o', "O..OO."),
    ('p', "OOO.O."),
    ('q', "OOOOO."),
    ('r', "O.OOO."),
    ('s', ".OO.O."),
    ('t', ".OOOO."),
    ('u', "O...OO"),
    ('v', "O.O.OO"),
    ('w', ".OOO.O"),
    ('x', "OO..OO"),
    ('y', "OO.OOO"),
    ('z', "O..OOO"),
];

pub const DIGITS: [(char, &str); 10] = [
    ('1', "O....."),
    ('2', "O.O..."),
    ('3', "OO...."),
    ('4', "OO.O.."),
    ('5', "O..O.."),
    ('6', "OOO..."),
    ('7', "OOOO.."),
    ('8', "O.OO.."),
    ('9', ".OO..."),
    ('0', ".OOO.."),
];

/// Punctuation marks. `.` comes before `!` so that their shared cell reads
/// back as `.`.
pub const PUNCTUATION: [(char, &str); 10] = [
    ('.', "..OO.O"),
    (',', "..O..."),
    ('?', "..O.OO"),
    ('!', "..OO.O"),
    (':', "..OO.."),
    (';', "..O.O."),
    ('-', "....OO"),
    ('/', ".O..O."),
    ('(', "O.O..O"),
    (')', ".O.OO."),
];

/// Cells that modify or separate the cells around them rather than
/// standing for a letter, digit or mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Capital,
    Space,
    Number,
    Decimal,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Capital,
        Indicator::Space,
        Indicator::Number,
        Indicator::Decimal,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            Indicator::Capital => ".....O",
            Indicator::Space => "......",
            Indicator::Number => ".O.OOO",
            Indicator::Decimal => ".O...O",
        }
    }

    /// The name of the indicator. A decimal indicator reads back as its
    /// name.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Capital => "CAPITAL",
            Indicator::Space => "SPACE",
            Indicator::Number => "NUMBER",
            Indicator::Decimal => "DECIMAL",
        }
    }
}

/// A single mapping between characters and cells
#[derive(Debug, Default)]
struct Mapping {
    forward: HashMap<char, Cell>,
    backward: HashMap<Cell, char>,
}

impl Mapping {
    fn compile(entries: &[(char, &str)]) -> Result<Self, ParseError> {
        let mut mapping = Mapping::default();
        for (character, pattern) in entries {
            let cell: Cell = pattern.parse()?;
            mapping.forward.insert(*character, cell);
            // the first character listed for a cell wins
            mapping.backward.entry(cell).or_insert(*character);
        }
        Ok(mapping)
    }
}

/// Compiled lookup maps for all tables
#[derive(Debug)]
pub struct SymbolTable {
    letters: Mapping,
    digits: Mapping,
    punctuation: Mapping,
    indicators: HashMap<Indicator, Cell>,
}

impl SymbolTable {
    pub fn compile() -> Result<Self, ParseError> {
        let mut indicators = HashMap::new();
        for indicator in Indicator::ALL {
            indicators.insert(indicator, indicator.pattern().parse()?);
        }
        Ok(SymbolTable {
            letters: Mapping::compile(&LETTERS)?,
            digits: Mapping::compile(&DIGITS)?,
            punctuation: Mapping::compile(&PUNCTUATION)?,
            indicators,
        })
    }

    pub fn indicator(&self, indicator: Indicator) -> Cell {
        self.indicators
            .get(&indicator)
            .copied()
            .unwrap_or_default()
    }

    /// Return the indicator that `cell` denotes, if any
    pub fn indicator_for(&self, cell: &Cell) -> Option<Indicator> {
        Indicator::ALL
            .into_iter()
            .find(|i| self.indicators.get(i) == Some(cell))
    }

    /// The cell for a letter, ignoring case
    pub fn letter(&self, c: char) -> Option<Cell> {
        self.letters
            .forward
            .get(&c.to_ascii_lowercase())
            .copied()
    }

    pub fn digit(&self, c: char) -> Option<Cell> {
        self.digits.forward.get(&c).copied()
    }

    pub fn punctuation(&self, c: char) -> Option<Cell> {
        self.punctuation.forward.get(&c).copied()
    }

    /// The lowercase letter for a cell
    pub fn letter_for(&self, cell: &Cell) -> Option<char> {
        self.letters.backward.get(cell).copied()
    }

    pub fn digit_for(&self, cell: &Cell) -> Option<char> {
        self.digits.backward.get(cell).copied()
    }

    pub fn punctuation_for(&self, cell: &Cell) -> Option<char> {
        self.punctuation.backward.get(cell).copied()
    }
}
