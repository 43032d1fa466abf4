//! Translation between English text and six-dot braille
//!
//! [`Translator::encode`] turns text into a sequence of dot patterns and
//! [`Translator::decode`] reads such a sequence back. Both directions keep
//! track of capitalization and numeric mode with the state machines in
//! [`indication`].

use enumset::EnumSetType;
use log::{debug, trace, warn};

use crate::braille::{self, Cell, Cells, ParseError};
use crate::table::{Indicator, SymbolTable};

use indication::{Indication, numeric, uppercase};

pub mod indication;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TranslationError {
    #[error("Character {0:?} is not defined in any table")]
    UndefinedCharacter(char),
    #[error("Invalid table entry: {0}")]
    InvalidTable(#[from] ParseError),
}

/// The direction of a translation
#[derive(EnumSetType, Debug)]
pub enum Direction {
    /// From English text to braille
    Forward,
    /// From braille to English text
    Backward,
}

impl Direction {
    /// Guess the direction of a translation from its input.
    ///
    /// Input made up solely of the dot pattern symbols (including the empty
    /// string) is taken to be braille. This misreads English text that only
    /// consists of `O` and `.`, such as `"O"`.
    pub fn detect(input: &str) -> Direction {
        if input.chars().all(braille::is_dot_symbol) {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// The combined mode of a [`Decoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Normal,
    CapitalPending,
    NumberActive,
    /// A capital sign was read while in numeric mode
    CapitalPendingNumberActive,
}

/// Translates text to braille one character at a time
#[derive(Debug)]
pub struct Encoder<'a> {
    table: &'a SymbolTable,
    numeric: numeric::Indicator,
    uppercase: uppercase::Indicator,
    cells: Cells,
}

impl<'a> Encoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            numeric: numeric::Indicator::new(),
            uppercase: uppercase::Indicator::new(),
            cells: Cells::default(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric.is_numeric()
    }

    pub fn push(&mut self, c: char) -> Result<(), TranslationError> {
        let numeric = self.numeric.next(c);
        let cell = if let Some(Indication::UppercaseStart) = self.uppercase.next(c) {
            self.cells.push(self.table.indicator(Indicator::Capital));
            self.table.letter(c)
        } else if c.is_ascii_digit() {
            if let Some(Indication::NumericStart) = numeric {
                self.cells.push(self.table.indicator(Indicator::Number));
            }
            self.table.digit(c)
        } else if c == ' ' {
            Some(self.table.indicator(Indicator::Space))
        } else {
            self.table.punctuation(c).or_else(|| self.table.letter(c))
        };
        let cell = cell.ok_or(TranslationError::UndefinedCharacter(c))?;
        trace!("{:?} -> {} {}", c, cell, cell.to_unicode());
        self.cells.push(cell);
        Ok(())
    }

    pub fn finish(self) -> Cells {
        self.cells
    }
}

/// Translates braille back to text one cell at a time
#[derive(Debug)]
pub struct Decoder<'a> {
    table: &'a SymbolTable,
    numeric: numeric::Indicator,
    uppercase: uppercase::Indicator,
    text: String,
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            numeric: numeric::Indicator::new(),
            uppercase: uppercase::Indicator::new(),
            text: String::new(),
        }
    }

    pub fn state(&self) -> DecodeState {
        match (self.uppercase.is_pending(), self.numeric.is_numeric()) {
            (false, false) => DecodeState::Normal,
            (true, false) => DecodeState::CapitalPending,
            (false, true) => DecodeState::NumberActive,
            (true, true) => DecodeState::CapitalPendingNumberActive,
        }
    }

    /// Feed the next window of the input.
    ///
    /// Capital and number signs add nothing to the text. A window that is
    /// not a valid cell or that no table knows is dropped.
    pub fn push(&mut self, window: Result<Cell, ParseError>) {
        let cell = match window {
            Ok(cell) => cell,
            Err(e) => {
                warn!("Dropping malformed window: {}", e);
                self.numeric.end();
                return;
            }
        };
        match self.table.indicator_for(&cell) {
            Some(Indicator::Capital) => self.uppercase.start(),
            Some(Indicator::Number) => self.numeric.start(),
            Some(Indicator::Space) => {
                self.numeric.end();
                self.text.push(' ');
            }
            _ => self.resolve(&cell),
        }
    }

    fn resolve(&mut self, cell: &Cell) {
        let digit = self.table.digit_for(cell);
        let resolved = match digit {
            Some(d) if self.numeric.is_numeric() => Some(d),
            _ => match self.table.letter_for(cell) {
                Some(letter) if self.uppercase.take() => Some(letter.to_ascii_uppercase()),
                Some(letter) => Some(letter),
                None => self.table.punctuation_for(cell),
            },
        };
        if digit.is_none() {
            self.numeric.end();
        }
        match resolved {
            Some(c) => {
                trace!("{} {} -> {:?}", cell, cell.to_unicode(), c);
                self.text.push(c);
            }
            // a decimal sign reads back as the name of the indicator
            None if self.table.indicator_for(cell) == Some(Indicator::Decimal) => {
                trace!("{} {} -> decimal sign", cell, cell.to_unicode());
                self.text.push_str(Indicator::Decimal.name());
            }
            None => warn!("Dropping unknown cell {} {}", cell, cell.to_unicode()),
        }
    }

    /// The text read so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// A translator between English text and braille dot patterns
#[derive(Debug)]
pub struct Translator {
    table: SymbolTable,
}

impl Translator {
    pub fn new() -> Result<Self, TranslationError> {
        Ok(Self {
            table: SymbolTable::compile()?,
        })
    }

    /// Translate English text to braille.
    ///
    /// Fails on the first character that is not defined in any table.
    pub fn encode(&self, input: &str) -> Result<String, TranslationError> {
        let mut encoder = Encoder::new(&self.table);
        for c in input.chars() {
            encoder.push(c)?;
        }
        let cells = encoder.finish();
        debug!(
            "Encoded {} characters into {} cells {}",
            input.chars().count(),
            cells.len(),
            cells.to_unicode()
        );
        Ok(cells.to_string())
    }

    /// Translate braille dot patterns back to English text.
    ///
    /// The input is read in windows of six symbols. Windows that do not
    /// stand for anything are silently dropped.
    pub fn decode(&self, input: &str) -> String {
        let mut decoder = Decoder::new(&self.table);
        for window in braille::windows(input) {
            decoder.push(window);
        }
        decoder.finish()
    }

    pub fn translate_to(
        &self,
        input: &str,
        direction: Direction,
    ) -> Result<String, TranslationError> {
        match direction {
            Direction::Forward => self.encode(input),
            Direction::Backward => Ok(self.decode(input)),
        }
    }

    /// Translate `input` in the direction guessed by [`Direction::detect`]
    pub fn translate(&self, input: &str) -> Result<String, TranslationError> {
        let direction = Direction::detect(input);
        debug!("Translating {:?} {:?}", input, direction);
        self.translate_to(input, direction)
    }
}
