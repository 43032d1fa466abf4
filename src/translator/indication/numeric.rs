//! Numeric Braille indication
//!
//! [`Indicator`] is a simple state machine to keep track of the state of a translation. As soon
//! as a digit is encountered the state is changed to [`State::Numeric`] and an
//! [`Indication::NumericStart`] is emitted. Any other character changes the state back to
//! [`State::Default`] without an indication, as there is no sign to end a number.

use crate::translator::indication::Indication;

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Default,
    Numeric,
}

/// A very simple state machine to keep track when a numeric indication is
/// required
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transition method used when translating to braille.
    ///
    /// Returns [`Indication::NumericStart`] when `c` is a digit that starts a
    /// run of digits, `None` otherwise.
    pub fn next(&mut self, c: char) -> Option<Indication> {
        match (self.state, c.is_ascii_digit()) {
            (State::Default, true) => {
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            (State::Numeric, false) => {
                self.state = State::Default;
                None
            }
            _ => None,
        }
    }

    /// A number sign was read, digits follow
    pub fn start(&mut self) {
        self.state = State::Numeric;
    }

    pub fn end(&mut self) {
        self.state = State::Default;
    }

    pub fn is_numeric(&self) -> bool {
        self.state == State::Numeric
    }
}
