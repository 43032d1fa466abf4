//! Uppercase Braille indication
//!
//! Every uppercase letter is preceded by its own capital sign, so when translating to braille
//! [`Indicator::next`] emits an [`Indication::UppercaseStart`] for each uppercase character and
//! never leaves [`State::Default`].
//!
//! When translating back a capital sign puts the [`Indicator`] into [`State::Pending`] until a
//! letter consumes it with [`Indicator::take`].

use crate::translator::indication::Indication;

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Default,
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, c: char) -> Option<Indication> {
        c.is_ascii_uppercase().then_some(Indication::UppercaseStart)
    }

    /// A capital sign was read
    pub fn start(&mut self) {
        self.state = State::Pending;
    }

    pub fn is_pending(&self) -> bool {
        self.state == State::Pending
    }

    /// Consume a pending capital sign. Returns whether one was pending.
    pub fn take(&mut self) -> bool {
        let pending = self.is_pending();
        self.state = State::Default;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_test() {
        let mut indicator = Indicator::new();
        assert_eq!(indicator.next('A'), Some(Indication::UppercaseStart));
        assert_eq!(indicator.next('B'), Some(Indication::UppercaseStart));
        assert_eq!(indicator.next('c'), None);
        assert_eq!(indicator.next('1'), None);
        assert_eq!(indicator.next(' '), None);
        assert!(!indicator.is_pending());
    }

    #[test]
    fn pending_capital() {
        let mut indicator = Indicator::new();
        assert!(!indicator.take());
        indicator.start();
        indicator.start();
        assert!(indicator.is_pending());
        assert!(indicator.take());
        assert!(!indicator.is_pending());
        assert!(!indicator.take());
    }
}
