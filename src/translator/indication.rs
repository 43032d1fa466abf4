//! Braille indication
//!
//! Braille indicators are dot patterns which are inserted into the braille text
//! to indicate capitalization or the start of a number.
//!
//! Indication is handled with the help of two simple state machines that keep
//! track in which state a translation currently is. When translating to
//! braille they are fed the next character and notify the caller whether an
//! indicator is required by optionally returning an [`Indication`]. When
//! translating back they are switched on by the indicator cells they stand
//! for and queried for their mode.
//!
//! * [`numeric::Indicator`]: knows whether the translation is in numeric mode
//! * [`uppercase::Indicator`]: knows whether a capital sign is pending

pub mod numeric;
pub mod uppercase;

/// Possible indication events that the indicator state machines support
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Indication {
    NumericStart,
    UppercaseStart,
}
