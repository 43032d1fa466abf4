//! Translation between English text and six-dot braille written as dot
//! patterns of `O` (raised) and `.` (flat)

pub mod braille;
pub mod check_yaml;
pub mod table;
pub mod translator;
pub mod yaml;

pub use translator::{Direction, TranslationError, Translator};

/// Translate `input` to braille, or back to English if it consists solely
/// of dot pattern symbols
pub fn translate(input: &str) -> Result<String, TranslationError> {
    Translator::new()?.translate(input)
}
