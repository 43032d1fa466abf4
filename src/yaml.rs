//! Parser for YAML translation test files
//!
//! A test file holds a test mode and a list of tests:
//!
//! ```yaml
//! flags: {testmode: bothDirections}
//! tests:
//!   - ["a", "O....."]
//!   - ["capital letter", "A", ".....OO....."]
//!   - ["Hi!", ".....OO.OO...OO.....OO.O", {xfail: true}]
//! ```
//!
//! A test is a sequence of an input and the expected output, optionally
//! preceded by a description and followed by a mapping of options.

use std::{fs::File, iter::Peekable};

use enumset::EnumSet;
use libyaml::{Encoding, Event, Parser, ParserIter};

use crate::translator::Direction;

type YAMLEventError = Option<Result<Event, libyaml::ParserError>>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("YAML parse error")]
    YAMLError(#[from] libyaml::ParserError),
    #[error("Expected {expected}, got {got:?}")]
    UnexpectedEvent {
        expected: &'static str,
        got: YAMLEventError,
    },
    #[error("Invalid test mode {0:?}")]
    InvalidTestMode(String),
    #[error("Encoding {0:?} not supported")]
    InvalidEncoding(Encoding),
    #[error("Invalid token {0:?}")]
    InvalidToken(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TestMode {
    #[default]
    Forward,
    Backward,
    BothDirections,
}

impl TestMode {
    pub fn directions(&self) -> EnumSet<Direction> {
        match self {
            TestMode::Forward => EnumSet::only(Direction::Forward),
            TestMode::Backward => EnumSet::only(Direction::Backward),
            TestMode::BothDirections => EnumSet::all(),
        }
    }
}

/// A single translation test. For backward tests `input` is the braille and
/// `expected` the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub description: Option<String>,
    pub input: String,
    pub expected: String,
    pub xfail: bool,
}

/// The content of one YAML test file
#[derive(Debug, Default)]
pub struct TestSuite {
    pub mode: TestMode,
    pub tests: Vec<Test>,
}

pub struct YAMLParser<'a> {
    events: Peekable<ParserIter<'a>>,
}

impl<'a> YAMLParser<'a> {
    pub fn new(reader: File) -> Result<Self, ParseError> {
        let parser = Parser::new(reader)?;
        Ok(Self {
            events: parser.into_iter().peekable(),
        })
    }

    /// Consume the next event, failing unless it is accepted by `accept`
    fn event(
        &mut self,
        expected: &'static str,
        accept: fn(&Event) -> bool,
    ) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(event)) if accept(&event) => Ok(()),
            got => Err(ParseError::UnexpectedEvent { expected, got }),
        }
    }

    fn scalar(&mut self) -> Result<String, ParseError> {
        match self.events.next() {
            Some(Ok(Event::Scalar { value, .. })) => Ok(value),
            got => Err(ParseError::UnexpectedEvent {
                expected: "scalar",
                got,
            }),
        }
    }

    fn mapping_start(&mut self) -> Result<(), ParseError> {
        self.event("mapping start", |e| matches!(e, Event::MappingStart { .. }))
    }

    fn mapping_end(&mut self) -> Result<(), ParseError> {
        self.event("mapping end", |e| matches!(e, Event::MappingEnd))
    }

    fn sequence_start(&mut self) -> Result<(), ParseError> {
        self.event("sequence start", |e| matches!(e, Event::SequenceStart { .. }))
    }

    fn sequence_end(&mut self) -> Result<(), ParseError> {
        self.event("sequence end", |e| matches!(e, Event::SequenceEnd))
    }

    fn flags(&mut self) -> Result<TestMode, ParseError> {
        self.mapping_start()?;
        let value = self.scalar()?;
        if value != "testmode" {
            return Err(ParseError::InvalidToken(value));
        }
        let mode = self.scalar()?;
        let mode = match &*mode {
            "forward" => TestMode::Forward,
            "backward" => TestMode::Backward,
            "bothDirections" => TestMode::BothDirections,
            _ => {
                return Err(ParseError::InvalidTestMode(mode));
            }
        };
        self.mapping_end()?;
        Ok(mode)
    }

    fn xfail_value(&mut self) -> Result<bool, ParseError> {
        let value = self.scalar()?;
        Ok(!(value == "off" || value == "false"))
    }

    fn test(&mut self) -> Result<Test, ParseError> {
        self.sequence_start()?;
        let mut description = None;
        let mut input = self.scalar()?;
        let mut expected = self.scalar()?;
        // two scalars are (input, expected), three are (description, input, expected)
        if let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            description = Some(input);
            input = expected;
            expected = self.scalar()?;
        }
        let mut xfail = false;
        if let Some(Ok(Event::MappingStart { .. })) = self.events.peek() {
            self.mapping_start()?;
            while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
                let value = self.scalar()?;
                match &*value {
                    "xfail" => {
                        xfail = self.xfail_value()?;
                    }
                    _ => {
                        return Err(ParseError::InvalidToken(value));
                    }
                }
            }
            self.mapping_end()?;
        };
        self.sequence_end()?;
        Ok(Test {
            description,
            input,
            expected,
            xfail,
        })
    }

    fn tests(&mut self) -> Result<Vec<Test>, ParseError> {
        let mut tests: Vec<Test> = Vec::new();
        self.sequence_start()?;
        while let Some(Ok(Event::SequenceStart { .. })) = self.events.peek() {
            tests.push(self.test()?);
        }
        self.sequence_end()?;
        Ok(tests)
    }

    fn stream_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::StreamStart {
                encoding: Some(Encoding::Utf8),
            })) => Ok(()),
            Some(Ok(Event::StreamStart {
                encoding: Some(encoding),
            })) => Err(ParseError::InvalidEncoding(encoding)),
            got => Err(ParseError::UnexpectedEvent {
                expected: "stream start",
                got,
            }),
        }
    }

    pub fn yaml(&mut self) -> Result<TestSuite, ParseError> {
        let mut suite = TestSuite::default();

        self.stream_start()?;
        self.event("document start", |e| matches!(e, Event::DocumentStart { .. }))?;
        self.mapping_start()?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let value = self.scalar()?;
            match &*value {
                "flags" => {
                    suite.mode = self.flags()?;
                }
                "tests" => {
                    suite.tests = self.tests()?;
                }
                _ => {
                    return Err(ParseError::InvalidToken(value));
                }
            }
        }
        self.mapping_end()?;
        self.event("document end", |e| matches!(e, Event::DocumentEnd { .. }))?;
        self.event("stream end", |e| matches!(e, Event::StreamEnd))?;
        Ok(suite)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(path: &str) -> Result<TestSuite, ParseError> {
        let file = File::open(Path::new(env!("CARGO_MANIFEST_DIR")).join(path)).unwrap();
        YAMLParser::new(file)?.yaml()
    }

    #[test]
    fn parse_test_file() {
        let suite = parse("tests/yaml/basic.yaml").unwrap();
        assert_eq!(suite.mode, TestMode::BothDirections);
        assert_eq!(
            suite.tests[0],
            Test {
                description: None,
                input: "a".to_string(),
                expected: "O.....".to_string(),
                xfail: false,
            }
        );
        assert_eq!(
            suite.tests[1].description,
            Some("capital letter".to_string())
        );
        assert_eq!(suite.tests[1].input, "A");
    }

    #[test]
    fn parse_xfail() {
        let suite = parse("tests/yaml/lossy.yaml").unwrap();
        assert_eq!(suite.mode, TestMode::Backward);
        assert!(suite.tests.iter().all(|t| t.xfail));
    }

    #[test]
    fn unexpected_event() {
        let error = parse("tests/yaml/malformed.yaml").unwrap_err();
        assert!(matches!(
            error,
            ParseError::UnexpectedEvent {
                expected: "sequence start",
                ..
            }
        ));
    }

    #[test]
    fn directions() {
        assert_eq!(TestMode::Forward.directions().len(), 1);
        assert!(TestMode::Backward.directions().contains(Direction::Backward));
        assert_eq!(TestMode::BothDirections.directions().len(), 2);
    }
}
