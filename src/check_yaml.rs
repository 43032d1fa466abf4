//! A test runner for translation tests defined in YAML files

use std::{fs::File, path::Path};

use log::info;

use crate::{
    translator::{Direction, TranslationError, Translator},
    yaml::{self, Test, TestSuite, YAMLParser},
};

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("Cannot open test file")]
    Io(#[from] std::io::Error),
    #[error("Invalid test file")]
    Parse(#[from] yaml::ParseError),
    #[error("Cannot set up the translator")]
    Translator(#[from] TranslationError),
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
        direction: Direction,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
        direction: Direction,
    },
    UnexpectedSuccess {
        input: String,
        direction: Direction,
    },
    Error {
        input: String,
        error: TranslationError,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. } | TestResult::Error { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

impl Test {
    /// Run the test in the given `direction`. For backward tests the roles
    /// of input and expected output are swapped when the suite runs in both
    /// directions.
    fn check(&self, translator: &Translator, direction: Direction, swap: bool) -> TestResult {
        let (input, expected) = if swap {
            (&self.expected, &self.input)
        } else {
            (&self.input, &self.expected)
        };
        let actual = match translator.translate_to(input, direction) {
            Ok(actual) => actual,
            Err(error) => {
                return TestResult::Error {
                    input: input.to_string(),
                    error,
                };
            }
        };
        match (actual == *expected, self.xfail) {
            (true, false) => TestResult::Success,
            (true, true) => TestResult::UnexpectedSuccess {
                input: input.to_string(),
                direction,
            },
            (false, true) => TestResult::ExpectedFailure {
                input: input.to_string(),
                expected: expected.to_string(),
                actual,
                direction,
            },
            (false, false) => TestResult::Failure {
                input: input.to_string(),
                expected: expected.to_string(),
                actual,
                direction,
            },
        }
    }
}

/// Run all tests of `suite` in every direction of its test mode
pub fn check(translator: &Translator, suite: &TestSuite) -> Vec<TestResult> {
    let both = suite.mode.directions().len() > 1;
    suite
        .mode
        .directions()
        .iter()
        .flat_map(|direction| {
            let swap = both && direction == Direction::Backward;
            suite
                .tests
                .iter()
                .map(move |test| test.check(translator, direction, swap))
        })
        .collect()
}

/// Parse the YAML test file at `path` and run its tests
pub fn check_yaml(path: &Path) -> Result<Vec<TestResult>, CheckError> {
    info!("Testing with {:?}", path);
    let file = File::open(path)?;
    let suite = YAMLParser::new(file)?.yaml()?;
    let translator = Translator::new()?;
    Ok(check(&translator, &suite))
}
