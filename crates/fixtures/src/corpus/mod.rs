//! Fixture corpus definition.
//!
//! A fixture is a short RV32I-subset program paired with the register file a correct
//! simulator ends with. This module provides:
//! 1. **Test Cases:** The static `TestCase` record and its file naming.
//! 2. **Corpus:** An ordered, validated view over a table of test cases.
//! 3. **Canonical Table:** The fixed list the builder emits (see [`cases::CORPUS`]).
//!
//! Validation is structural only. Whether a program actually produces its expected
//! registers is the author's responsibility; nothing here executes RISC-V code.

use std::collections::HashSet;

use crate::common::{FixtureError, RegisterState, Result};

/// The canonical fixture table.
pub mod cases;

pub use cases::CORPUS;

/// Suffix of the file holding a test case's assembly program.
pub const INPUT_SUFFIX: &str = "_input.txt";

/// Suffix of the file holding a test case's expected register dump.
pub const EXPECTED_SUFFIX: &str = "_expected.txt";

/// One fixture: an assembly program and the registers it must leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Unique identifier, also the file-name stem of both fixture files.
    pub name: &'static str,
    /// One-line description of what the case exercises. Not written to disk.
    pub summary: &'static str,
    /// Program text, written byte-for-byte as authored.
    ///
    /// One instruction or `## start[r] = v` directive per line.
    pub input: &'static str,
    /// Final value of each explicitly set register as `(index, value)`.
    /// Registers not listed are expected to be zero.
    pub expected: &'static [(usize, u32)],
}

impl TestCase {
    /// Builds the expected register state from the sparse mapping.
    pub fn expected_state(&self) -> Result<RegisterState> {
        RegisterState::from_pairs(self.expected)
    }

    /// Renders the expected register dump written to the expected file.
    pub fn render_expected(&self) -> Result<String> {
        Ok(self.expected_state()?.render())
    }

    /// Name of the input file, `<name>_input.txt`.
    pub fn input_file_name(&self) -> String {
        format!("{}{INPUT_SUFFIX}", self.name)
    }

    /// Name of the expected file, `<name>_expected.txt`.
    pub fn expected_file_name(&self) -> String {
        format!("{}{EXPECTED_SUFFIX}", self.name)
    }
}

/// An ordered collection of test cases.
#[derive(Debug, Clone, Copy)]
pub struct Corpus<'a> {
    cases: &'a [TestCase],
}

impl<'a> Corpus<'a> {
    /// Wraps an arbitrary table of test cases. Call [`Corpus::validate`] before writing.
    pub const fn new(cases: &'a [TestCase]) -> Self {
        Self { cases }
    }

    /// Number of test cases.
    pub const fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if the corpus has no test cases.
    pub const fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates over the test cases in output order.
    pub fn iter(&self) -> std::slice::Iter<'a, TestCase> {
        self.cases.iter()
    }

    /// Looks up a test case by name.
    pub fn find(&self, name: &str) -> Option<&'a TestCase> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Checks the structural invariants of every test case.
    ///
    /// Names must be unique and usable as a file stem (non-empty ASCII alphanumerics,
    /// `_` or `-`). Register indices must be in range and `x0` must be zero.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.cases.len());
        for case in self.cases {
            if !is_valid_stem(case.name) {
                return Err(FixtureError::InvalidName {
                    name: case.name.to_owned(),
                });
            }
            if !seen.insert(case.name) {
                return Err(FixtureError::DuplicateName {
                    name: case.name.to_owned(),
                });
            }
            let _ = case.expected_state()?;
        }
        Ok(())
    }
}

impl Corpus<'static> {
    /// The canonical corpus emitted by the builder.
    pub const fn canonical() -> Self {
        Self::new(CORPUS)
    }
}

impl<'a> IntoIterator for Corpus<'a> {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

fn is_valid_stem(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
