//! RV32I conformance fixture corpus.
//!
//! This crate holds a fixed set of RV32I-subset programs together with the register file
//! a correct instruction-level simulator must end with, and writes them out as paired
//! text fixtures:
//! 1. **Common:** Register state, the canonical `r[<i>] = 0x<hex>` dump, and errors.
//! 2. **Corpus:** The static table of test cases and its structural validation.
//! 3. **Writer:** Emission of `<name>_input.txt` / `<name>_expected.txt` and read-back checks.
//! 4. **Configuration:** Output directory selection from JSON or the environment.
//!
//! A simulator is conformant for a case iff its register dump for the input file is
//! byte-identical to the expected file. Nothing in this crate executes RISC-V code.

/// Common types (register state, dump format, errors).
pub mod common;
/// Builder configuration (output directory, JSON and environment loading).
pub mod config;
/// Test case definitions and the canonical corpus.
pub mod corpus;
/// Fixture file emission and verification.
pub mod writer;

/// Crate-wide error type; every fallible operation returns `Result<T, FixtureError>`.
pub use crate::common::{FixtureError, RegisterState, Result};
/// Root configuration type; use `FixtureConfig::default()` or `FixtureConfig::from_env()`.
pub use crate::config::FixtureConfig;
/// Test case record and corpus view; `Corpus::canonical()` is the shipped fixture set.
pub use crate::corpus::{Corpus, TestCase};
/// Writer for fixture pairs; `write_corpus` emits the canonical corpus in one call.
pub use crate::writer::{CorpusWriter, WriteReport, write_corpus};
