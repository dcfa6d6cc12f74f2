//! Fixture file writer.
//!
//! This module turns a corpus into files on disk. It performs:
//! 1. **Directory setup:** Creates the output directory if it is missing.
//! 2. **Emission:** Writes `<name>_input.txt` verbatim and `<name>_expected.txt` as the
//!    rendered register dump, overwriting earlier runs.
//! 3. **Verification:** Reads a written corpus back and reports fixtures that are missing
//!    or no longer byte-identical to what would be written.
//!
//! Output is deterministic: the same corpus always produces the same bytes.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::{FixtureError, Result};
use crate::config::FixtureConfig;
use crate::corpus::{Corpus, TestCase};

/// Writes fixture pairs into a single output directory.
#[derive(Debug, Clone)]
pub struct CorpusWriter {
    output_dir: PathBuf,
}

/// Summary of a completed [`CorpusWriter::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Directory the fixtures were written to.
    pub output_dir: PathBuf,
    /// Number of test cases written.
    pub cases: usize,
    /// Every file written, input file first for each case.
    pub files: Vec<PathBuf>,
}

/// Why a fixture file on disk does not match the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// The file does not exist.
    Missing,
    /// The file exists but its bytes differ.
    Differs,
}

/// A fixture file that needs to be regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFixture {
    /// Name of the test case the file belongs to.
    pub name: String,
    /// Path of the offending file.
    pub path: PathBuf,
    /// What is wrong with it.
    pub reason: StaleReason,
}

impl fmt::Display for StaleFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            StaleReason::Missing => "missing",
            StaleReason::Differs => "out of date",
        };
        write!(f, "{}: {} is {reason}", self.name, self.path.display())
    }
}

impl CorpusWriter {
    /// Creates a writer for the output directory named by `config`.
    pub fn new(config: &FixtureConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
        }
    }

    /// Directory the writer emits into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of a test case's input file.
    pub fn input_path(&self, case: &TestCase) -> PathBuf {
        self.output_dir.join(case.input_file_name())
    }

    /// Path of a test case's expected file.
    pub fn expected_path(&self, case: &TestCase) -> PathBuf {
        self.output_dir.join(case.expected_file_name())
    }

    /// Writes both fixture files for every test case in `corpus`.
    ///
    /// The corpus is validated and every expected dump rendered before anything touches
    /// the filesystem, so a malformed table never leaves a half-written directory. An
    /// existing output directory is not an error; existing files are overwritten.
    ///
    /// # Arguments
    ///
    /// * `corpus` - The test cases to emit.
    ///
    /// # Returns
    ///
    /// A report listing the files written, or the first validation or I/O error.
    pub fn write(&self, corpus: Corpus<'_>) -> Result<WriteReport> {
        corpus.validate()?;
        let planned = self.plan(corpus)?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|source| FixtureError::io(&self.output_dir, source))?;

        let mut files = Vec::with_capacity(planned.len());
        for (_, path, contents) in planned {
            fs::write(&path, contents.as_bytes())
                .map_err(|source| FixtureError::io(&path, source))?;
            debug!(path = %path.display(), bytes = contents.len(), "wrote fixture file");
            files.push(path);
        }

        info!(
            cases = corpus.len(),
            dir = %self.output_dir.display(),
            "fixture corpus written"
        );

        Ok(WriteReport {
            output_dir: self.output_dir.clone(),
            cases: corpus.len(),
            files,
        })
    }

    /// Compares the files on disk against what [`CorpusWriter::write`] would produce.
    ///
    /// # Returns
    ///
    /// The stale fixture files in corpus order (empty when the directory is up to date),
    /// or an error if the corpus is invalid or a file exists but cannot be read.
    pub fn verify(&self, corpus: Corpus<'_>) -> Result<Vec<StaleFixture>> {
        corpus.validate()?;

        let mut stale = Vec::new();
        for (case, path, contents) in self.plan(corpus)? {
            let reason = match fs::read(&path) {
                Ok(bytes) if bytes == contents.as_bytes() => continue,
                Ok(_) => StaleReason::Differs,
                Err(err) if err.kind() == io::ErrorKind::NotFound => StaleReason::Missing,
                Err(source) => return Err(FixtureError::io(&path, source)),
            };
            let fixture = StaleFixture {
                name: case.name.to_owned(),
                path,
                reason,
            };
            warn!("{fixture}");
            stale.push(fixture);
        }

        Ok(stale)
    }

    /// Every file the corpus maps to, with its contents, in write order.
    fn plan<'a>(&self, corpus: Corpus<'a>) -> Result<Vec<(&'a TestCase, PathBuf, String)>> {
        let mut planned = Vec::with_capacity(corpus.len() * 2);
        for case in corpus {
            planned.push((case, self.input_path(case), case.input.to_owned()));
            planned.push((case, self.expected_path(case), case.render_expected()?));
        }
        Ok(planned)
    }
}

/// Writes the canonical corpus into `output_dir`.
pub fn write_corpus(output_dir: impl Into<PathBuf>) -> Result<WriteReport> {
    CorpusWriter::new(&FixtureConfig::with_output_dir(output_dir)).write(Corpus::canonical())
}
