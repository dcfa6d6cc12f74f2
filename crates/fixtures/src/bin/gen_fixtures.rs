//! Fixture generator.
//!
//! Writes the canonical RV32I fixture corpus, one `<name>_input.txt` and one
//! `<name>_expected.txt` per test case, into `tests/` under the working directory.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p rv32-fixtures --bin gen_fixtures
//! RV32_FIXTURES_DIR=build/fixtures RUST_LOG=debug cargo run -p rv32-fixtures --bin gen_fixtures
//! ```
//!
//! `RV32_FIXTURES_CONFIG` may name a JSON file such as `{ "output_dir": "fixtures" }`.

use std::error::Error;
use std::process::ExitCode;

use rv32_fixtures::{Corpus, CorpusWriter, FixtureConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> rv32_fixtures::Result<()> {
    let config = FixtureConfig::from_env()?;
    let report = CorpusWriter::new(&config).write(Corpus::canonical())?;
    info!(
        "Test cases generated successfully! ({} cases, {} files in {})",
        report.cases,
        report.files.len(),
        report.output_dir.display()
    );
    Ok(())
}
