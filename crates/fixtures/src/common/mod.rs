//! Common types shared by the corpus, writer, and configuration modules.
//!
//! This module provides the building blocks every fixture is made of:
//! 1. **Register State:** The final RV32I register file and its canonical dump format.
//! 2. **Error Handling:** The crate-wide error type and result alias.

/// Error types for corpus construction, rendering, and I/O.
pub mod error;

/// Register state and the canonical register dump.
pub mod reg;

pub use error::{FixtureError, Result};
pub use reg::{NUM_REGS, RegisterMismatch, RegisterState, render_expected};
