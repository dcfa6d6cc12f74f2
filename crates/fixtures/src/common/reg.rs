//! Register State and Canonical Register Dump.
//!
//! This module provides the `RegisterState` struct, the final integer register file a
//! conformant simulator must reach for a fixture. It provides:
//! 1. **Storage:** 32 unsigned 32-bit registers with `x0` hardwired to zero.
//! 2. **Rendering:** The canonical 32-line dump, `r[<i>] = 0x<hex>` per register.
//! 3. **Read-back:** A strict parser for the same format and a per-register diff, so a
//!    dump produced by a simulator can be explained when it is not byte-identical.

use std::fmt;

use super::error::{FixtureError, Result};

/// Number of architectural integer registers in RV32I.
pub const NUM_REGS: usize = 32;

/// Final integer register file of a fixture.
///
/// Values are stored in their unsigned 32-bit form. Logically negative results must be
/// wrapped before they are stored (`-10` is `0xfffffff6`); rendering never performs sign
/// handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterState {
    regs: [u32; NUM_REGS],
}

impl RegisterState {
    /// Creates a register state with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Builds a register state from a sparse `(index, value)` mapping.
    ///
    /// Indices that do not appear in `pairs` are zero. When an index appears more than
    /// once, the last value wins.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Register index (0-31) and final value for each explicitly set register.
    ///
    /// # Returns
    ///
    /// The populated state, or an error if an index is out of range or `x0` is given a
    /// non-zero value.
    pub fn from_pairs(pairs: &[(usize, u32)]) -> Result<Self> {
        let mut state = Self::new();
        for &(index, value) in pairs {
            if index >= NUM_REGS {
                return Err(FixtureError::RegisterOutOfRange { index });
            }
            if index == 0 && value != 0 {
                return Err(FixtureError::HardwiredZero { value });
            }
            state.write(index, value);
        }
        Ok(state)
    }

    /// Reads a register. Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`NUM_REGS`].
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `x0` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`NUM_REGS`].
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Iterates over `(index, value)` for `x0` through `x31` in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..NUM_REGS).map(|idx| (idx, self.read(idx)))
    }

    /// Renders the canonical register dump.
    ///
    /// The result is exactly 32 lines, `r[<i>] = 0x<value>` with the value in lowercase
    /// hexadecimal without leading zeros, each terminated by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Parses a canonical register dump.
    ///
    /// Only the exact output of [`RegisterState::render`] is accepted: 32 lines in
    /// ascending register order, lowercase hex without leading zeros, a final newline
    /// and nothing after it.
    ///
    /// # Arguments
    ///
    /// * `text` - The dump, typically read back from an expected file or produced by a
    ///   simulator under test.
    ///
    /// # Returns
    ///
    /// The parsed state, or [`FixtureError::MalformedDump`] naming the first bad line.
    pub fn parse_dump(text: &str) -> Result<Self> {
        let mut state = Self::new();
        let mut count = 0;

        for (idx, line) in text.split_terminator('\n').enumerate() {
            let line_no = idx + 1;
            if idx >= NUM_REGS {
                return Err(FixtureError::malformed(
                    line_no,
                    format!("unexpected line after r[{}]", NUM_REGS - 1),
                ));
            }

            let (reg, value) = parse_dump_line(line).ok_or_else(|| {
                FixtureError::malformed(line_no, format!("cannot parse `{line}`"))
            })?;
            if reg != idx {
                return Err(FixtureError::malformed(
                    line_no,
                    format!("expected r[{idx}], found r[{reg}]"),
                ));
            }
            if line != dump_line(reg, value) {
                return Err(FixtureError::malformed(
                    line_no,
                    format!("`{line}` is not in canonical form"),
                ));
            }
            if reg == 0 && value != 0 {
                return Err(FixtureError::HardwiredZero { value });
            }

            state.write(reg, value);
            count += 1;
        }

        if count < NUM_REGS {
            return Err(FixtureError::malformed(count + 1, format!("missing r[{count}]")));
        }
        if !text.ends_with('\n') {
            return Err(FixtureError::malformed(NUM_REGS, "missing final newline"));
        }

        Ok(state)
    }

    /// Lists the registers whose values differ between `self` (expected) and `actual`.
    ///
    /// The result is ordered by register index and is empty when both states are equal.
    pub fn mismatches(&self, actual: &Self) -> Vec<RegisterMismatch> {
        self.iter()
            .zip(actual.iter())
            .filter(|((_, expected), (_, actual))| expected != actual)
            .map(|((index, expected), (_, actual))| RegisterMismatch {
                index,
                expected,
                actual,
            })
            .collect()
    }
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.iter() {
            writeln!(f, "{}", dump_line(idx, value))?;
        }
        Ok(())
    }
}

/// A single register whose actual value disagrees with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMismatch {
    /// Register index (0-31).
    pub index: usize,
    /// Value recorded in the expected dump.
    pub expected: u32,
    /// Value found in the actual dump.
    pub actual: u32,
}

impl fmt::Display for RegisterMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x{}: expected {:#x}, got {:#x}",
            self.index, self.expected, self.actual
        )
    }
}

/// Renders the expected register dump for a sparse `(index, value)` mapping.
///
/// Omitted registers render as `0x0`. See [`RegisterState::from_pairs`] for the errors.
pub fn render_expected(pairs: &[(usize, u32)]) -> Result<String> {
    Ok(RegisterState::from_pairs(pairs)?.render())
}

fn dump_line(idx: usize, value: u32) -> String {
    format!("r[{idx}] = {value:#x}")
}

fn parse_dump_line(line: &str) -> Option<(usize, u32)> {
    let rest = line.strip_prefix("r[")?;
    let (reg, hex) = rest.split_once("] = 0x")?;
    let reg = reg.parse().ok()?;
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some((reg, value))
}
