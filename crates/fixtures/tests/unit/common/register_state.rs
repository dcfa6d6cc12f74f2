//! # Register State Tests
//!
//! Tests for building a `RegisterState` from a sparse mapping and rendering the
//! canonical 32-line register dump.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rv32_fixtures::common::reg::{NUM_REGS, RegisterState, render_expected};
use rv32_fixtures::common::FixtureError;

/// Ensures that all registers are zero upon creation.
#[test]
fn initial_values_are_zero() {
    let regs = RegisterState::new();
    for i in 0..NUM_REGS {
        assert_eq!(regs.read(i), 0, "x{i} should be 0 initially");
    }
    assert_eq!(regs, RegisterState::default());
}

#[test]
fn write_and_read() {
    let mut regs = RegisterState::new();
    regs.write(7, 0xdead_beef);
    assert_eq!(regs.read(7), 0xdead_beef);
}

/// Ensures that writes to `x0` are discarded.
#[test]
fn x0_always_zero() {
    let mut regs = RegisterState::new();
    regs.write(0, 0xdead_beef);
    assert_eq!(regs.read(0), 0, "x0 must always read as 0");
}

#[test]
fn from_pairs_leaves_omitted_registers_zero() {
    let regs = RegisterState::from_pairs(&[(5, 1), (31, 2)]).unwrap();
    for (idx, value) in regs.iter() {
        let want = match idx {
            5 => 1,
            31 => 2,
            _ => 0,
        };
        assert_eq!(value, want, "x{idx}");
    }
}

#[test]
fn from_pairs_last_duplicate_wins() {
    let regs = RegisterState::from_pairs(&[(3, 1), (3, 9)]).unwrap();
    assert_eq!(regs.read(3), 9);
}

#[test]
fn from_pairs_accepts_explicit_zero_for_x0() {
    let regs = RegisterState::from_pairs(&[(0, 0), (1, 4)]).unwrap();
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.read(1), 4);
}

#[test]
fn from_pairs_rejects_nonzero_x0() {
    let err = RegisterState::from_pairs(&[(0, 1)]).unwrap_err();
    assert!(matches!(err, FixtureError::HardwiredZero { value: 1 }));
}

#[rstest]
#[case(32)]
#[case(33)]
#[case(usize::MAX)]
fn from_pairs_rejects_out_of_range_index(#[case] index: usize) {
    let err = RegisterState::from_pairs(&[(index, 1)]).unwrap_err();
    assert!(matches!(err, FixtureError::RegisterOutOfRange { index: i } if i == index));
}

#[test]
fn render_sparse_mapping() {
    let dump = render_expected(&[(1, 10), (2, 20), (3, 30)]).unwrap();
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "r[0] = 0x0");
    assert_eq!(lines[1], "r[1] = 0xa");
    assert_eq!(lines[2], "r[2] = 0x14");
    assert_eq!(lines[3], "r[3] = 0x1e");
    for (i, line) in lines.iter().enumerate().skip(4) {
        assert_eq!(*line, format!("r[{i}] = 0x0"));
    }
}

#[test]
fn render_empty_mapping_is_all_zero() {
    let expected: String = (0..32).map(|i| format!("r[{i}] = 0x0\n")).collect();
    assert_eq!(render_expected(&[]).unwrap(), expected);
}

#[test]
fn render_ends_with_single_newline() {
    let dump = RegisterState::new().render();
    assert!(dump.ends_with("r[31] = 0x0\n"));
    assert!(!dump.ends_with("\n\n"));
    assert_eq!(dump.matches('\n').count(), 32);
}

#[test]
fn render_matches_display() {
    let regs = RegisterState::from_pairs(&[(9, 0x123)]).unwrap();
    assert_eq!(regs.render(), format!("{regs}"));
}

#[rstest]
#[case(0, "0x0")]
#[case(0xa, "0xa")]
#[case(0x100, "0x100")]
#[case(0x12345000, "0x12345000")]
#[case(0xffff_fff6, "0xfffffff6")]
#[case(u32::MAX, "0xffffffff")]
fn render_value_is_lowercase_hex_without_padding(#[case] value: u32, #[case] text: &str) {
    let regs = RegisterState::from_pairs(&[(4, value)]).unwrap();
    let line = regs.render().lines().nth(4).unwrap().to_owned();
    assert_eq!(line, format!("r[4] = {text}"));
}

/// Negative results are wrapped by the caller; the renderer only sees unsigned values.
#[test]
fn render_prewrapped_negative_values() {
    let minus_ten = 0u32.wrapping_sub(10);
    let ten_minus_five = 10u32.wrapping_add(0u32.wrapping_sub(5));
    let regs = RegisterState::from_pairs(&[(1, minus_ten), (2, ten_minus_five)]).unwrap();
    let lines: Vec<String> = regs.render().lines().map(str::to_owned).collect();

    assert_eq!(lines[1], "r[1] = 0xfffffff6");
    assert_eq!(lines[2], "r[2] = 0x5");
}

fn sparse_mapping() -> impl Strategy<Value = Vec<(usize, u32)>> {
    prop::collection::vec((1usize..NUM_REGS, any::<u32>()), 0..48)
}

proptest! {
    #[test]
    fn render_always_has_32_ascending_lines(pairs in sparse_mapping()) {
        let dump = render_expected(&pairs).unwrap();
        let lines: Vec<&str> = dump.lines().collect();

        prop_assert_eq!(lines.len(), NUM_REGS);
        for (i, line) in lines.iter().enumerate() {
            let prefix = format!("r[{i}] = 0x");
            prop_assert!(line.starts_with(&prefix), "line {} was `{}`", i, line);
        }
        prop_assert_eq!(lines[0], "r[0] = 0x0");
    }

    #[test]
    fn render_is_idempotent(pairs in sparse_mapping()) {
        prop_assert_eq!(render_expected(&pairs).unwrap(), render_expected(&pairs).unwrap());
    }

    #[test]
    fn rendered_dump_parses_back(pairs in sparse_mapping()) {
        let regs = RegisterState::from_pairs(&pairs).unwrap();
        prop_assert_eq!(RegisterState::parse_dump(&regs.render()).unwrap(), regs);
    }
}
