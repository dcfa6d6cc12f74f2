//! The canonical fixture table.
//!
//! Each entry is an RV32I-subset program and the register file a correct simulator
//! holds after executing it line by line. Expected values are the architecturally
//! correct results in unsigned 32-bit form; registers left out are zero.

use super::TestCase;

/// Every fixture the builder emits, in output order.
pub static CORPUS: &[TestCase] = &[
    TestCase {
        name: "test_case_1",
        summary: "basic register and immediate arithmetic",
        input: concat!(
            "## start[1] = 10\n",
            "## start[2] = 20\n",
            "add x3, x1, x2\n",
            "sub x4, x1, x2\n",
            "andi x5, x1, 0xFF\n",
            "ori x6, x2, 0x10\n",
            "xor x7, x1, x2\n",
        ),
        expected: &[
            (1, 0xa),
            (2, 0x14),
            (3, 0x1e),
            (4, 0xfffffff6),
            (5, 0xa),
            (6, 0x14),
            (7, 0x1e),
        ],
    },
    TestCase {
        name: "test_case_2",
        summary: "arbitrary whitespace around operands and memory syntax",
        input: concat!(
            "## start[1] = 5\n",
            "addi    x2 ,   x1   ,    0x10\n",
            "sw x2 , 4(x1 )\n",
            "lw    x3, 4 ( x1 )\n",
        ),
        expected: &[(1, 0x5), (2, 0x15), (3, 0x15)],
    },
    TestCase {
        name: "test_case_3",
        summary: "decimal and hexadecimal immediates resolve to the same value",
        input: concat!(
            "## start[1] = 16\n",
            "addi x2, x1, 17\n",
            "addi x3, x1, 0x11\n",
        ),
        expected: &[(1, 0x10), (2, 0x21), (3, 0x21)],
    },
    TestCase {
        name: "test_case_4",
        summary: "unknown mnemonic leaves the register file untouched",
        input: "invalid_instruction x1, x2, x3\n",
        expected: &[],
    },
    TestCase {
        name: "test_case_5",
        summary: "directives only, no instructions",
        input: concat!("## start[1] = 0\n", "## start[2] = 0\n"),
        expected: &[],
    },
    TestCase {
        name: "test_case_6",
        summary: "R-type logic, comparison, and shifts",
        input: concat!(
            "## start[1] = 5\n",
            "## start[2] = 3\n",
            "nor x3, x1, x2\n",
            "slt x4, x1, x2\n",
            "sll x5, x1, x2\n",
            "sra x6, x1, x2\n",
        ),
        expected: &[
            (1, 0x5),
            (2, 0x3),
            (3, 0xfffffff8),
            (4, 0x0),
            (5, 0x28),
            (6, 0x0),
        ],
    },
    TestCase {
        name: "test_case_7",
        summary: "I-type with a negative immediate",
        input: concat!(
            "## start[1] = 10\n",
            "addi x2, x1, -5\n",
            "slti x3, x1, 15\n",
            "xori x4, x1, 0xFF\n",
        ),
        expected: &[(1, 0xa), (2, 0x5), (3, 0x1), (4, 0xf5)],
    },
    TestCase {
        name: "test_case_8",
        summary: "byte store and load",
        input: concat!("## start[1] = 0x100\n", "sb x2, 0(x1)\n", "lb x3, 0(x1)\n"),
        expected: &[(1, 0x100)],
    },
    TestCase {
        name: "test_case_9",
        summary: "lui fills the upper 20 bits",
        input: "lui x1, 0x12345\n",
        expected: &[(1, 0x12345000)],
    },
    TestCase {
        name: "test_case_10",
        summary: "word store is little-endian and round-trips through lw",
        input: concat!(
            "## start[1] = 0x200\n",
            "lui x2, 0x12345\n",
            "addi x2, x2, 0x678\n",
            "sw x2, 0(x1)\n",
            "lw x3, 0(x1)\n",
            "lb x4, 0(x1)\n",
            "lb x5, 3(x1)\n",
        ),
        expected: &[
            (1, 0x200),
            (2, 0x12345678),
            (3, 0x12345678),
            (4, 0x78),
            (5, 0x12),
        ],
    },
    TestCase {
        name: "test_case_11",
        summary: "32-bit wraparound and writes to x0",
        input: concat!(
            "## start[1] = 0xFFFFFFFF\n",
            "addi x2, x1, 1\n",
            "add x3, x1, x1\n",
            "sub x4, x0, x1\n",
            "addi x0, x1, 5\n",
        ),
        expected: &[(1, 0xffffffff), (2, 0x0), (3, 0xfffffffe), (4, 0x1)],
    },
    TestCase {
        name: "test_case_12",
        summary: "shift amounts use the low 5 bits; sra keeps the sign",
        input: concat!(
            "## start[1] = 0xFFFFFFF0\n",
            "## start[2] = 33\n",
            "sra x3, x1, x2\n",
            "sll x4, x2, x2\n",
            "slt x5, x1, x2\n",
        ),
        expected: &[
            (1, 0xfffffff0),
            (2, 0x21),
            (3, 0xfffffff8),
            (4, 0x42),
            (5, 0x1),
        ],
    },
];
