#[macro_use]
mod cases;

test_case!(
    hex,
    input: "0xff",
    display: "INT 0xff = 255",
);

test_case!(
    hex_mixed_case,
    input: "0xDeadBeef",
    display: "INT 0xdeadbeef = 3735928559",
);

test_case!(
    binary,
    input: "2x101010",
    display: "INT 0x2a = 42",
);

test_case!(
    base_five,
    input: "5x1231301",
    display: "INT 0x5d8f = 23951",
);

test_case!(
    octal,
    input: "8x777",
    display: "INT 0x1ff = 511",
);

test_case!(
    unary_tally,
    input: "1x0000000",
    display: "INT 0x7 = 7",
);

test_case!(
    mixed_radixes,
    input: "0x10 + 2x10 * 3x10 - 1x00",
    display: "INT 0x14 = 20",
);

test_case!(
    big_hex,
    input: "0x123456789abcdef0123 * 0xfedcba",
    display: "BIG 0x121f9fffffffffef0255ae76e",
);

test_case!(
    leading_zeros,
    input: "0000000009",
    display: "INT 0x9 = 9",
);

test_case!(
    big_binary,
    input: "2x10000000000000000000000000000000000000000000000000000000000000000",
    display: "BIG 0x10000000000000000",
);
