#[macro_use]
mod cases;

test_case!(
    unknown_symbol,
    input: "1 $ 2",
    error: "unknown symbol '$'",
    code: "L001",
);

test_case!(
    digit_out_of_base,
    input: "3x123",
    error: "digit '3' is not valid in a base 3 number",
    code: "L002",
);

test_case!(
    unary_only_zeros,
    input: "1x0010",
    error: "digit '1' is not valid in a unary number",
    code: "L002",
);

test_case!(
    prefix_without_digits,
    input: "0x + 1",
    error: "number prefix '0x' is not followed by any digit",
    code: "L003",
);

test_case!(
    empty,
    input: "  ",
    error: "empty expression",
    code: "P001",
);

test_case!(
    unclosed_paren,
    input: "(1 + 2",
    error: "mismatched parenthesis '('",
    code: "P002",
);

test_case!(
    stray_close_paren,
    input: "1 + 2)",
    error: "mismatched parenthesis ')'",
    code: "P002",
);

test_case!(
    unclosed_paren_after_operator,
    input: "(1 +",
    error: "mismatched parenthesis '('",
    code: "P002",
);

test_case!(
    only_open_parens,
    input: "(((",
    error: "mismatched parenthesis '('",
    code: "P002",
);

test_case!(
    stray_close_paren_after_adjacent_numbers,
    input: "1 2 )",
    error: "mismatched parenthesis ')'",
    code: "P002",
);

test_case!(
    dangling_operator,
    input: "1 *",
    error: "unexpected token '*'",
    code: "P003",
);

test_case!(
    empty_parens,
    input: "()",
    error: "unexpected token ')'",
    code: "P003",
);

test_case!(
    comma_outside_call,
    input: "1, 2",
    error: "misplaced comma",
    code: "P004",
);

test_case!(
    comma_in_nested_group,
    input: "max((1, 2))",
    error: "misplaced comma in function 'max'",
    code: "P004",
);

test_case!(
    variable,
    input: "x + 1",
    error: "unmanaged feature: variable 'x'",
    code: "E001",
);

test_case!(
    function,
    input: "max(1, 2)",
    error: "unmanaged feature: function 'max'",
    code: "E001",
);

test_case!(
    fractional,
    input: "1.5",
    error: "unmanaged feature: fractional numbers",
    code: "E001",
);

test_case!(
    negative_exponent,
    input: "2 ^ -1",
    error: "negative exponent isn't allowed",
    code: "E002",
);

test_case!(
    exponent_too_big,
    input: "2 ^ 9223372036854775808",
    error: "exponent too big, it must fit in a 64-bit integer",
    code: "E003",
);

test_case!(
    power_too_big,
    input: "2 ^ 9223372036854775807",
    error: "power too big, results are limited to 1048576 bits",
    code: "E006",
);

#[test]
fn test_nesting_limit() {
    let source = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    let err = cases::run(&source).unwrap_err();
    assert_eq!(err.code(), "P005");
    assert_eq!(err.span().start(), 256);
}
