//! Unit tests for the evaluator.

use pretty_assertions::assert_eq;

use super::*;
use crate::api::ParserOptions;
use crate::number::ArithmeticError;
use crate::parser;
use crate::test_utils::init_test_logging;

fn run(source: &str) -> Result<Number, EvalError> {
    let postfix = parser::parse(source, &ParserOptions::default())
        .unwrap_or_else(|e| panic!("parsing failed: {}\n{}", source, e));
    eval(&postfix)
}

fn value(source: &str) -> Number {
    run(source).unwrap_or_else(|e| panic!("evaluation failed: {}\n{}", source, e))
}

fn big(text: &str) -> Number {
    Number::from_text(text, 10).unwrap()
}

#[test]
fn test_arithmetic() {
    assert_eq!(value("1 + 2 * 3"), Number::Machine(7));
    assert_eq!(value("(1 + 2) * 3"), Number::Machine(9));
    assert_eq!(value("279 - 31"), Number::Machine(248));
    assert_eq!(value("-5 * 223776"), Number::Machine(-1118880));
    assert_eq!(value("10 - 4 - 3"), Number::Machine(3));
}

#[test]
fn test_unary_operators() {
    assert_eq!(value("-3"), Number::Machine(-3));
    assert_eq!(value("+3"), Number::Machine(3));
    assert_eq!(value("--3"), Number::Machine(3));
    assert_eq!(value("2 - -3"), Number::Machine(5));
    assert_eq!(value("-(2 * 3)"), Number::Machine(-6));
}

#[test]
fn test_power() {
    assert_eq!(value("2 ^ 10"), Number::Machine(1024));
    assert_eq!(value("2 ^ 3 ^ 2"), Number::Machine(512));
    assert_eq!(value("-2 ^ 2"), Number::Machine(-4));
    assert_eq!(value("(-2) ^ 3"), Number::Machine(-8));
    assert_eq!(value("7 ^ 0"), Number::Machine(1));
}

#[test]
fn test_radix_prefixes() {
    assert_eq!(value("0xff"), Number::Machine(255));
    assert_eq!(value("2x1010 + 8x17"), Number::Machine(25));
    assert_eq!(value("1x00000"), Number::Machine(5));
    assert_eq!(value("0x10 * 3x10"), Number::Machine(48));
}

#[test]
fn test_overflow_promotes() {
    init_test_logging();
    let result = value("9223372036854775807 + 1");
    assert!(result.is_big());
    assert_eq!(result, big("9223372036854775808"));

    let result = value("2 ^ 64 - 1");
    assert_eq!(result, big("18446744073709551615"));

    assert_eq!(
        value("3 ^ 300"),
        big("136891479058588375991326027382088315966463695625337436471480190078368997177499076593800206155688941388250484440597994042813512732765695774566001")
    );
}

#[test]
fn test_big_literal() {
    let result = value("919476744083708551629 - 919476744083708551628");
    assert_eq!(result, Number::Machine(1));
    assert!(!result.is_big());
}

#[test]
fn test_pow_errors_carry_operator_span() {
    assert_eq!(
        run("2 ^ -1"),
        Err(EvalError::Arithmetic {
            source: ArithmeticError::NegativeExponent,
            span: Span::new(2, 3),
        })
    );
    assert_eq!(
        run("2 ^ (2 ^ 63)"),
        Err(EvalError::Arithmetic {
            source: ArithmeticError::ExponentTooLarge,
            span: Span::new(2, 3),
        })
    );
    assert_eq!(
        run("1 + 3 ^ 0x7fffffffffffffff"),
        Err(EvalError::Arithmetic {
            source: ArithmeticError::PowerTooLarge,
            span: Span::new(6, 7),
        })
    );
}

#[test]
fn test_unsupported_features() {
    assert_eq!(
        run("1 + x"),
        Err(EvalError::Unsupported {
            feature: "variable 'x'".into(),
            span: Span::new(4, 5),
        })
    );
    assert_eq!(
        run("f(1, 2)"),
        Err(EvalError::Unsupported {
            feature: "function 'f'".into(),
            span: Span::new(0, 1),
        })
    );
    assert_eq!(
        run("1.5 * 2"),
        Err(EvalError::Unsupported {
            feature: "fractional numbers".into(),
            span: Span::new(0, 3),
        })
    );
}

#[test]
fn test_malformed_postfix() {
    assert_eq!(eval(&[]), Err(EvalError::Malformed { span: Span::default() }));

    let postfix = parser::classify(crate::lexer::tokenize("1 2 +").unwrap());
    // Unchecked infix order: `+` finds a single operand.
    let infix_order = vec![postfix[2].clone(), postfix[0].clone()];
    assert_eq!(
        eval(&infix_order),
        Err(EvalError::Malformed { span: Span::new(4, 5) })
    );

    let two_values = &postfix[..2];
    assert_eq!(
        eval(two_values),
        Err(EvalError::Malformed { span: Span::new(2, 3) })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        run("2 ^ -1").unwrap_err().to_string(),
        "negative exponent isn't allowed"
    );
    assert_eq!(
        run("y").unwrap_err().to_string(),
        "unmanaged feature: variable 'y'"
    );
}
