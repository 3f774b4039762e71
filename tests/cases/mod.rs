use abacus::{Error, EvaluatorOptions, Number, evaluate};

pub fn run(input: &str) -> Result<Number, Error> {
    evaluate(input, &EvaluatorOptions::default())
}

/// Declares one end-to-end test: the input either evaluates to the given
/// display text, or fails with the given message and error code.
macro_rules! test_case {
    ($name:ident, input: $input:expr, display: $display:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = cases::run($input)
                .unwrap_or_else(|e| panic!("Failed to evaluate {:?}: {}", $input, e));
            pretty_assertions::assert_eq!(result.to_string(), $display);
        }
    };
    ($name:ident, input: $input:expr, error: $message:expr, code: $code:expr $(,)?) => {
        #[test]
        fn $name() {
            let err = match cases::run($input) {
                Ok(value) => panic!("Expected {:?} to fail, got {}", $input, value),
                Err(err) => err,
            };
            pretty_assertions::assert_eq!(err.to_string(), $message);
            pretty_assertions::assert_eq!(err.code(), $code);
        }
    };
}
