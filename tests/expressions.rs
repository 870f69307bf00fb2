use shunt::{
    error::{ParseError, RuntimeError},
    evaluate_expression,
    interpreter::{
        evaluator::{evaluate, function::BUILTIN_FUNCTIONS},
        lexer::{BinaryOperator, Token, tokenize},
        parser::to_postfix,
    },
    util::num::format_result,
};

fn assert_evaluates(expr: &str, expected: f64) {
    match evaluate_expression(expr) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "`{expr}` evaluated to {value}, expected {expected}"),
        Err(e) => panic!("`{expr}` failed: {e}"),
    }
}

fn parse_failure(expr: &str) -> ParseError {
    match tokenize(expr).and_then(|tokens| to_postfix(&tokens)) {
        Ok(_) => panic!("`{expr}` parsed but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_failure(expr: &str) -> RuntimeError {
    let tokens = tokenize(expr).unwrap_or_else(|e| panic!("`{expr}` failed to tokenize: {e}"));
    let postfix =
        to_postfix(&tokens).unwrap_or_else(|e| panic!("`{expr}` failed to convert: {e}"));
    match evaluate(&postfix) {
        Ok(value) => panic!("`{expr}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn literal_scenarios() {
    assert_evaluates("3+4*2/(1-5)^2", 3.5);
    assert_evaluates("sin(0)", 0.0);
    assert_evaluates("2^3^2", 512.0);
    assert_evaluates("-2^2", -4.0);
    assert_evaluates("2^-1", 0.5);
}

#[test]
fn precedence_follows_standard_rules() {
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("2*3+1", 7.0);
    assert_evaluates("2+3*4^2", 50.0);
    assert_evaluates("(2+3)*4", 20.0);
    assert_evaluates("10-4-3", 3.0);
    assert_evaluates("8/4/2", 1.0);
}

#[test]
fn exponent_chains_group_right() {
    assert_evaluates("2^3^2", 512.0);
    assert_evaluates("2^2^3", 256.0);
    assert_evaluates("(2^3)^2", 64.0);
}

#[test]
fn unary_minus() {
    assert_evaluates("-5+3", -2.0);
    assert_evaluates("4*-2", -8.0);
    assert_evaluates("-(2+3)", -5.0);
    assert_evaluates("--4", 4.0);
    assert_evaluates("-2*3", -6.0);
}

#[test]
fn unary_minus_defers_to_exponent_chains() {
    assert_evaluates("-2^2", -4.0);
    assert_evaluates("2^-1", 0.5);
    assert_evaluates("4*-2^2", -16.0);
    assert_evaluates("(-2)^2", 4.0);
}

#[test]
fn functions_bind_to_their_group() {
    assert_evaluates("sin(0)+1", 1.0);
    assert_evaluates("sqrt(16)", 4.0);
    assert_evaluates("sqrt(9)+7", 10.0);
    assert_evaluates("sqrt(2^2)", 2.0);
    assert_evaluates("abs(-5)", 5.0);
    assert_evaluates("cos(0)", 1.0);
    assert_evaluates("tan(0)", 0.0);
    assert_evaluates("log(100)", 2.0);
    assert_evaluates("ln(1)", 0.0);
}

#[test]
fn division_by_zero_is_reported_not_infinite() {
    for expr in ["5/0", "10/0", "1/(2-2)"] {
        let err = runtime_failure(expr);
        assert!(matches!(&err, RuntimeError::DomainError { details }
                         if details.contains("division by zero")),
                "`{expr}` failed with `{err}` instead of a division-by-zero domain error");
    }
}

#[test]
fn domain_errors_name_the_offending_operation() {
    let err = runtime_failure("sqrt(-1)");
    assert!(matches!(&err, RuntimeError::DomainError { details } if details.contains("sqrt")),
            "sqrt(-1) failed with `{err}`");

    let err = runtime_failure("log(0)");
    assert!(matches!(&err, RuntimeError::DomainError { details } if details.contains("log")),
            "log(0) failed with `{err}`");

    let err = runtime_failure("ln(-5)");
    assert!(matches!(&err, RuntimeError::DomainError { details } if details.contains("ln")),
            "ln(-5) failed with `{err}`");
}

#[test]
fn unknown_functions_are_named() {
    let err = runtime_failure("foo(1)");
    assert!(matches!(&err, RuntimeError::UnknownFunction { name } if name == "foo"),
            "foo(1) failed with `{err}`");
}

#[test]
fn mismatched_parentheses() {
    for expr in ["(1+2", "1+2)", ")(", "((1)", "sin(1"] {
        let err = parse_failure(expr);
        assert!(matches!(err, ParseError::MismatchedParens),
                "`{expr}` failed with `{err}` instead of mismatched parentheses");
    }
}

#[test]
fn malformed_numbers_are_rejected() {
    for expr in ["1.2.3", ".", "1..2"] {
        let err = parse_failure(expr);
        assert!(matches!(err, ParseError::InvalidNumber { .. }),
                "`{expr}` failed with `{err}` instead of an invalid-number error");
    }

    let err = parse_failure("1.2.3");
    assert!(matches!(&err, ParseError::InvalidNumber { text } if text == "1.2.3"));
}

#[test]
fn unknown_characters_are_rejected() {
    let err = parse_failure("1 $ 2");
    assert!(matches!(err, ParseError::UnknownCharacter { character: '$' }),
            "`1 $ 2` failed with `{err}`");

    let err = parse_failure("2+#3");
    assert!(matches!(err, ParseError::UnknownCharacter { character: '#' }),
            "`2+#3` failed with `{err}`");
}

#[test]
fn incomplete_expressions_lack_operands() {
    let err = runtime_failure("1+");
    assert!(matches!(&err, RuntimeError::InsufficientOperands { symbol } if symbol == "+"),
            "`1+` failed with `{err}`");

    let err = runtime_failure("*");
    assert!(matches!(&err, RuntimeError::InsufficientOperands { symbol } if symbol == "*"),
            "`*` failed with `{err}`");

    let err = runtime_failure("sin()");
    assert!(matches!(&err, RuntimeError::InsufficientOperands { symbol } if symbol == "sin"),
            "`sin()` failed with `{err}`");
}

#[test]
fn empty_input_is_an_empty_expression() {
    for expr in ["", "   ", "\t"] {
        let err = runtime_failure(expr);
        assert!(matches!(err, RuntimeError::EmptyExpression),
                "`{expr:?}` failed with `{err}` instead of an empty-expression error");
    }
}

#[test]
fn leftover_values_are_rejected() {
    for expr in ["1 2", "(1)(2)", "3 4 5"] {
        let err = runtime_failure(expr);
        assert!(matches!(err, RuntimeError::TrailingValues { .. }),
                "`{expr}` failed with `{err}` instead of a trailing-values error");
    }
}

#[test]
fn evaluation_is_idempotent() {
    for expr in ["3+4*2/(1-5)^2", "-2^2", "sin(0)+1"] {
        let first = evaluate_expression(expr).unwrap();
        let second = evaluate_expression(expr).unwrap();
        assert!(first.to_bits() == second.to_bits(),
                "`{expr}` changed between evaluations: {first} vs {second}");
    }

    assert!(evaluate_expression("10/0").is_err());
    assert!(evaluate_expression("10/0").is_err());
}

#[test]
fn whitespace_is_skipped() {
    assert_evaluates(" 3 + 4 ", 7.0);
    assert_evaluates("\t2 *\t3", 6.0);
    assert_evaluates("sqrt ( 16 )", 4.0);
}

#[test]
fn postfix_order_encodes_precedence() {
    let tokens = tokenize("3+4*2").unwrap();
    assert_eq!(to_postfix(&tokens).unwrap(),
               vec![Token::Number(3.0),
                    Token::Number(4.0),
                    Token::Number(2.0),
                    Token::Operator(BinaryOperator::Mul),
                    Token::Operator(BinaryOperator::Add)]);

    let tokens = tokenize("-5").unwrap();
    assert_eq!(to_postfix(&tokens).unwrap(),
               vec![Token::Number(5.0), Token::Identifier("neg".to_string())]);
}

#[test]
fn every_builtin_is_callable() {
    for name in BUILTIN_FUNCTIONS {
        let expr = format!("{name}(1)");
        assert!(evaluate_expression(&expr).is_ok(), "`{expr}` failed");
    }
}

#[test]
fn results_format_per_display_policy() {
    assert_eq!(format_result(9.0), "9");
    assert_eq!(format_result(-4.0), "-4");
    assert_eq!(format_result(0.0), "0");
    assert_eq!(format_result(2.5), "2.5");
    assert_eq!(format_result(0.5), "0.5");
    assert_eq!(format_result((0.1 + 0.2) * 10.0), "3");
}
