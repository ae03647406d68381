use calc_rocks::{evaluate, evaluate_f64, tokenize, Error, Evaluator, LexemeKind, Number, ParserError, DEFAULT_MAX_DEPTH};
use pretty_assertions::assert_eq;


fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn empty_expression_is_zero() {
    init();
    assert_eq!(evaluate(""), Ok(Number::Integer(0)));
    assert_eq!(evaluate("   "), Ok(Number::Integer(0)));
}

#[test]
fn operator_precedence() {
    init();
    assert_eq!(evaluate("2+3*4"), Ok(Number::Integer(14)));
    assert_eq!(evaluate("(2+3)*4"), Ok(Number::Integer(20)));
    assert_eq!(evaluate("2*3+4*5"), Ok(Number::Integer(26)));
    assert_eq!(evaluate("8/4/2"), Ok(Number::Integer(1)));
}

#[test]
fn implicit_multiplication() {
    init();
    assert_eq!(evaluate("3(4-1)"), Ok(Number::Integer(9)));
    assert_eq!(evaluate("1 + 2(3)"), Ok(Number::Integer(7)));
    assert_eq!(evaluate("2(3)/4"), Ok(Number::Float(1.5)));
}

#[test]
fn left_associativity() {
    init();
    assert_eq!(evaluate("2+3-8+6"), Ok(Number::Integer(3)));
    assert_eq!(evaluate("10-2-3"), Ok(Number::Integer(5)));
    assert_eq!(evaluate("100/10/5"), Ok(Number::Integer(2)));
}

#[test]
fn integer_collapse() {
    init();
    assert_eq!(evaluate("5/2"), Ok(Number::Float(2.5)));
    assert_eq!(evaluate("4/2"), Ok(Number::Integer(2)));
    assert_eq!(evaluate("4/2").unwrap().to_string(), "2");
    assert_eq!(evaluate("0.5+0.5"), Ok(Number::Integer(1)));
    assert_eq!(evaluate("1.5e1"), Ok(Number::Integer(15)));
    assert_eq!(evaluate_f64("4/2"), Ok(2.0));
}

#[test]
fn unary_minus() {
    init();
    assert_eq!(evaluate("-5+3"), Ok(Number::Integer(-2)));
    assert_eq!(evaluate("-(2+3)"), Ok(Number::Integer(-5)));
    assert_eq!(evaluate("4*-2"), Ok(Number::Integer(-8)));
}

#[test]
fn division_glyph() {
    init();
    assert_eq!(evaluate("9÷3"), Ok(Number::Integer(3)));
}

#[test]
fn unbalanced_brackets() {
    init();
    assert!(matches!(evaluate("(2+3"), Err(ParserError::UnexpectedLexeme { .. })));
    assert!(matches!(evaluate("2+3)"), Err(ParserError::UnexpectedLexeme { .. })));
}

#[test]
fn unexpected_character() {
    init();
    assert_eq!(evaluate("2&3"), Err(ParserError::UnexpectedCharacter { character: '&', position: 1 }));
    assert_eq!(evaluate("2 x 3"), Err(ParserError::UnexpectedCharacter { character: 'x', position: 2 }));
}

#[test]
fn lenient_literals_fail_on_conversion() {
    init();
    assert!(tokenize("..5").is_ok());

    for input in ["..5", "1.2.3", "1e2e3", "e", "1e-5"] {
        let result = evaluate(input);
        assert!(
            matches!(result, Err(ParserError::InvalidNumericLiteral { .. })),
            "{input} -> {result:?}"
        );
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    init();
    let inputs = ["", "2+3*4", "3(4-1)", "5/2", "1/0", "-(1.25e2 - 7)(3)"];

    for input in inputs {
        assert_eq!(evaluate(input).map(|n| n.to_string()), evaluate(input).map(|n| n.to_string()));
    }
}

#[test]
fn evaluator_is_shareable_between_threads() {
    init();
    let evaluator = Evaluator::builder().max_depth(8).build().unwrap();

    let handles: Vec<_> = (0..4i64)
        .map(|n| std::thread::spawn(move || evaluator.evaluate(&format!("{n}({n} + 1)"))))
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let n = n as i64;
        assert_eq!(handle.join().unwrap(), Ok(Number::Integer(n * (n + 1))));
    }
}

#[test]
fn errors_convert_into_crate_error() {
    init();
    let err: Error = evaluate("(").unwrap_err().into();

    assert!(matches!(err, Error::ParserError(ParserError::UnexpectedLexeme { .. })));
    assert_eq!(err.to_string(), "Parser error - Unexpected lexeme end of input at position 2");
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    init();
    let n = 100_000;
    let input = format!("{}1{}", "(".repeat(n), ")".repeat(n));

    assert_eq!(evaluate(&input), Err(ParserError::NestingTooDeep { limit: DEFAULT_MAX_DEPTH }));
}

#[test]
fn tokenize_ends_with_end() {
    init();
    let lexemes = tokenize("1 + 2").unwrap();
    assert_eq!(lexemes.last().map(|l| l.kind()), Some(LexemeKind::End));
}
