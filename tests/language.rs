use std::fs;

use calx::{
    Options,
    error::EvaluationError,
    evaluate, evaluate_with,
    interpreter::parser::core::{MAX_HEIGHT, MAX_NESTING},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_calx_lines(&content) {
            count += 1;
            let (source, expected) = match line.split_once("=>") {
                Some((source, expected)) => (source.trim(), Some(expected.trim())),
                None => (line.trim(), None),
            };

            let value = evaluate(source).unwrap_or_else(|e| {
                                            panic!("Example {source:?} in {path:?} failed:\nError: {e}")
                                        });

            if let Some(expected) = expected {
                let expected: f64 = expected.parse()
                                            .unwrap_or_else(|_| panic!("Bad expected value {expected:?} in {path:?}"));
                assert!(value == expected || (value.is_nan() && expected.is_nan()),
                        "Example {source:?} in {path:?} gave {value}, expected {expected}");
            }
        }
    }

    assert!(count > 0, "No calx examples found in book/src");
}

fn extract_calx_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calx") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?} evaluated to {value}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_invalid_character(src: &str) {
    match evaluate(src) {
        Err(EvaluationError::InvalidCharacter { .. }) => {},
        other => panic!("Expected an invalid character error for {src:?}, got {other:?}"),
    }
}

fn assert_unexpected_token(src: &str) {
    match evaluate(src) {
        Err(EvaluationError::UnexpectedToken { .. }) => {},
        other => panic!("Expected an unexpected token error for {src:?}, got {other:?}"),
    }
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("8 - 6 / 2", 5.0);
    assert_value("-2 * 3", -6.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 * 3 / 4", 1.5);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn unary_chaining() {
    assert_value("- -5", 5.0);
    assert_value("-(2+3)", -5.0);
    assert_value("- - - 5", -5.0);
    assert_value("+-+3", -3.0);
    assert_value("+7", 7.0);
    assert_value("3 - -3", 6.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("1+1", 2.0);
    assert_value(" 1 + 1 ", 2.0);
    assert_value("   (  4 )*(2)   ", 8.0);
}

#[test]
fn division_is_real_division() {
    assert_value("7 / 2", 3.5);
    assert_value("1 / 4", 0.25);
}

#[test]
fn division_by_zero_follows_float_rules() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
    assert!(evaluate("0 / 0 * 1").unwrap().is_nan());
}

#[test]
fn integer_literals() {
    assert_value("0", 0.0);
    assert_value("007", 7.0);
    assert_value("1234567890", 1_234_567_890.0);
    assert_value("99999999999999999999", 1e20);
}

#[test]
fn invalid_characters() {
    assert_invalid_character("2 & 3");
    assert_invalid_character("1.5");
    assert_invalid_character("x");
    assert_invalid_character("1\t+ 1");
    assert_invalid_character("1 + 1\n");
    assert_invalid_character("2 ^ 3");
}

#[test]
fn invalid_character_reports_character_and_position() {
    assert_eq!(evaluate("12 + é"),
               Err(EvaluationError::InvalidCharacter { character: 'é',
                                                       position:  5, }));
}

#[test]
fn malformed_grammar() {
    assert_unexpected_token("(1 + 2");
    assert_unexpected_token("1 +");
    assert_unexpected_token("");
    assert_unexpected_token("   ");
    assert_unexpected_token("()");
    assert_unexpected_token("* 2");
    assert_unexpected_token("2 * / 3");
    assert_unexpected_token("1 2");
}

#[test]
fn unexpected_token_describes_the_mismatch() {
    assert_eq!(evaluate("(1 + 2"),
               Err(EvaluationError::UnexpectedToken { expected: "')'".to_string(),
                                                      found:    "end of input".to_string(),
                                                      position: 6, }));
    assert_eq!(evaluate("1 + )"),
               Err(EvaluationError::UnexpectedToken { expected: "an operand".to_string(),
                                                      found:    "')'".to_string(),
                                                      position: 4, }));
}

#[test]
fn first_error_wins() {
    // The parser stops at the missing operand before the scanner reaches `&`.
    assert_unexpected_token("1 + ) &");
    assert_invalid_character("1 + & )");
}

#[test]
fn trailing_tokens_are_rejected_by_default() {
    assert_eq!(evaluate("1 + 1 )"),
               Err(EvaluationError::UnexpectedToken { expected: "end of input".to_string(),
                                                      found:    "')'".to_string(),
                                                      position: 6, }));
}

#[test]
fn lenient_mode_ignores_trailing_tokens() {
    let options = Options::lenient();

    assert_eq!(evaluate_with("1 + 1 )", &options), Ok(2.0));
    assert_eq!(evaluate_with("2 * 3 4 5", &options), Ok(6.0));
    assert_eq!(evaluate_with("1 + 1", &options), Ok(2.0));
}

#[test]
fn lenient_mode_still_scans_the_lookahead() {
    // The token after the expression is read as lookahead, so a bad
    // character there is still reported.
    assert!(matches!(evaluate_with("1 &", &Options::lenient()),
                     Err(EvaluationError::InvalidCharacter { position: 2, .. })));
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["2 + 3 * 4", "-(7 / 2)", "((1))", "1 +"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn error_messages() {
    assert_eq!(evaluate("2 & 3").unwrap_err().to_string(),
               "Error at position 2: Invalid character '&'.");
    assert_eq!(evaluate("1 +").unwrap_err().to_string(),
               "Error at position 3: Unexpected token: expected an operand, found end of input.");
}

fn too_deep(found: &str, position: usize) -> Result<f64, EvaluationError> {
    Err(EvaluationError::UnexpectedToken { expected: "shallower nesting".to_string(),
                                           found: found.to_string(),
                                           position })
}

fn nested_parentheses(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

fn sum_of_ones(terms: usize) -> String {
    format!("1{}", " + 1".repeat(terms - 1))
}

#[test]
fn deep_parentheses_fail_instead_of_overflowing() {
    assert_eq!(evaluate(&nested_parentheses(5_000)), too_deep("'('", MAX_NESTING));
}

#[test]
fn deep_prefixes_fail_instead_of_overflowing() {
    assert_eq!(evaluate(&format!("{}1", "-".repeat(5_000))), too_deep("'-'", MAX_NESTING));
}

#[test]
fn long_chains_fail_instead_of_overflowing() {
    assert!(matches!(evaluate(&sum_of_ones(5_000)),
                     Err(EvaluationError::UnexpectedToken { ref expected, .. }) if expected == "shallower nesting"));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    assert_value(&nested_parentheses(MAX_NESTING - 1), 1.0);
    assert_eq!(evaluate(&nested_parentheses(MAX_NESTING)),
               too_deep("integer 1", MAX_NESTING));
}

#[test]
fn chains_up_to_the_height_limit_are_accepted() {
    #[allow(clippy::cast_precision_loss)]
    let expected = MAX_HEIGHT as f64;

    assert_value(&sum_of_ones(MAX_HEIGHT), expected);
    assert!(evaluate(&sum_of_ones(MAX_HEIGHT + 1)).is_err());
}
