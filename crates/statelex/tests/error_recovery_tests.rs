//! Tests for error handlers and fatal scan errors

use pretty_assertions::assert_eq;
use statelex::{
    Action, ERROR_TOKEN, LexError, Lexer, LexerConfig, ScanError, StateKind, Token, TokenValue,
};

fn identifiers(with_handler: bool) -> Lexer {
    Lexer::define(LexerConfig::default(), |rules| {
        let rules = rules
            .tokens(["IDENTIFIER"])
            .rule("IDENTIFIER", "a|b")
            .ignore(" \t");
        if with_handler {
            rules.error(|_, token| Ok(Action::Emit(token)))
        } else {
            rules
        }
    })
    .unwrap()
}

fn tuples(tokens: &[Token]) -> Vec<(String, String, usize, usize)> {
    tokens
        .iter()
        .map(|token| {
            (
                token.name.to_string(),
                token.value.to_string(),
                token.line(),
                token.column(),
            )
        })
        .collect()
}

fn tuple(name: &str, value: &str, line: usize, column: usize) -> (String, String, usize, usize) {
    (name.to_string(), value.to_string(), line, column)
}

#[test]
fn test_error_handler_emits_error_tokens() {
    let mut lexer = identifiers(true);
    let tokens = lexer.tokenize("a(b)a").unwrap();

    assert_eq!(
        tuples(&tokens),
        vec![
            tuple("IDENTIFIER", "a", 1, 1),
            tuple("error", "(", 1, 2),
            tuple("IDENTIFIER", "b", 1, 3),
            tuple("error", ")", 1, 4),
            tuple("IDENTIFIER", "a", 1, 5),
        ]
    );
    assert!(tokens[1].is_error());
    assert_eq!(tokens[1].name, ERROR_TOKEN);
}

#[test]
fn test_missing_error_handler_is_fatal() {
    let mut lexer = identifiers(false);
    let err = lexer.tokenize("a(b)a").unwrap_err();

    assert_eq!(err, LexError::Scan(ScanError::illegal_character('(', 1, 2)));
    assert_eq!(err.to_string(), "Illegal character `(` at line 1, column 2");
}

#[test]
fn test_tokens_before_error_are_yielded() {
    let mut lexer = identifiers(false);
    let results: Vec<_> = lexer.scan("a b(").collect();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(&results[2], Err(err) if err.is_scan_error()));
}

#[test]
fn test_error_handler_can_skip_ahead() {
    let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
        rules
            .tokens(["WORD"])
            .rule("WORD", "[a-z]+")
            .ignore(" ")
            .error(|lexer, token| {
                // Drop the rest of a `#` comment
                if token.text() == Some("#") {
                    lexer.skip(2);
                    return Ok(Action::Suppress);
                }
                Ok(Action::Emit(token))
            })
    })
    .unwrap();

    let tokens = lexer.tokenize("ab #xy cd").unwrap();
    assert_eq!(
        tuples(&tokens),
        vec![tuple("WORD", "ab", 1, 1), tuple("WORD", "cd", 1, 8)]
    );
}

#[test]
fn test_error_handler_can_rewrite_token() {
    let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
        rules
            .tokens(["DIGIT", "JUNK"])
            .rule("DIGIT", "[0-9]")
            .error(|_, mut token| {
                token.name = "JUNK".into();
                token.value = TokenValue::Char(token.text().and_then(|t| t.chars().next()).unwrap_or('?'));
                Ok(Action::Emit(token))
            })
    })
    .unwrap();

    let tokens = lexer.tokenize("1x2").unwrap();
    assert_eq!(tokens[1].to_tuple(), ("JUNK", TokenValue::Char('x'), 1, 2));
    assert_eq!(tokens[2].column(), 3);
}

#[test]
fn test_error_handler_failure_aborts() {
    let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
        rules
            .tokens(["WORD"])
            .rule("WORD", "[a-z]+")
            .error(|_, token| {
                Err(LexError::action(format!(
                    "unexpected {} at {}:{}",
                    token.value,
                    token.line(),
                    token.column()
                )))
            })
    })
    .unwrap();

    let err = lexer.tokenize("ab!").unwrap_err();
    assert_eq!(err, LexError::action("unexpected ! at 1:3"));
}

#[test]
fn test_unhandled_entry_is_still_fatal() {
    let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
        rules
            .tokens(["WORD", "QUOTE"])
            .states([("quoted", StateKind::Exclusive)])
            .rule_with("QUOTE", "'", |lexer, token| {
                lexer.begin("quoted")?;
                Ok(Action::Emit(token))
            })
            .rule("quoted_WORD", "[a-z]+")
            .ignore_in("quoted", " ")
            .error_unhandled_in("quoted")
    })
    .unwrap();

    assert!(lexer.lint_report().is_clean());
    let err = lexer.tokenize("'abc 1").unwrap_err();
    assert_eq!(err.to_string(), "Illegal character `1` at line 1, column 6");
}

#[test]
fn test_error_in_multiple_states() {
    let mut lexer = Lexer::define(LexerConfig::default(), |rules| {
        rules
            .tokens(["A", "B"])
            .states([("left", StateKind::Exclusive), ("right", StateKind::Exclusive)])
            .rule_with("A", "a", |lexer, token| {
                lexer.begin("left")?;
                Ok(Action::Emit(token))
            })
            .rule_with("left_right_B", "b", |lexer, token| {
                let next = if lexer.current_state() == "left" { "right" } else { "left" };
                lexer.begin(next)?;
                Ok(Action::Emit(token))
            })
            .ignore_in("left_right", "")
            .error_in("left_right", |_, _| Ok(Action::Suppress))
    })
    .unwrap();

    let tokens = lexer.tokenize("a?b?b").unwrap();
    let names: Vec<&str> = tokens.iter().map(|token| token.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "B"]);
    assert_eq!(lexer.current_state(), "left");
}
