//! Arithmetic expression lexer example
//!
//! This example demonstrates how to:
//! 1. Declare tokens and rules with a builder
//! 2. Convert matched text into typed values with actions
//! 3. Track line numbers with a `newline` rule
//! 4. Recover from unexpected characters
//!
//! Run with `STATELEX_DEBUG=1` to trace every lexeme tried.

use statelex::{Action, Lexer, LexerBuilder, LexerConfig, TokenValue};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Arithmetic Lexer Example ===\n");

    // Step 1: Declare the rules
    println!("1. Building rules...");
    let rules = LexerBuilder::new()
        .tokens([
            "NUMBER",
            "PLUS",
            "MINUS",
            "TIMES",
            "DIVIDE",
            "LPAREN",
            "RPAREN",
            "EQUALS",
            "IDENTIFIER",
        ])
        .rule("PLUS", r"\+")
        .rule("MINUS", r"\-")
        .rule("TIMES", r"\*")
        .rule("DIVIDE", "/")
        .rule("LPAREN", r"\(")
        .rule("RPAREN", r"\)")
        .rule("EQUALS", "=")
        .rule("IDENTIFIER", r"[_$a-zA-Z][_$0-9a-zA-Z]*")
        .rule_with("NUMBER", "[0-9]+", |_, mut token| {
            if let Some(value) = token.text().and_then(|text| text.parse().ok()) {
                token.value = TokenValue::Integer(value);
            }
            Ok(Action::Emit(token))
        })
        .rule_with("newline", r"\n+", |lexer, token| {
            lexer.advance_line(token.text().map_or(0, str::len));
            Ok(Action::Suppress)
        })
        .ignore(" \t")
        .error(|_, token| {
            warn!("skipping {}", token);
            Ok(Action::Suppress)
        })
        .build()?;
    println!("   ✓ {} rules compiled\n", rules.rule_count());

    // Step 2: Create the engine
    let mut lexer = Lexer::new(rules, LexerConfig::from_env())?;

    // Step 3: Tokenize
    let input = "x = 5 + 44 * (s - t)\ny = x % 2\n";
    println!("2. Tokenizing:\n{input}");
    for token in lexer.lex(input) {
        let token = token?;
        let (name, value, line, column) = token.to_tuple();
        println!("   {line}:{column:<3} {name:<10} {value}");
    }

    Ok(())
}
