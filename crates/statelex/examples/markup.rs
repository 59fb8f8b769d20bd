//! Markup lexer example
//!
//! Shows lexical states: tags switch into an exclusive `tag` state and HTML
//! comments are swallowed by an exclusive `comment` state.

use statelex::{Action, Lexer, LexerConfig, StateKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut lexer = Lexer::define(LexerConfig::from_env(), |rules| {
        rules
            .tokens(["TEXT", "LANGLE", "LANGLESLASH", "RANGLE", "NAME", "EQUALS", "STRING"])
            .states([
                ("tag", StateKind::Exclusive),
                ("comment", StateKind::Exclusive),
            ])
            .rule("TEXT", r"[^<\s]+")
            .rule_with("LANGLE", "<", |lexer, token| {
                lexer.push_state("tag")?;
                Ok(Action::Emit(token))
            })
            .rule_with("LANGLESLASH", "</", |lexer, token| {
                lexer.push_state("tag")?;
                Ok(Action::Emit(token))
            })
            .rule_with("comment", "<!--", |lexer, _| {
                lexer.push_state("comment")?;
                Ok(Action::Suppress)
            })
            .rule_with("newline", r"\n", |lexer, _| {
                lexer.advance_line(1);
                Ok(Action::Suppress)
            })
            .rule("tag_NAME", "[a-zA-Z][a-zA-Z0-9-]*")
            .rule("tag_EQUALS", "=")
            .rule("tag_STRING", r#""[^"]*""#)
            .rule_with("tag_RANGLE", ">", |lexer, token| {
                lexer.pop_state()?;
                Ok(Action::Emit(token))
            })
            .rule_with("comment_end", "-->", |lexer, _| {
                lexer.pop_state()?;
                Ok(Action::Suppress)
            })
            .rule_with("comment_text", "[^-\n]+|-", |_, _| Ok(Action::Suppress))
            .rule_with("comment_newline", r"\n", |lexer, _| {
                lexer.advance_line(1);
                Ok(Action::Suppress)
            })
            .ignore(" \t")
            .ignore_in("tag", " \t")
            .ignore_in("comment", "")
            .error_unhandled_in("tag_comment")
    })?;

    let input = "<p class=\"intro\">Hello <!-- not\nshown --> world</p>\n";
    lexer.stream_tokens(input, |token| println!("{token}"))?;

    Ok(())
}
