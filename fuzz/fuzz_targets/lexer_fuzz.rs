#![no_main]
use libfuzzer_sys::fuzz_target;
use statelex::{Action, Lexer, LexerConfig, StateKind};

fn lexer() -> Lexer {
    Lexer::define(LexerConfig::default(), |rules| {
        rules
            .tokens(["WORD", "NUMBER", "OP"])
            .states([("comment", StateKind::Exclusive)])
            .rule("WORD", r"\w+")
            .rule("NUMBER", "[0-9]+")
            .rule("OP", r"[-+*/=()]")
            .rule_with("comment", "<!--", |lexer, _| {
                lexer.push_state("comment")?;
                Ok(Action::Suppress)
            })
            .rule_with("comment_end", "-->", |lexer, _| {
                lexer.pop_state()?;
                Ok(Action::Suppress)
            })
            .rule_with("newline", r"\n+", |lexer, token| {
                lexer.advance_line(token.text().map_or(0, str::len));
                Ok(Action::Suppress)
            })
            .ignore(" \t")
            .ignore_in("comment", "")
            .error(|_, token| Ok(Action::Emit(token)))
            .error_in("comment", |_, _| Ok(Action::Suppress))
    })
    .unwrap()
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let mut lexer = lexer();
    let tokens = lexer.tokenize(input).unwrap();
    for pair in tokens.windows(2) {
        assert!((pair[0].line(), pair[0].column()) < (pair[1].line(), pair[1].column()));
    }

    // Recovery always consumes input, so scanning the same text twice agrees.
    lexer.rewind();
    assert_eq!(lexer.tokenize(input).unwrap(), tokens);
});
