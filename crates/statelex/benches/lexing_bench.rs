use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use statelex::{Action, Lexer, LexerBuilder, LexerConfig, RuleSet, StateKind, TokenValue};
use std::hint::black_box;
use std::sync::Arc;

fn arithmetic_rules() -> RuleSet {
    LexerBuilder::new()
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
        .rule("IDENTIFIER", r"[_a-zA-Z][_0-9a-zA-Z]*")
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
        .build()
        .unwrap()
}

fn comment_rules() -> RuleSet {
    LexerBuilder::new()
        .tokens(["WORD"])
        .states([("comment", StateKind::Exclusive)])
        .rule("WORD", r"\w+")
        .rule_with("comment", "<!--", |lexer, _| {
            lexer.push_state("comment")?;
            Ok(Action::Suppress)
        })
        .rule_with("comment_end", "-->", |lexer, _| {
            lexer.pop_state()?;
            Ok(Action::Suppress)
        })
        .error_in("comment", |_, _| Ok(Action::Suppress))
        .ignore_in("comment", " \t\n")
        .ignore(" \t\n")
        .build()
        .unwrap()
}

fn bench_arithmetic(c: &mut Criterion) {
    let rules = Arc::new(arithmetic_rules());
    let input = "total = (alpha + 42) * beta - 7 / gamma\n".repeat(64);

    let mut group = c.benchmark_group("arithmetic");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("tokenize", |b| {
        let mut lexer = Lexer::new(Arc::clone(&rules), LexerConfig::default()).unwrap();
        b.iter(|| {
            lexer.rewind();
            black_box(lexer.tokenize(black_box(&input)).unwrap());
        });
    });
    group.bench_function("scan_count", |b| {
        let mut lexer = Lexer::new(Arc::clone(&rules), LexerConfig::default()).unwrap();
        b.iter(|| {
            lexer.rewind();
            black_box(lexer.scan(black_box(&input)).count());
        });
    });
    group.finish();
}

fn bench_states(c: &mut Criterion) {
    let rules = Arc::new(comment_rules());
    let input = "hello <!-- a rather long comment --> world\n".repeat(64);

    c.bench_function("exclusive_state_tokenize", |b| {
        let mut lexer = Lexer::new(Arc::clone(&rules), LexerConfig::default()).unwrap();
        b.iter(|| {
            lexer.rewind();
            black_box(lexer.tokenize(black_box(&input)).unwrap());
        });
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_rule_set", |b| {
        b.iter(|| black_box(arithmetic_rules()));
    });
}

criterion_group!(benches, bench_arithmetic, bench_states, bench_build);
criterion_main!(benches);
