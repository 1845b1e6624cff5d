//! Property-based tests for the grammar lexer and rule grouping.

use bnf::{definitions, lex, BuiltinToken, Token};
use proptest::prelude::*;

fn rule_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,10}"
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,5}".prop_map(|s| format!("\"{}\"", s)),
        "[a-z|<>\"]{0,5}".prop_map(|s| format!("'{}'", s)),
        rule_name_strategy().prop_map(|s| format!("<{}>", s)),
        prop::sample::select(BuiltinToken::ALL.to_vec()).prop_map(|b| b.as_rule_name()),
    ]
}

fn alternative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(term_strategy(), 1..4).prop_map(|terms| terms.join(" "))
}

/// A rule line along with its name.
fn rule_line_strategy() -> impl Strategy<Value = (String, String)> {
    (
        rule_name_strategy(),
        prop::collection::vec(alternative_strategy(), 1..4),
    )
        .prop_map(|(name, alternatives)| {
            let line = format!("<{}> ::= {}", name, alternatives.join(" | "));
            (name, line)
        })
}

/// Rule lines mixed with blank lines and comments.
fn grammar_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec(
        (rule_line_strategy(), prop::option::of("[ -~]{0,20}")),
        0..12,
    )
    .prop_map(|entries| {
        let mut names = Vec::new();
        let mut lines = Vec::new();
        for ((name, line), extra) in entries {
            names.push(name);
            lines.push(line);
            match extra {
                Some(comment) if comment.len() % 2 == 0 => lines.push(format!(";{}", comment)),
                Some(_) => lines.push(String::new()),
                None => (),
            }
        }
        (names, lines.join("\n"))
    })
}

proptest! {
    #[test]
    fn comment_only_grammars_are_empty(comments in prop::collection::vec("[ -~]{0,40}", 0..20)) {
        let spec: Vec<String> = comments.iter().map(|c| format!("  ;{}", c)).collect();
        let tokens = lex("comments", spec).unwrap();
        prop_assert!(tokens.is_empty(), "tokens: {:?}", tokens);
    }

    #[test]
    fn lexing_is_deterministic(input in "[ -~\n\t]{0,200}") {
        prop_assert_eq!(lex("any", input.as_str()), lex("any", input.as_str()));
    }

    #[test]
    fn generated_grammars_lex((_, spec) in grammar_strategy()) {
        let first = lex("generated", spec.as_str());
        prop_assert!(first.is_ok(), "spec:\n{}\nerr: {:?}", spec, first);
        prop_assert_eq!(first, lex("generated", spec.as_str()));
    }

    #[test]
    fn builtin_references_are_builtins(
        builtin in prop::sample::select(BuiltinToken::ALL.to_vec()),
        before in alternative_strategy(),
    ) {
        let spec = format!("<a> ::= {} {} | {}", before, builtin.as_rule_name(), builtin.as_rule_name());
        let tokens = lex("builtins", spec).unwrap();

        let count = tokens.iter().filter(|t| **t == Token::Builtin(builtin)).count();
        prop_assert!(count >= 2);
        prop_assert!(!tokens[1..].iter().any(|t| *t == Token::name(builtin.as_str())));
    }

    #[test]
    fn declared_names_round_trip((names, spec) in grammar_strategy()) {
        let tokens = lex("names", spec.as_str()).unwrap();
        let rules = definitions(&tokens).unwrap();
        let got: Vec<String> = rules.into_iter().map(|r| r.name).collect();
        prop_assert_eq!(got, names);
    }
}
