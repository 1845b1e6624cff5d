//! Lexing and rule grouping for BNF-style grammar specifications.
//!
//! A grammar is a set of lines of the form
//!
//! ```text
//! ; a comment
//! <rule-name> ::= "literal" | <other-rule> <digit>
//! ```
//!
//! [`Lexer`] turns those lines into a flat list of [`Token`]s, and
//! [`RuleTable`] groups the tokens into named rules and their alternatives.

mod config;
mod error;
mod lexer;
mod parser;
pub mod reader;
mod rules;
mod token;

pub use config::{Config, DuplicatePolicy, DEFAULT_GRAMMAR_NAME};
pub use error::{Error, Reason, Result, RuleTableError, SyntaxViolation};
pub use lexer::{lex, Lexer};
pub use reader::Specification;
pub use rules::{definitions, Rule, RuleTable, Term};
pub use token::{BuiltinToken, Literal, SpecialChar, Token, TokenKind, UnknownBuiltin};

/// Lex and group a grammar using the default configuration.
pub fn parse_grammar(name: &str, spec: impl Into<Specification>) -> Result<RuleTable> {
    let config = Config::new(name);
    let tokens = Lexer::with_config(config.clone(), spec).lex()?;
    Ok(RuleTable::build(&tokens, &config)?)
}
