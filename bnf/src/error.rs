use std::fmt::{self, Display};
use std::io;

use thiserror::Error;

use crate::token::Token;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a grammar line was rejected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Reason {
    MissingRuleBracket,
    InvalidRuleName,
    MissingAssignment,
    UnexpectedCharacter,
    NoRule,
}

impl Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Reason::MissingRuleBracket => "missing close-bracket in rule name",
            Reason::InvalidRuleName => "invalid rule name",
            Reason::MissingAssignment => "missing assignment",
            Reason::UnexpectedCharacter => "unexpected character",
            Reason::NoRule => "unknown value",
        };
        write!(f, "{}", s)
    }
}

/// Invalid syntax found while lexing a grammar. Line numbers start at 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Specification [{grammar_name}] has invalid syntax on line {line_number} <{reason}>: {invalid_value}"
)]
pub struct SyntaxViolation {
    pub line_number: usize,
    pub grammar_name: String,
    pub reason: Reason,
    pub invalid_value: String,
}

/// Errors grouping a token stream into rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("Specification [{grammar_name}] redefines rule <{name}>")]
    Redefinition { grammar_name: String, name: String },

    #[error("rule <{0}> has no alternatives")]
    EmptyRule(String),

    #[error("rule <{0}> has an empty alternative")]
    EmptyAlternative(String),

    #[error("unexpected token {0}")]
    UnexpectedToken(Token),

    #[error("rule <{0}> is missing its end of line")]
    Unterminated(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxViolation),

    #[error(transparent)]
    RuleTable(#[from] RuleTableError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
