use log::{debug, trace};
use std::mem;

use crate::config::Config;
use crate::error::{Reason, SyntaxViolation};
use crate::parser;
use crate::reader::Specification;
use crate::token::{BuiltinToken, Literal, SpecialChar, Token};

/// Where the body scanner is relative to quotes and brackets.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum ScanState {
    Outside,
    /// Inside a literal opened with the given quote character.
    Quoted(char),
    /// Inside a `<...>` reference.
    Reference,
}

/// Lexes a single grammar into a flat list of tokens.
///
/// A lexer holds only the grammar's lines and its configuration, lexing the
/// same lexer twice yields the same tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    config: Config,
    lines: Vec<String>,
}

impl Lexer {
    /// Create a lexer using the default configuration under a given grammar
    /// name.
    pub fn new(name: impl Into<String>, spec: impl Into<Specification>) -> Self {
        Self::with_config(Config::new(name), spec)
    }

    pub fn with_config(config: Config, spec: impl Into<Specification>) -> Self {
        Lexer {
            config,
            lines: spec.into().into_lines(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.grammar_name
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lex every line, stopping at the first syntax violation.
    ///
    /// Comment lines produce nothing (or a single comment token when
    /// configured to keep them), blank lines produce an end of line literal,
    /// and every rule definition is terminated with an end of line literal.
    pub fn lex(&self) -> Result<Vec<Token>, SyntaxViolation> {
        debug!(
            "lexing grammar [{}] with {} lines",
            self.name(),
            self.lines.len()
        );

        let mut tokens = Vec::new();
        for (line_number, line) in self.lines.iter().enumerate() {
            let line = line.trim();
            if let Some(comment) = line.strip_prefix(SpecialChar::Comment.as_str()) {
                trace!("line {}: comment", line_number);
                if self.config.keep_comments {
                    tokens.push(Token::Comment(comment.trim().to_owned()));
                }
            } else if line.starts_with(SpecialChar::OpenBracket.as_str()) {
                trace!("line {}: rule definition", line_number);
                self.lex_rule(line_number, line, &mut tokens)?;
            } else if line.is_empty() {
                trace!("line {}: blank", line_number);
                tokens.push(Token::special(SpecialChar::Eol));
            } else {
                return Err(self.violation(line_number, Reason::NoRule, line));
            }
        }

        debug!("lexed grammar [{}] into {} tokens", self.name(), tokens.len());
        Ok(tokens)
    }

    /// Lex a line already known to start with an open bracket.
    fn lex_rule(
        &self,
        line_number: usize,
        line: &str,
        tokens: &mut Vec<Token>,
    ) -> Result<(), SyntaxViolation> {
        let rest = &line[SpecialChar::OpenBracket.as_str().len()..];
        let close = rest
            .find(SpecialChar::CloseBracket.as_str())
            .ok_or_else(|| self.violation(line_number, Reason::MissingRuleBracket, line))?;

        let name = &rest[..close];
        if !parser::is_rule_name(name) {
            return Err(self.violation(line_number, Reason::InvalidRuleName, name));
        }

        let after = &rest[close + SpecialChar::CloseBracket.as_str().len()..];
        let body = match parser::assignment(after) {
            Ok((body, _)) => body,
            Err(_) => {
                return Err(self.violation(line_number, Reason::MissingAssignment, after.trim()))
            }
        };

        tokens.push(Token::Name(name.to_owned()));
        tokens.push(Token::special(SpecialChar::Assignment));
        self.lex_body(line_number, body, tokens)?;
        tokens.push(Token::special(SpecialChar::Eol));

        Ok(())
    }

    /// Scan the alternatives of a rule one character at a time.
    fn lex_body(
        &self,
        line_number: usize,
        body: &str,
        tokens: &mut Vec<Token>,
    ) -> Result<(), SyntaxViolation> {
        let mut state = ScanState::Outside;
        let mut running = String::new();

        for c in body.chars() {
            match state {
                ScanState::Outside => match c {
                    '\'' | '"' => state = ScanState::Quoted(c),
                    '<' => state = ScanState::Reference,
                    '|' => tokens.push(Token::Separator(c)),
                    c if c.is_whitespace() => {}
                    c => {
                        return Err(self.violation(
                            line_number,
                            Reason::UnexpectedCharacter,
                            &c.to_string(),
                        ))
                    }
                },
                ScanState::Quoted(quote) if c == quote => {
                    tokens.push(Token::Literal(Literal::Text(mem::take(&mut running))));
                    state = ScanState::Outside;
                }
                ScanState::Reference if c == '>' => {
                    let name = mem::take(&mut running);
                    tokens.push(self.reference(line_number, name)?);
                    state = ScanState::Outside;
                }
                _ => running.push(c),
            }
        }

        match state {
            ScanState::Outside => Ok(()),
            ScanState::Quoted(quote) => Err(self.violation(
                line_number,
                Reason::UnexpectedCharacter,
                &format!("{}{}", quote, running),
            )),
            ScanState::Reference => Err(self.violation(
                line_number,
                Reason::MissingRuleBracket,
                &format!("<{}", running),
            )),
        }
    }

    /// Turn a bracketed reference into a name token, or a builtin token if it
    /// names one.
    fn reference(&self, line_number: usize, name: String) -> Result<Token, SyntaxViolation> {
        if !parser::is_rule_name(&name) {
            return Err(self.violation(line_number, Reason::InvalidRuleName, &name));
        }
        Ok(match name.parse::<BuiltinToken>() {
            Ok(builtin) => Token::Builtin(builtin),
            Err(_) => Token::Name(name),
        })
    }

    fn violation(
        &self,
        line_number: usize,
        reason: Reason,
        invalid_value: &str,
    ) -> SyntaxViolation {
        SyntaxViolation {
            line_number,
            grammar_name: self.config.grammar_name.clone(),
            reason,
            invalid_value: invalid_value.to_owned(),
        }
    }
}

/// Lex a grammar with the default configuration.
pub fn lex(name: &str, spec: impl Into<Specification>) -> Result<Vec<Token>, SyntaxViolation> {
    Lexer::new(name, spec).lex()
}
