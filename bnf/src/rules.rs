use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::mem;
use std::str::FromStr;

use crate::config::{Config, DuplicatePolicy};
use crate::error::{Error, RuleTableError};
use crate::lexer::Lexer;
use crate::token::{quote, BuiltinToken, Literal, Token};

/// One element of an alternative.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub enum Term {
    Literal(String),
    Name(String),
    Builtin(BuiltinToken),
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Literal(s) => write!(f, "{}", quote(s)),
            Term::Name(name) => write!(f, "<{}>", name),
            Term::Builtin(b) => write!(f, "{}", b),
        }
    }
}

/// A named production made of one or more alternatives. Each alternative
/// holds at least one term; the empty string is spelled as an empty literal.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub alternatives: Vec<Vec<Term>>,
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}> ::=", self.name)?;
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " |")?;
            }
            for term in alternative {
                write!(f, " {}", term)?;
            }
        }
        Ok(())
    }
}

/// Group a token stream into one rule per definition, in order. A name
/// defined twice shows up twice.
pub fn definitions(tokens: &[Token]) -> Result<Vec<Rule>, RuleTableError> {
    let mut rules = Vec::new();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        match token {
            // Blank lines and kept comments sit between rules.
            t if t.is_eol() => continue,
            Token::Comment(_) => continue,
            Token::Name(name) => {
                match iter.next() {
                    Some(t) if t.is_assignment() => (),
                    Some(t) => return Err(RuleTableError::UnexpectedToken(t.clone())),
                    None => return Err(RuleTableError::Unterminated(name.clone())),
                }
                rules.push(rule_body(name, &mut iter)?);
            }
            other => return Err(RuleTableError::UnexpectedToken(other.clone())),
        }
    }

    Ok(rules)
}

/// Collect alternatives up to the end of line terminating the rule.
fn rule_body<'a, I>(name: &str, iter: &mut I) -> Result<Rule, RuleTableError>
where
    I: Iterator<Item = &'a Token>,
{
    let mut alternatives = Vec::new();
    let mut current = Vec::new();

    loop {
        match iter.next() {
            None => return Err(RuleTableError::Unterminated(name.to_owned())),
            Some(t) if t.is_eol() => break,
            Some(Token::Separator(_)) => {
                if current.is_empty() {
                    return Err(RuleTableError::EmptyAlternative(name.to_owned()));
                }
                alternatives.push(mem::take(&mut current));
            }
            Some(Token::Literal(Literal::Text(s))) => current.push(Term::Literal(s.clone())),
            Some(Token::Name(n)) => current.push(Term::Name(n.clone())),
            Some(Token::Builtin(b)) => current.push(Term::Builtin(*b)),
            Some(other) => return Err(RuleTableError::UnexpectedToken(other.clone())),
        }
    }

    if current.is_empty() {
        return Err(if alternatives.is_empty() {
            RuleTableError::EmptyRule(name.to_owned())
        } else {
            RuleTableError::EmptyAlternative(name.to_owned())
        });
    }
    alternatives.push(current);

    Ok(Rule {
        name: name.to_owned(),
        alternatives,
    })
}

/// Rules keyed by name, kept in declaration order.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Build a table from a lexed grammar, resolving repeated definitions
    /// with the configured policy.
    pub fn build(tokens: &[Token], config: &Config) -> Result<Self, RuleTableError> {
        let mut table = RuleTable::default();

        for rule in definitions(tokens)? {
            match table.index.get(&rule.name) {
                Some(&idx) => match config.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(RuleTableError::Redefinition {
                            grammar_name: config.grammar_name.clone(),
                            name: rule.name,
                        })
                    }
                    DuplicatePolicy::Merge => {
                        warn!(
                            "grammar [{}]: merging repeated definition of <{}>",
                            config.grammar_name, rule.name
                        );
                        table.rules[idx].alternatives.extend(rule.alternatives);
                    }
                },
                None => {
                    table.index.insert(rule.name.clone(), table.rules.len());
                    table.rules.push(rule);
                }
            }
        }

        debug!(
            "built rule table for [{}] with {} rules",
            config.grammar_name,
            table.rules.len()
        );
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&idx| &self.rules[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names referenced by some rule that are neither defined nor builtin, in
    /// order of first reference.
    pub fn unresolved(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();
        for term in self.rules.iter().flat_map(|r| r.alternatives.iter().flatten()) {
            if let Term::Name(name) = term {
                if !self.contains(name) && seen.insert(name.as_str()) {
                    missing.push(name.as_str());
                }
            }
        }
        missing
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = Config::default();
        let tokens = Lexer::with_config(config.clone(), s).lex()?;
        Ok(RuleTable::build(&tokens, &config)?)
    }
}
