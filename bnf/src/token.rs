use std::fmt::{self, Display};
use std::str::FromStr;

/// Punctuation with a fixed meaning in a grammar.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum SpecialChar {
    OpenBracket,
    CloseBracket,
    SingleQuote,
    DoubleQuote,
    Separator,
    Hyphen,
    Comment,
    Assignment,
    /// Terminates a rule definition (or marks a blank line) in the token
    /// stream.
    Eol,
}

impl SpecialChar {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialChar::OpenBracket => "<",
            SpecialChar::CloseBracket => ">",
            SpecialChar::SingleQuote => "'",
            SpecialChar::DoubleQuote => "\"",
            SpecialChar::Separator => "|",
            SpecialChar::Hyphen => "-",
            SpecialChar::Comment => ";",
            SpecialChar::Assignment => "::=",
            SpecialChar::Eol => "\r\n",
        }
    }
}

impl Display for SpecialChar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Character classes that can be referenced without being defined.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BuiltinToken {
    Digit,
    Letter,
    UppercaseLetter,
    LowercaseLetter,
    EndOfLine,
    Word,
    Whitespace,
    Symbol,
}

impl BuiltinToken {
    pub const ALL: [BuiltinToken; 8] = [
        BuiltinToken::Digit,
        BuiltinToken::Letter,
        BuiltinToken::UppercaseLetter,
        BuiltinToken::LowercaseLetter,
        BuiltinToken::EndOfLine,
        BuiltinToken::Word,
        BuiltinToken::Whitespace,
        BuiltinToken::Symbol,
    ];

    /// The name as written between brackets.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinToken::Digit => "digit",
            BuiltinToken::Letter => "letter",
            BuiltinToken::UppercaseLetter => "uppercase-letter",
            BuiltinToken::LowercaseLetter => "lowercase-letter",
            BuiltinToken::EndOfLine => "EOL",
            BuiltinToken::Word => "word",
            BuiltinToken::Whitespace => "whitespace",
            BuiltinToken::Symbol => "symbol",
        }
    }

    /// The builtin spelled as a rule reference, e.g. `<digit>`.
    pub fn as_rule_name(&self) -> String {
        format!("<{}>", self.as_str())
    }

    /// Check if a single character belongs to this builtin's class.
    pub fn matches(&self, c: char) -> bool {
        match self {
            BuiltinToken::Digit => c.is_ascii_digit(),
            BuiltinToken::Letter => c.is_ascii_alphabetic(),
            BuiltinToken::UppercaseLetter => c.is_ascii_uppercase(),
            BuiltinToken::LowercaseLetter => c.is_ascii_lowercase(),
            BuiltinToken::EndOfLine => c == '\n' || c == '\r',
            BuiltinToken::Word => c.is_alphanumeric() || c == '_',
            BuiltinToken::Whitespace => c.is_whitespace(),
            BuiltinToken::Symbol => c.is_ascii_punctuation() || c == ' ',
        }
    }
}

impl Display for BuiltinToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_rule_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBuiltin(pub String);

impl Display for UnknownBuiltin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "not a builtin: {}", self.0)
    }
}

impl std::error::Error for UnknownBuiltin {}

impl FromStr for BuiltinToken {
    type Err = UnknownBuiltin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinToken::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownBuiltin(s.to_owned()))
    }
}

/// Value carried by a literal token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Text taken verbatim from between quotes.
    Text(String),
    /// A structural marker (assignment or end of line).
    Special(SpecialChar),
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_owned())
    }
}

impl From<SpecialChar> for Literal {
    fn from(c: SpecialChar) -> Self {
        Literal::Special(c)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TokenKind {
    Name,
    Literal,
    Separator,
    Comment,
    Builtin,
}

/// A single lexed token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Name of a rule, either the one being defined or a reference.
    Name(String),
    Literal(Literal),
    /// The alternation bar.
    Separator(char),
    Comment(String),
    Builtin(BuiltinToken),
}

impl Token {
    pub fn name(s: &str) -> Self {
        Token::Name(s.to_owned())
    }

    pub fn literal(s: &str) -> Self {
        Token::Literal(s.into())
    }

    pub fn special(c: SpecialChar) -> Self {
        Token::Literal(c.into())
    }

    pub fn separator() -> Self {
        Token::Separator('|')
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Name(_) => TokenKind::Name,
            Token::Literal(_) => TokenKind::Literal,
            Token::Separator(_) => TokenKind::Separator,
            Token::Comment(_) => TokenKind::Comment,
            Token::Builtin(_) => TokenKind::Builtin,
        }
    }

    pub fn is_eol(&self) -> bool {
        *self == Token::Literal(Literal::Special(SpecialChar::Eol))
    }

    pub fn is_assignment(&self) -> bool {
        *self == Token::Literal(Literal::Special(SpecialChar::Assignment))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Name(name) => write!(f, "<{}>", name),
            Token::Literal(Literal::Text(text)) => write!(f, "{}", quote(text)),
            Token::Literal(Literal::Special(SpecialChar::Eol)) => write!(f, "EOL"),
            Token::Literal(Literal::Special(c)) => write!(f, "{}", c),
            Token::Separator(c) => write!(f, "{}", c),
            Token::Comment(text) => write!(f, "; {}", text),
            Token::Builtin(b) => write!(f, "{}", b),
        }
    }
}

/// Wrap text in whichever quote it doesn't contain, preferring double quotes.
pub(crate) fn quote(text: &str) -> String {
    if text.contains('"') && !text.contains('\'') {
        format!("'{}'", text)
    } else {
        format!("\"{}\"", text)
    }
}
