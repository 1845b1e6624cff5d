/// What to do when the same rule name is defined more than once.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DuplicatePolicy {
    /// Fail with a redefinition error.
    Reject,
    /// Append the later definition's alternatives to the first one.
    Merge,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Reject
    }
}

pub const DEFAULT_GRAMMAR_NAME: &str = "Extended BNF";

/// Options for lexing a grammar and building its rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label used in diagnostics.
    pub grammar_name: String,
    /// Emit a comment token for each comment line instead of dropping it.
    pub keep_comments: bool,
    pub duplicates: DuplicatePolicy,
}

impl Config {
    pub fn new(grammar_name: impl Into<String>) -> Self {
        Config {
            grammar_name: grammar_name.into(),
            ..Default::default()
        }
    }

    pub fn with_keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grammar_name: DEFAULT_GRAMMAR_NAME.to_owned(),
            keep_comments: false,
            duplicates: DuplicatePolicy::default(),
        }
    }
}
