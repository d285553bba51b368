/// Default number of distinct variables a program may declare.
pub const DEFAULT_MAX_VARIABLES: usize = 100;

/// Default maximum length of an identifier or number literal.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 99;

/// Resource bounds for a single program run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_variables: usize,
    pub max_lexeme_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
        }
    }
}
