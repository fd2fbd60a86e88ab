//! The token table.
//!
//! A token is a named value substituted for `{name}` in a console's format
//! string. Values are either constants or functions evaluated against the
//! call site at render time.

use crate::time;
use sitelog_types::CallSite;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type TokenFn = dyn Fn(&CallSite) -> String + Send + Sync;

/// A token value.
#[derive(Clone)]
pub enum Token {
    /// A constant string
    Value(String),
    /// Computed per call from the call site
    Func(Arc<TokenFn>),
}

impl Token {
    /// Wrap a function of the call site.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&CallSite) -> String + Send + Sync + 'static,
    {
        Token::Func(Arc::new(f))
    }

    /// Wrap a function that ignores the call site.
    pub fn thunk<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Token::Func(Arc::new(move |_: &CallSite| f()))
    }

    /// Produce the value for one render.
    pub fn evaluate(&self, site: &CallSite) -> String {
        match self {
            Token::Value(value) => value.clone(),
            Token::Func(f) => f(site),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Token::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::Value(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::Value(value)
    }
}

/// Mapping from token name to value. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    tokens: HashMap<String, Token>,
}

impl TokenTable {
    /// An empty table, without built-ins.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table holding the built-in tokens: `date`, `pid`, `filename`,
    /// `line` and `function`.
    pub fn with_builtins() -> Self {
        let mut table = Self::empty();
        table.insert("date", Token::thunk(time::timestamp));
        table.insert("pid", Token::thunk(|| std::process::id().to_string()));
        table.insert("filename", Token::func(|site| site.file.clone()));
        table.insert("line", Token::func(|site| site.line.to_string()));
        table.insert("function", Token::func(|site| site.function.clone()));
        table
    }

    /// Register or overwrite a token.
    pub fn insert(&mut self, name: impl Into<String>, token: impl Into<Token>) {
        self.tokens.insert(name.into(), token.into());
    }

    /// Look up a token.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.get(name)
    }

    /// Whether a token is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
