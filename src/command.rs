// file: src/command.rs
// version: 1.0.0
// guid: 18956215-8e08-41a1-b623-4a570fb337b0

//! Argument vector for a single external command

use serde::{Deserialize, Serialize};
use std::fmt;

/// An external command: program path followed by its arguments.
///
/// Once built the token list never changes; operations that need a
/// different command (such as wrapping it in `sudo`) return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Create a command from any sequence of string-like tokens
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Program to launch, if any
    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Arguments after the program
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// New command made of `prefix` followed by this command's tokens
    pub fn prefixed<I, S>(&self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = prefix.into_iter().map(Into::into).collect();
        tokens.extend(self.tokens.iter().cloned());
        Self { tokens }
    }

    /// Shell-quoted, space-joined rendering used in log records
    pub fn runstring(&self) -> String {
        shell_words::join(&self.tokens).trim_end().to_string()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.runstring())
    }
}

impl From<Vec<String>> for Command {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl From<&[&str]> for Command {
    fn from(tokens: &[&str]) -> Self {
        Self::new(tokens.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Command {
    fn from(tokens: [&str; N]) -> Self {
        Self::new(tokens)
    }
}
