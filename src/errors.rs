//! Definition of errors.
use std::{fmt, result};

/// A specialized Result type for this crate.
pub type Result<T, E = TrieError> = result::Result<T, E>;

/// Errors reported by [`DoubleArrayTrie`](crate::DoubleArrayTrie).
#[derive(Debug)]
pub enum TrieError {
    /// Contains [`InputError`].
    Input(InputError),

    /// Contains [`SymbolError`].
    Symbol(SymbolError),

    /// Contains [`ScaleError`].
    Scale(ScaleError),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::Symbol(e) => e.fmt(f),
            Self::Scale(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for TrieError {}

impl TrieError {
    pub(crate) const fn input(msg: &'static str) -> Self {
        Self::Input(InputError { msg })
    }
    pub(crate) const fn symbol(c: char) -> Self {
        Self::Symbol(SymbolError { c })
    }
    pub(crate) const fn scale(arg: &'static str, max: u32) -> Self {
        Self::Scale(ScaleError { arg, max })
    }
}

/// Error used when an input argument is invalid.
#[derive(Debug)]
pub struct InputError {
    msg: &'static str,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}

/// Error used when a word contains a character outside the configured
/// alphabet.
#[derive(Debug)]
pub struct SymbolError {
    c: char,
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SymbolError: {:?} is not in the alphabet", self.c)
    }
}

/// Error used when an insertion could grow the double array past its
/// maximum addressable size.
#[derive(Debug)]
pub struct ScaleError {
    arg: &'static str,
    max: u32,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ScaleError: {} must be no greater than {}",
            self.arg, self.max
        )
    }
}
