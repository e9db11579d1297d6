//! Centralised error hierarchy for the **emolang interpreter**.
//!
//! The scanner, parser and interpreter all report failures through
//! [`LangError`], so the whole pipeline shares one `Result<T>` alias and the
//! CLI can forward any failure through `anyhow` unchanged.
//!
//! Every variant is fatal: nothing in the crate retries or recovers.
//!
//! The module **does not** print diagnostics itself

use std::io;
use thiserror::Error;

use log::info;

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LangError {
    /// No token pattern matches at the current scan position.
    #[error("[line {line}, position {position}] Error: Unexpected character: {found}")]
    Lex {
        /// Byte offset into the source.
        position: usize,

        /// 1‑based line of `position`.
        line: usize,

        /// The character nothing could match.
        found: char,
    },

    /// A required token is missing or a different one was found.
    #[error("[line {line}, position {position}] Error: Expected {expected}")]
    Parse {
        position: usize,
        line: usize,

        /// Human‑readable description of what the grammar required.
        expected: String,
    },

    /// A variable was read before any assignment stored it.
    #[error("Runtime error: Undefined variable '{name}'")]
    UndefinedVariable { name: String },

    /// A number literal that does not fit a 64‑bit signed integer.
    #[error("Runtime error: Invalid number literal '{text}'")]
    InvalidNumber { text: String },

    /// `+` / `-` applied to operand kinds it does not accept.
    #[error("Type error: {message}")]
    Type { message: String },

    /// Any other evaluation failure (overflow, valueless operand).
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Wrapper around `std::io::Error` (transparent).  Raised when the output
    /// sink refuses a write.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// UTF‑8 decoding failure when ingesting external text.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl LangError {
    /// Helper constructor for the **scanner**.
    pub fn lex(position: usize, line: usize, found: char) -> Self {
        info!(
            "Creating Lex error: line={}, position={}, found={:?}",
            line, position, found
        );

        LangError::Lex {
            position,
            line,
            found,
        }
    }

    /// Helper constructor for the **parser**.
    pub fn parse<S: Into<String>>(position: usize, line: usize, expected: S) -> Self {
        let expected: String = expected.into();

        info!(
            "Creating Parse error: line={}, position={}, expected={}",
            line, position, expected
        );

        LangError::Parse {
            position,
            line,
            expected,
        }
    }

    pub fn undefined_variable<S: Into<String>>(name: S) -> Self {
        let name: String = name.into();

        info!("Creating UndefinedVariable error: name={}", name);

        LangError::UndefinedVariable { name }
    }

    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Type error: {}", message);

        LangError::Type { message }
    }

    /// Lex and parse failures are reported with a different exit status than
    /// runtime failures by the CLI.
    pub fn is_static(&self) -> bool {
        matches!(self, LangError::Lex { .. } | LangError::Parse { .. })
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LangError>;
