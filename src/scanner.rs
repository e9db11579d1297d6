//! Module `scanner` implements a one‑pass, streaming lexer for emolang.
//!
//! It transforms a source `&str` into a sequence of `Token<'a>`s, skipping
//! whitespace.  Designed as a `FusedIterator`, it can be chained safely with
//! other iterator adapters.
//!
//! # Public API
//!
//! - `Scanner::new(src: &'a str) -> Scanner<'a>`
//!   Create a new lexer over the input text.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token<'a>, LangError>` on each `.next()`.  After the first
//!   `Err` the iterator is exhausted: a lexing error is fatal.
//!
//! - `tokenize(src: &str) -> Result<Vec<Token>>`
//!   Collect the whole stream, or the first error.
//!
//! # Token Recognition
//!
//! At each position every kind in [`CATALOG`] is trial‑matched in declared
//! order and the first non‑empty match wins; there is no longest‑match rule.
//! `SPACE` matches are consumed silently.  If no kind matches, the scanner
//! reports `LangError::Lex` carrying the byte position and line.
//!
//! # Example
//!
//! ```rust
//! use emolang::scanner::Scanner;
//!
//! let source = "print 123#;";
//! for result in Scanner::new(source) {
//!     match result {
//!         Ok(token) => println!("{}", token),
//!         Err(err) => eprintln!("Lex error: {}", err),
//!     }
//! }
//! ```

use crate::error::{LangError, Result};
use crate::token::{Token, TokenKind, CATALOG};
use log::{debug, info};
use memchr::memchr_iter;
use std::iter::FusedIterator;

/// A single pass **scanner / lexer** that converts source text into a
/// sequence of [`Token`]s.  The lifetime `'a` ties every emitted token's
/// `text` slice back to the original source.
pub struct Scanner<'a> {
    src: &'a str, // entire source text
    curr: usize,  // byte offset of the next unscanned character
    line: usize,  // 1‑based line counter (\n increments)
    failed: bool, // set once an error was yielded
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        info!("Scanner created over {} bytes", src.len());

        Self {
            src,
            curr: 0,
            line: 1,
            failed: false,
        }
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.src.len()
    }

    /// First kind in catalog order that accepts the remaining input, with the
    /// length of its match.
    fn recognise(&self) -> Option<(TokenKind, usize)> {
        let rest: &str = &self.src[self.curr..];

        CATALOG
            .iter()
            .find_map(|&kind| kind.match_len(rest).map(|len| (kind, len)))
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while !self.is_at_end() {
            let Some((kind, len)) = self.recognise() else {
                self.failed = true;

                let found: char = self.src[self.curr..].chars().next().unwrap_or('\0');

                return Some(Err(LangError::lex(self.curr, self.line, found)));
            };

            let start: usize = self.curr;
            let line: usize = self.line;
            let text: &'a str = &self.src[start..start + len];

            self.curr += len;
            self.line += memchr_iter(b'\n', text.as_bytes()).count();

            if kind == TokenKind::SPACE {
                continue;
            }

            debug!("Scanned token ({:?}) at {} on line {}", kind, start, line);

            return Some(Ok(Token::new(kind, text, start, line)));
        }

        None
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

/// Scan the whole of `src`.  Either every token, or the first lexing error.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>> {
    let tokens: Vec<Token<'_>> = Scanner::new(src).collect::<Result<_>>()?;

    info!("Tokenized {} tokens", tokens.len());

    Ok(tokens)
}
