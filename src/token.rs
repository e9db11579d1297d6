use log::{debug, info};
use memchr::memchr;
use serde::Serialize;
use std::fmt;

/// The different kinds of tokens recognized by the emolang scanner.
///
/// Each kind owns a recognition pattern (see [`TokenKind::match_len`]).  The
/// scanner consults [`CATALOG`] in declared order and keeps the first kind
/// whose pattern matches, so order decides ambiguity: `PRINT` is tried before
/// `VARIABLE` and therefore wins on `print`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// One or more whitespace characters (see [`is_space`]).  Never emitted.
    SPACE,

    /// 'print'
    PRINT,

    /// 'ejprint'
    EJPRINT,

    /// 'ejkey'
    EJKEY,

    /// '='
    ASSIGN,

    /// '+'
    PLUS,

    /// '-'
    MINUS,

    /// '('
    LPAR,

    /// ')'
    RPAR,

    /// ';'
    SEMICOLON,

    /// A double‑quoted string, quotes included in the lexeme
    STRING,

    /// A single character outside the Basic Multilingual Plane
    EMOJI,

    /// An unsigned decimal integer
    NUMBER,

    /// Lowercase ASCII letters only
    VARIABLE,

    /// '#', first half of the `#;` statement terminator
    HASH,
}

/// Every token kind in match‑precedence order.
pub const CATALOG: [TokenKind; 15] = [
    TokenKind::SPACE,
    TokenKind::PRINT,
    TokenKind::EJPRINT,
    TokenKind::EJKEY,
    TokenKind::ASSIGN,
    TokenKind::PLUS,
    TokenKind::MINUS,
    TokenKind::LPAR,
    TokenKind::RPAR,
    TokenKind::SEMICOLON,
    TokenKind::STRING,
    TokenKind::EMOJI,
    TokenKind::NUMBER,
    TokenKind::VARIABLE,
    TokenKind::HASH,
];

impl TokenKind {
    /// Stable upper‑case name, used by the `tokenize` output and in parse
    /// error messages.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::SPACE => "SPACE",
            TokenKind::PRINT => "PRINT",
            TokenKind::EJPRINT => "EJPRINT",
            TokenKind::EJKEY => "EJKEY",
            TokenKind::ASSIGN => "ASSIGN",
            TokenKind::PLUS => "PLUS",
            TokenKind::MINUS => "MINUS",
            TokenKind::LPAR => "LPAR",
            TokenKind::RPAR => "RPAR",
            TokenKind::SEMICOLON => "SEMICOLON",
            TokenKind::STRING => "STRING",
            TokenKind::EMOJI => "EMOJI",
            TokenKind::NUMBER => "NUMBER",
            TokenKind::VARIABLE => "VARIABLE",
            TokenKind::HASH => "HASH",
        }
    }

    /// Length in bytes of the longest prefix of `rest` this kind's pattern
    /// accepts, or `None` when it does not match (empty matches never count).
    pub fn match_len(self, rest: &str) -> Option<usize> {
        let len: usize = match self {
            TokenKind::SPACE => leading(rest, is_space),
            TokenKind::PRINT => literal(rest, "print"),
            TokenKind::EJPRINT => literal(rest, "ejprint"),
            TokenKind::EJKEY => literal(rest, "ejkey"),
            TokenKind::ASSIGN => literal(rest, "="),
            TokenKind::PLUS => literal(rest, "+"),
            TokenKind::MINUS => literal(rest, "-"),
            TokenKind::LPAR => literal(rest, "("),
            TokenKind::RPAR => literal(rest, ")"),
            TokenKind::SEMICOLON => literal(rest, ";"),
            TokenKind::HASH => literal(rest, "#"),

            TokenKind::STRING => {
                let bytes: &[u8] = rest.as_bytes();

                if bytes.first() != Some(&b'"') {
                    return None;
                }

                // Closing quote; no escapes exist, so the next `"` ends it.
                memchr(b'"', &bytes[1..]).map_or(0, |end| end + 2)
            }

            TokenKind::EMOJI => match rest.chars().next() {
                Some(c) if u32::from(c) >= 0x1_0000 => c.len_utf8(),
                _ => 0,
            },

            TokenKind::NUMBER => leading(rest, |c| c.is_ascii_digit()),
            TokenKind::VARIABLE => leading(rest, |c| c.is_ascii_lowercase()),
        };

        (len > 0).then_some(len)
    }
}

/// Unicode `White_Space` plus the byte‑order mark U+FEFF, minus NEXT LINE
/// U+0085.  A BOM at the start of a file is therefore skipped like any other
/// blank.
#[inline(always)]
pub fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

#[inline(always)]
fn literal(rest: &str, lit: &str) -> usize {
    if rest.starts_with(lit) {
        lit.len()
    } else {
        0
    }
}

#[inline(always)]
fn leading(rest: &str, accept: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !accept(c))
        .map_or(rest.len(), |(i, _)| i)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: its kind, the exact source slice, and where it starts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Token<'a> {
    /// The category of this token.
    pub kind: TokenKind,

    /// The exact substring from the source that produced this token.
    pub text: &'a str,

    /// Byte offset of the first byte of `text` in the source.
    pub position: usize,

    /// 1‑based line number in the source.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Create a new Token with the given kind, text, and location.
    pub fn new(kind: TokenKind, text: &'a str, position: usize, line: usize) -> Self {
        info!(
            "Creating new token: kind={:?}, text={}, position={}, line={}",
            kind, text, position, line
        );

        Self {
            kind,
            text,
            position,
            line,
        }
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug!(
            "Formatting token: kind={:?}, text={}, position={}",
            self.kind, self.text, self.position
        );

        write!(f, "{} {}", self.kind, self.text)
    }
}
