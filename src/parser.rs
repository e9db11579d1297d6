/*!
Recursive‑descent parser for emolang.

Time & Space
------------
* **n** = number of tokens.  Every token is consumed once through `advance()`
  and each production looks at most one token ahead, so parsing is **Θ(n)**.
* The AST holds at most one node per token.  Call‑stack depth grows only with
  parenthesis nesting.

### Logging Policy

| Location                     | Level  | Purpose                                   |
|------------------------------|--------|-------------------------------------------|
| `Parser::new`, `parse`       | `info` | Lifecycle milestones.                     |
| `statement` and below        | `debug`| Descent into grammar branches.            |
| Error paths (`consume`, etc.)| `debug`| Context before returning structured error.|

Grammar
-------

```text
program     → ( statement "#" ";" )* ;
statement   → assignment | aliasDefine | printStmt ;
assignment  → VARIABLE "=" formula ;
aliasDefine → "ejkey" VARIABLE ( EMOJI | STRING | VARIABLE ) ;
printStmt   → ( "print" | "ejprint" ) formula ;
formula     → term ( ( "+" | "-" ) term )* ;
term        → "(" formula ")" | STRING | NUMBER | VARIABLE ;
```

The first token picks the statement form: a `VARIABLE` must start an
assignment, `ejkey` an alias definition, anything else is tried as a print.
There is no error recovery: the first failure aborts the parse.

Limits
------
A statement may hold at most [`MAX_TERMS`] terms and nest parentheses at most
[`MAX_NESTING`] deep.  Both bound the depth of the tree, which every later
recursive walk (evaluation, printing, dropping) relies on.  Exceeding either
is a parse error.
*/

use crate::ast::{BinaryOp, Node, UnaryOp};
use crate::error::{LangError, Result};
use crate::token::{Token, TokenKind};

use log::{debug, info};

/// Most terms a single statement may contain.
pub const MAX_TERMS: usize = 4096;

/// Deepest parenthesis nesting a formula may use.
pub const MAX_NESTING: usize = 64;

/// Top‑level parser over an immutable slice of tokens.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
    terms: usize, // terms seen in the current statement
    depth: usize, // open parentheses around the current term
}

impl<'a> Parser<'a> {
    /// Construct a new parser.
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        info!("Parser created with {} tokens", tokens.len());

        Self {
            tokens,
            current: 0,
            terms: 0,
            depth: 0,
        }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse an entire program into a [`Node::Program`].
    pub fn parse(&mut self) -> Result<Node<'a>> {
        info!("Beginning parse phase");

        let mut statements: Vec<Node<'a>> = Vec::new();

        while !self.is_at_end() {
            self.terms = 0;

            let statement: Node<'a> = self.statement()?;

            self.consume(TokenKind::HASH, "'#' to end the statement")?;
            self.consume(TokenKind::SEMICOLON, "';' after '#'")?;

            statements.push(statement);
        }

        info!("Parsed {} statements", statements.len());

        Ok(Node::Program(statements))
    }

    // ───────────────────────── statement rules ────────────────────

    fn statement(&mut self) -> Result<Node<'a>> {
        debug!("Entering statement at token {}", self.current);

        match self.peek().map(|token| token.kind) {
            Some(TokenKind::VARIABLE) => self.assignment(),
            Some(TokenKind::EJKEY) => self.alias_define(),
            _ => self.print_statement(),
        }
    }

    fn assignment(&mut self) -> Result<Node<'a>> {
        let name: Token<'a> = self.consume(TokenKind::VARIABLE, "variable name")?;
        let equals: Token<'a> =
            self.consume(TokenKind::ASSIGN, "'=' after variable, bare expressions are not statements")?;

        let value: Node<'a> = self.formula()?;

        debug!("Parsed assignment to '{}'", name.text);

        Ok(Node::binary(
            BinaryOp::Assign,
            equals,
            Node::Variable(name),
            value,
        ))
    }

    fn alias_define(&mut self) -> Result<Node<'a>> {
        let keyword: Token<'a> = self.consume(TokenKind::EJKEY, "'ejkey'")?;
        let key: Token<'a> = self.consume(TokenKind::VARIABLE, "alias name after 'ejkey'")?;

        let value: Node<'a> = if let Some(emoji) = self.matches(TokenKind::EMOJI) {
            Node::Emoji(emoji)
        } else if let Some(string) = self.matches(TokenKind::STRING) {
            Node::Str(string)
        } else {
            Node::Variable(self.consume(TokenKind::VARIABLE, "emoji, string or name as alias value")?)
        };

        debug!("Parsed alias definition for '{}'", key.text);

        Ok(Node::binary(
            BinaryOp::AliasDefine,
            keyword,
            Node::Variable(key),
            value,
        ))
    }

    fn print_statement(&mut self) -> Result<Node<'a>> {
        let (op, operator) = if let Some(token) = self.matches(TokenKind::PRINT) {
            (UnaryOp::Print, token)
        } else if let Some(token) = self.matches(TokenKind::EJPRINT) {
            (UnaryOp::EjPrint, token)
        } else {
            return Err(self.error("statement: assignment, 'ejkey', 'print' or 'ejprint'"));
        };

        let operand: Node<'a> = self.formula()?;

        debug!("Parsed {:?} statement", op);

        Ok(Node::unary(op, operator, operand))
    }

    // ───────────────────────── expression rules ───────────────────

    /// Left‑associative chain of `+` / `-` at a single precedence level.
    fn formula(&mut self) -> Result<Node<'a>> {
        let mut expr: Node<'a> = self.term()?;

        loop {
            let op: BinaryOp = if self.check(TokenKind::PLUS) {
                BinaryOp::Add
            } else if self.check(TokenKind::MINUS) {
                BinaryOp::Sub
            } else {
                break;
            };

            let operator: Token<'a> = self.advance();
            let right: Node<'a> = self.term()?;

            debug!("Parsed binary operator {}", operator.text);

            expr = Node::binary(op, operator, expr, right);
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Node<'a>> {
        self.terms += 1;

        if self.terms > MAX_TERMS {
            return Err(self.error("at most 4096 terms in one statement"));
        }

        if self.check(TokenKind::LPAR) {
            if self.depth >= MAX_NESTING {
                return Err(self.error("at most 64 nested parentheses"));
            }

            self.advance();
            self.depth += 1;
            let expr: Node<'a> = self.formula()?;
            self.depth -= 1;

            self.consume(TokenKind::RPAR, "')' after expression")?;

            return Ok(expr);
        }

        if let Some(token) = self.matches(TokenKind::STRING) {
            return Ok(Node::Str(token));
        }

        if let Some(token) = self.matches(TokenKind::NUMBER) {
            return Ok(Node::Number(token));
        }

        if let Some(token) = self.matches(TokenKind::VARIABLE) {
            return Ok(Node::Variable(token));
        }

        Err(self.error("string, number, variable or '('"))
    }

    // ────────────────────── utility helpers ───────────────────────

    #[inline(always)]
    fn matches(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        if self.check(kind) {
            return Some(self.advance());
        }

        None
    }

    #[inline(always)]
    fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<Token<'a>> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        Err(self.error(expected))
    }

    #[inline(always)]
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Consume the current token.  Callers check first; at the end the last
    /// token is returned again.
    #[inline(always)]
    fn advance(&mut self) -> Token<'a> {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.tokens[self.current.saturating_sub(1)]
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    #[inline(always)]
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.current).copied()
    }

    /// Build a parse error at the current token, or just past the last token
    /// when the input ran out.
    fn error(&self, expected: &str) -> LangError {
        let (position, line) = match self.peek() {
            Some(token) => (token.position, token.line),
            None => self
                .tokens
                .last()
                .map_or((0, 1), |last| (last.position + last.text.len(), last.line)),
        };

        debug!(
            "Parse failure at token {} (position {}): expected {}",
            self.current, position, expected
        );

        LangError::parse(position, line, expected)
    }
}
