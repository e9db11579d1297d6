use serde::Serialize;

use crate::token::Token;

/// Binary operators.  `Assign` and `AliasDefine` share the node shape with
/// arithmetic but not its evaluation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Assign,
    AliasDefine,
}

/// Prefix statement operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Print,
    EjPrint,
}

/// **Abstract‑Syntax‑Tree node**.  Every child is owned, so the tree can never
/// share a node between two parents.  Leaves keep their token; evaluation
/// reads the literal text from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node<'a> {
    // Unsigned integer literal
    Number(Token<'a>),

    // Double‑quoted string literal, quotes still in the token text
    Str(Token<'a>),

    // Emoji glyph literal
    Emoji(Token<'a>),

    // Variable name
    Variable(Token<'a>),

    Binary {
        op: BinaryOp,
        operator: Token<'a>,
        left: Box<Node<'a>>,
        right: Box<Node<'a>>,
    },

    Unary {
        op: UnaryOp,
        operator: Token<'a>,
        operand: Box<Node<'a>>,
    },

    // Root: statements in execution order
    Program(Vec<Node<'a>>),
}

impl<'a> Node<'a> {
    pub fn binary(op: BinaryOp, operator: Token<'a>, left: Node<'a>, right: Node<'a>) -> Self {
        Node::Binary {
            op,
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operator: Token<'a>, operand: Node<'a>) -> Self {
        Node::Unary {
            op,
            operator,
            operand: Box::new(operand),
        }
    }

    /// Line of the token that starts this node.  `None` for an empty program.
    pub fn line(&self) -> Option<usize> {
        match self {
            Node::Number(token) | Node::Str(token) | Node::Emoji(token) | Node::Variable(token) => {
                Some(token.line)
            }

            Node::Binary { left, .. } => left.line(),

            Node::Unary { operator, .. } => Some(operator.line),

            Node::Program(statements) => statements.first().and_then(Node::line),
        }
    }
}
