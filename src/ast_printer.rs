use crate::ast::{BinaryOp, Node, UnaryOp};

/// Renders a tree as S‑expressions: `(= cat (+ 5 9))`, `(ejprint love)`.
/// A program prints one statement per line.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&self, node: &Node) -> String {
        match node {
            Node::Binary {
                op, left, right, ..
            } => {
                let op_str = match op {
                    BinaryOp::Add => "+",

                    BinaryOp::Sub => "-",

                    BinaryOp::Assign => "=",

                    BinaryOp::AliasDefine => "ejkey",
                };

                format!("({} {} {})", op_str, self.print(left), self.print(right))
            }

            Node::Unary { op, operand, .. } => {
                let op_str = match op {
                    UnaryOp::Print => "print",

                    UnaryOp::EjPrint => "ejprint",
                };

                format!("({} {})", op_str, self.print(operand))
            }

            Node::Number(token) | Node::Str(token) | Node::Emoji(token) | Node::Variable(token) => {
                token.text.to_string()
            }

            Node::Program(statements) => statements
                .iter()
                .map(|statement| self.print(statement))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
