//! Tree‑walking evaluation of a parsed program.
//!
//! Output goes to any `std::io::Write`; the scope and alias table come in as
//! a `&mut Context`, so the interpreter itself holds no program state.

use std::io::Write;

use log::{debug, info};

use crate::ast::{BinaryOp, Node, UnaryOp};
use crate::environment::Context;
use crate::error::{LangError, Result};
use crate::token::Token;
use crate::value::Value;

/// Tree‑walking evaluator.  It owns only the output sink; all program state
/// lives in the [`Context`] passed to every call.
pub struct Interpreter<W: Write> {
    out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates a new Interpreter writing `print` / `ejprint` lines to `out`.
    pub fn new(out: W) -> Self {
        info!("Initializing Interpreter");

        Self { out }
    }

    /// Gives back the output sink, e.g. to inspect a captured buffer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs a program (or any single node) against `ctx`, discarding its
    /// value.  The first error stops the run.
    pub fn run(&mut self, program: &Node, ctx: &mut Context) -> Result<()> {
        self.evaluate(program, ctx)?;
        self.out.flush()?;

        info!("Interpretation completed successfully");

        Ok(())
    }

    /// Evaluates a node.  Statements (`print`, `ejprint`, `ejkey`, programs)
    /// produce `None`.
    pub fn evaluate(&mut self, node: &Node, ctx: &mut Context) -> Result<Option<Value>> {
        debug!("Evaluating node: {:?}", node);

        let value: Option<Value> = match node {
            Node::Number(token) => Some(evaluate_number(token)?),
            Node::Str(token) => Some(Value::Str(unquote(token.text).to_owned())),
            Node::Emoji(token) => Some(Value::Str(token.text.to_owned())),
            Node::Variable(token) => Some(evaluate_variable(token, ctx)?),

            Node::Binary {
                op, left, right, ..
            } => match op {
                BinaryOp::Add | BinaryOp::Sub => Some(self.evaluate_formula(node, ctx)?),

                BinaryOp::Assign => Some(self.assign(left, right, ctx)?),

                BinaryOp::AliasDefine => {
                    self.define_alias(left, right, ctx)?;

                    None
                }
            },

            Node::Unary { op, operand, .. } => {
                match op {
                    UnaryOp::Print => {
                        let value: Value = self.value_of(operand, ctx)?;

                        writeln!(self.out, "{}", value)?;
                        debug!("Printed value: {}", value);
                    }

                    UnaryOp::EjPrint => {
                        let key: String = self.name_or_text(operand, ctx)?;
                        let shown: &str = ctx.aliases().get(&key).unwrap_or(&key);

                        writeln!(self.out, "{}", shown)?;
                        debug!("Printed alias {} as {}", key, shown);
                    }
                }

                None
            }

            Node::Program(statements) => {
                debug!("Interpreting {} statements", statements.len());

                for statement in statements {
                    debug!("Executing statement on line {:?}", statement.line());

                    self.evaluate(statement, ctx)?;
                }

                None
            }
        };

        Ok(value)
    }

    /// Evaluates a `+` / `-` chain.  The left spine is walked with a loop so
    /// long formulas do not recurse once per operator; operands still run
    /// left to right.
    fn evaluate_formula(&mut self, node: &Node, ctx: &mut Context) -> Result<Value> {
        let mut pending: Vec<(BinaryOp, &Token, &Node)> = Vec::new();
        let mut leftmost: &Node = node;

        while let Node::Binary {
            op: op @ (BinaryOp::Add | BinaryOp::Sub),
            operator,
            left,
            right,
        } = leftmost
        {
            pending.push((*op, operator, &**right));
            leftmost = &**left;
        }

        let mut acc: Value = self.value_of(leftmost, ctx)?;

        for (op, operator, right) in pending.into_iter().rev() {
            let rhs: Value = self.value_of(right, ctx)?;

            acc = arithmetic(op, operator, acc, rhs)?;
        }

        Ok(acc)
    }

    /// Evaluates a node that has to produce a value.
    fn value_of(&mut self, node: &Node, ctx: &mut Context) -> Result<Value> {
        self.evaluate(node, ctx)?.ok_or_else(|| {
            LangError::Runtime(format!(
                "Statement used as a value [line {}]",
                node.line().unwrap_or(0)
            ))
        })
    }

    fn assign(&mut self, target: &Node, value: &Node, ctx: &mut Context) -> Result<Value> {
        let Node::Variable(name) = target else {
            return Err(LangError::Runtime(format!(
                "Invalid assignment target [line {}]",
                target.line().unwrap_or(0)
            )));
        };

        let value: Value = self.value_of(value, ctx)?;

        ctx.scope_mut().define(name.text, value.clone());
        info!("Assigned value {} to '{}'", value, name.text);

        Ok(value)
    }

    /// `ejkey`: a bare name on the left is the key itself and a bare name on
    /// the right is the value itself; neither is looked up in the scope.
    fn define_alias(&mut self, key: &Node, value: &Node, ctx: &mut Context) -> Result<()> {
        let key: String = self.name_or_text(key, ctx)?;

        let value: String = match value {
            Node::Emoji(token) | Node::Variable(token) => token.text.to_owned(),
            other => self.value_of(other, ctx)?.into_text(),
        };

        ctx.aliases_mut().define(key, value);

        Ok(())
    }

    /// Literal name of a variable node, or the text of any other node's value.
    fn name_or_text(&mut self, node: &Node, ctx: &mut Context) -> Result<String> {
        match node {
            Node::Variable(token) => Ok(token.text.to_owned()),
            other => Ok(self.value_of(other, ctx)?.into_text()),
        }
    }
}

fn evaluate_number(token: &Token) -> Result<Value> {
    token
        .text
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|_| LangError::InvalidNumber {
            text: token.text.to_owned(),
        })
}

fn evaluate_variable(token: &Token, ctx: &Context) -> Result<Value> {
    debug!("Looking up variable '{}'", token.text);

    ctx.scope()
        .get(token.text)
        .cloned()
        .ok_or_else(|| LangError::undefined_variable(token.text))
}

/// Strips exactly one pair of enclosing double quotes, if present.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

/// `+` adds numbers or concatenates strings, `-` subtracts numbers.  Nothing
/// is coerced.
fn arithmetic(op: BinaryOp, operator: &Token, lhs: Value, rhs: Value) -> Result<Value> {
    debug!("Left operand: {}, Right operand: {}", lhs, rhs);

    match (op, lhs, rhs) {
        (BinaryOp::Add, Value::Int(a), Value::Int(b)) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| overflow(operator)),

        (BinaryOp::Sub, Value::Int(a), Value::Int(b)) => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or_else(|| overflow(operator)),

        (BinaryOp::Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),

        (BinaryOp::Add, lhs, rhs) => Err(LangError::type_error(format!(
            "Operands of '+' must be two numbers or two strings, got {} and {} [line {}]",
            lhs.kind(),
            rhs.kind(),
            operator.line
        ))),

        (_, lhs, rhs) => Err(LangError::type_error(format!(
            "Operands of '{}' must be numbers, got {} and {} [line {}]",
            operator.text,
            lhs.kind(),
            rhs.kind(),
            operator.line
        ))),
    }
}

fn overflow(operator: &Token) -> LangError {
    LangError::Runtime(format!(
        "Integer overflow in '{}' [line {}]",
        operator.text, operator.line
    ))
}
