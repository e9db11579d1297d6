pub mod ast;
pub mod ast_printer;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod value;

use std::io::Write;

use environment::Context;
use error::Result;
use interpreter::Interpreter;
use parser::Parser;

/// Program the CLI runs when no file is given.  Prints `12`, `😍`, `🎅`,
/// `21`, `😺` and `i love you`.
pub const DEMO_SOURCE: &str = r##"cat = 5 + 9 + ( 4 - 6)#;
print cat#;
ejprint love#;
ejprint santa#;
pasha = cat + 3#;
print pasha + cat - 6#;
ejkey cat 😺#;
ejkey valentine "i love you"#;
ejprint cat#;
ejprint valentine#;
"##;

/// Lex, parse and run `source` against a fresh context, writing output to
/// `out`.  Returns the final context.
pub fn run_source<W: Write>(source: &str, out: W) -> Result<Context> {
    let tokens = scanner::tokenize(source)?;
    let program = Parser::new(&tokens).parse()?;

    let mut ctx = Context::new();
    Interpreter::new(out).run(&program, &mut ctx)?;

    Ok(ctx)
}
