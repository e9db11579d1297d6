use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use emolang as emo;

use emo::ast_printer::AstPrinter;
use emo::environment::Context;
use emo::error::LangError;
use emo::interpreter::Interpreter;
use emo::parser::Parser;
use emo::scanner::{tokenize, Scanner};
use emo::DEMO_SOURCE;

#[derive(ClapParser, Debug)]
#[command(version, about = "emolang interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize { filename: Option<PathBuf> },

    /// Parses input from a file and prints its AST
    Parse {
        filename: Option<PathBuf>,

        /// Print the AST as JSON instead of S-expressions
        #[arg(long)]
        json: bool,
    },

    /// Runs input from a file as an emolang program
    Run { filename: Option<PathBuf> },
}

/// Reads a file as UTF‑8 text, or hands back the demo program.
fn read_source(filename: Option<PathBuf>) -> Result<String> {
    let Some(filename) = filename else {
        info!("No filepath provided, using the demo program");

        return Ok(DEMO_SOURCE.to_string());
    };

    info!("Reading file: {:?}", filename);
    let file = File::open(&filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    let source = String::from_utf8(buf)
        .map_err(LangError::from)
        .context(format!("File {:?} is not valid UTF-8", filename))?;

    Ok(source)
}

fn init_logger() -> Result<()> {
    // Create or open the log file
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'emolang::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("emolang::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

/// Reports a pipeline failure and exits: 65 for lex/parse, 70 for runtime.
fn fail(e: LangError) -> ! {
    debug!("Pipeline failure: {}", e);
    eprintln!("{}", e);

    std::process::exit(if e.is_static() { 65 } else { 70 });
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Tokenize { filename } => {
            info!("Running Tokenize subcommand");
            let source = read_source(filename)?;

            for token in Scanner::new(&source) {
                match token {
                    Ok(token) => {
                        debug!("Scanned token: {}", token);
                        println!("{}", token);
                    }

                    Err(e) => fail(e),
                }
            }

            info!("Tokenization completed successfully");
        }

        Commands::Parse { filename, json } => {
            info!("Running Parse subcommand");
            let source = read_source(filename)?;

            let tokens = tokenize(&source).unwrap_or_else(|e| fail(e));
            let program = Parser::new(&tokens).parse().unwrap_or_else(|e| fail(e));

            if json {
                let rendered = serde_json::to_string_pretty(&program)
                    .context("Failed to serialize AST")?;
                println!("{}", rendered);
            } else {
                let printer = AstPrinter;
                println!("{}", printer.print(&program));
            }

            info!("Parse subcommand completed");
        }

        Commands::Run { filename } => {
            info!("Running Run subcommand");
            let source = read_source(filename)?;
            info!("Provided input:\n {}", source);

            let tokens = tokenize(&source).unwrap_or_else(|e| fail(e));
            let program = Parser::new(&tokens).parse().unwrap_or_else(|e| fail(e));

            let mut ctx = Context::new();
            let mut interpreter = Interpreter::new(io::stdout().lock());

            if let Err(e) = interpreter.run(&program, &mut ctx) {
                fail(e);
            }

            info!(
                "Program executed successfully: {} variables, {} aliases",
                ctx.scope().len(),
                ctx.aliases().len()
            );
        }
    }

    Ok(())
}
