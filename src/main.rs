use std::fs;

use calx::{Options, evaluate_with, interpreter::scanner::tokenize, parse};
use clap::Parser;

/// calx evaluates an arithmetic expression made of integers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calx to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Ignore anything left over after the first complete expression.
    #[arg(short, long)]
    lenient: bool,

    /// Print the token stream before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed expression, fully parenthesized, before evaluating.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn main() {
    let Args { file,
               lenient,
               tokens,
               ast,
               contents, } = Args::parse();

    let source = if file {
        let text = fs::read_to_string(&contents).unwrap_or_else(|_| {
                                                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                                    std::process::exit(1);
                                                });
        text.trim_end_matches(['\n', '\r']).to_string()
    } else {
        contents
    };

    let options = Options { allow_trailing_tokens: lenient };

    if let Err(e) = run(&source, tokens, ast, &options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(source: &str, tokens: bool, ast: bool, options: &Options) -> Result<(), calx::Error> {
    if tokens {
        for (token, position) in tokenize(source)? {
            println!("{position}: {token}");
        }
    }

    if ast {
        println!("{}", parse(source, options)?);
    }

    println!("{}", evaluate_with(source, options)?);
    Ok(())
}
