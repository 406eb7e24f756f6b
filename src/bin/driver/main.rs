mod args;

use addrgen::*;
use anyhow::Context;
use args::Args;
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};

fn normalize(line: &str) -> String {
    line.trim().to_uppercase()
}

fn tokenize(source: &str, args: &Args) -> Result<lexer::Tokens> {
    let tokens = lexer::lex(source)?;
    if args.lex {
        println!("{tokens:?}");
    }
    Ok(tokens)
}

fn convert(tokens: &[lexer::Token], args: &Args) -> Result<converter::Conversion> {
    let conversion = converter::convert_tokens(tokens)?;
    if args.parse {
        println!("{:#?}", conversion.tree);
    }
    Ok(conversion)
}

fn gen_code(conversion: &converter::Conversion, args: &Args) {
    for mode in args.address_modes() {
        let sequence = codegen::generate(&conversion.postfix, mode);
        println!("\n{sequence}");
    }
}

fn process(source: &str, args: &Args) -> Result<()> {
    let tokens = tokenize(source, args)?;
    if args.lex {
        return Ok(());
    }

    let conversion = convert(&tokens, args)?;
    if args.parse {
        return Ok(());
    }

    print!("{conversion}");
    if args.convert {
        return Ok(());
    }

    gen_code(&conversion, args);
    Ok(())
}

// Failures are reported and the next expression is processed.
fn process_all(sources: impl Iterator<Item = String>, args: &Args) {
    for source in sources.filter(|s| !s.is_empty()) {
        println!("\nExpression: {source}");
        if let Err(err) = process(&source, args) {
            eprintln!("error: {err}");
        }
    }
}

fn read_file(args: &Args) -> anyhow::Result<Vec<String>> {
    let Some(path) = &args.file else {
        return Ok(Vec::new());
    };
    let contents =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let expressions = contents
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .map(normalize)
        .collect();
    Ok(expressions)
}

fn interactive(args: &Args) -> anyhow::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("Enter expression: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        process_all(std::iter::once(normalize(&line)), args);
    }
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(expression) = &args.expression {
        let source = normalize(expression);
        return process(&source, &args).with_context(|| format!("expression {source}"));
    }

    if args.file.is_some() {
        let expressions = read_file(&args)?;
        process_all(expressions.into_iter(), &args);
        return Ok(());
    }

    interactive(&args)
}
