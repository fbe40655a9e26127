mod codegen;
mod error;
mod parser;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use clap::Parser;
use color_print::cprintln;

use crate::codegen::CodeGen;
use crate::error::Error;
use crate::parser::Command;

#[derive(Debug, clap::Parser)]
#[clap(version, about = "VM translator for the Hack 16-bit architecture")]
struct Args {
    /// Input VM command file
    input: String,

    /// Output assembly file
    output: String,
}

fn main() {
    let args: Args = Args::parse();
    println!("Hack VM Translator");

    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("< {}", args.input);
    println!("> {}", args.output);

    let file = File::open(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let mut out =
        File::create(&args.output).map_err(|e| Error::FileCreate(args.output.clone(), e))?;

    // each command's assembly is written as soon as it is generated
    let mut gen = CodeGen::new();
    let mut failed = 0;
    for (idx, raw) in BufReader::new(file).lines().enumerate() {
        let raw = raw.map_err(Error::FileRead)?;
        let code = match raw.split_once("//") {
            Some((code, _)) => code,
            None => raw.as_str(),
        };
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        let generated = match Command::classify(code) {
            Some(Command::Arithmetic(op)) => Ok(gen.arithmetic(op)),
            Some(Command::Push(segment, index)) => gen.push(segment, index),
            Some(Command::Pop(segment, index)) => gen.pop(segment, index),
            // recognized by the grammar, but not lowered here
            Some(_) => continue,
            None => Err(Error::MalformedLine {
                line: idx + 1,
                text: code.to_string(),
            }),
        };

        let lines = match generated {
            Ok(lines) => lines,
            Err(err) => {
                err.print_diag(&args.input, idx, &raw);
                failed += 1;
                continue;
            }
        };
        for line in &lines {
            writeln!(out, "{}", line).map_err(|e| Error::FileWrite(args.output.clone(), e))?;
        }
    }

    if failed > 0 {
        return Err(Error::Invalid(failed));
    }
    Ok(())
}
