mod assembler;
mod error;
mod parser;
mod util;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use clap::Parser;
use color_print::cprintln;

use crate::assembler::Assembler;
use crate::error::Error;
use crate::parser::Line;

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Assembler for the Hack 16-bit architecture")]
struct Args {
    /// Input assembly file
    input: String,

    /// Output file, one 16-bit binary word per line
    output: String,

    /// Dump resolved lines to stdout
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    let args: Args = Args::parse();
    println!("Hack Assembler");

    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("1. Parse: {}", args.input);
    let file = File::open(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;

    let mut lines = Vec::new();
    let mut malformed = 0;
    for (idx, raw) in BufReader::new(file).lines().enumerate() {
        let raw = raw.map_err(Error::FileRead)?;
        let (line, err) = Line::new(&args.input, idx, &raw);
        if let Some(err) = err {
            err.print_diag(line.path(), line.idx(), line.raw());
            malformed += 1;
        }
        lines.push(line);
    }
    if malformed > 0 {
        return Err(Error::Invalid(malformed));
    }

    println!("2. Collect Labels");
    let mut asm = Assembler::new();
    asm.collect_labels(&lines);

    println!("3. Resolve & Encode");
    let words = asm.encode(&lines)?;

    println!("4. Write: {}", args.output);
    let mut out =
        File::create(&args.output).map_err(|e| Error::FileCreate(args.output.clone(), e))?;
    for word in &words {
        writeln!(out, "{}", word.bits).map_err(|e| Error::FileWrite(args.output.clone(), e))?;
    }

    if args.dump {
        util::print_dump(&args.input, &lines, &words);
    }

    Ok(())
}
