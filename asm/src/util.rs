use std::collections::HashMap;

use crate::assembler::Word;
use crate::parser::Line;

/// Prints every source line next to its address and encoded word.
pub fn print_dump(path: &str, lines: &[Line], words: &[Word]) {
    let by_line: HashMap<usize, &Word> = words.iter().map(|w| (w.line, w)).collect();

    let rule = "+------+------+------------------+------------------------------+";
    println!("{}", rule);
    println!("| {:<60} |", path);
    println!("{}", rule);
    for line in lines {
        println!("{}", line.cformat(by_line.get(&line.no()).copied()));
    }
    println!("{}", rule);
}
