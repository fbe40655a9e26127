use color_print::cprintln;
use thiserror::Error;

use crate::parser::Segment;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse as a command")]
    MalformedLine { line: usize, text: String },

    #[error("Cannot pop to segment `{0}`")]
    UnsupportedPop(Segment),

    #[error("Pointer index out of range: {0}")]
    PointerIndex(u16),

    #[error("Index out of range for segment `{0}`: {1}")]
    SegmentIndex(Segment, u16),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("aborting: {0} command(s) could not be translated")]
    Invalid(usize),
}

impl Error {
    /// Print the error rustc-style with file location and line content.
    /// `line_idx` is 0-based, displayed 1-based.
    pub fn print_diag(&self, file: &str, line_idx: usize, raw: &str) {
        cprintln!("<red,bold>error</>: {}", self);

        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, raw);
        cprintln!("      <blue>|</>");
    }
}
