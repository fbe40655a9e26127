use arch::inst::Inst;
use color_print::cformat;

use crate::assembler::Word;
use crate::error::Error;

/// One raw source line together with its classification.
#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    code: String,
    stmt: Option<Inst>,
}

impl Line {
    /// Strips the `//` comment, trims, and classifies what remains.
    ///
    /// A blank result carries no statement and no error. A non-blank result
    /// that fails classification is reported as a malformed line instead of
    /// being silently dropped.
    pub fn new(path: &str, idx: usize, raw: &str) -> (Line, Option<Error>) {
        let code = match raw.split_once("//") {
            Some((code, _)) => code,
            None => raw,
        };
        let code = code.trim().to_string();

        let (stmt, err) = if code.is_empty() {
            (None, None)
        } else {
            match Inst::classify(&code) {
                Some(inst) => (Some(inst), None),
                None => (
                    None,
                    Some(Error::MalformedLine {
                        line: idx + 1,
                        text: code.clone(),
                    }),
                ),
            }
        };

        let line = Line {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            code,
            stmt,
        };
        (line, err)
    }

    pub fn stmt(&self) -> Option<&Inst> {
        self.stmt.as_ref()
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Line {
    /// One dump row: line number, instruction address, encoded word, source.
    pub fn cformat(&self, word: Option<&Word>) -> String {
        let pc = match word {
            Some(w) => cformat!("<green>{:04}</>", w.addr),
            None => " ".repeat(4),
        };
        let bits = match word {
            Some(w) => cformat!("<yellow>{}</>", w.bits),
            None => " ".repeat(16),
        };
        let stmt = match &self.stmt {
            Some(Inst::Label(_)) => cformat!("<green>{}</>", self.code),
            Some(Inst::Addr(_)) => cformat!("<blue>{}</>", self.code),
            Some(Inst::Comp { .. }) => cformat!("<red>{}</>", self.code),
            None => self.code.clone(),
        };
        format!("| {:>4} | {} | {} | {}", self.no(), pc, bits, stmt)
    }
}
