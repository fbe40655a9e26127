use crate::error::Error;
use crate::parser::{Operator, Segment};

/// First address of the temp segment.
const TEMP_BASE: u16 = 5;
/// First address of the static segment, one slot per index.
const STATIC_BASE: u16 = 16;
/// Holding register for a pop target address.
const TARGET: &str = "R13";

/// Generates assembly for one translation run.
///
/// Owns the label sequence counter, so labels synthesized for comparison
/// operators are unique across everything emitted by this run and two
/// independent runs cannot interfere.
pub struct CodeGen {
    output: Vec<String>,
    label_seq: usize,
}

impl CodeGen {
    pub fn new() -> Self {
        CodeGen {
            output: Vec::new(),
            label_seq: 0,
        }
    }

    fn emit(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// One fresh (true, end) label pair. The counter is shared by all
    /// comparison operators: every pair is distinct within the run.
    fn fresh_labels(&mut self, name: &str) -> (String, String) {
        let n = self.label_seq;
        self.label_seq += 1;
        (format!("{}_TRUE_{}", name, n), format!("{}_END_{}", name, n))
    }

    pub fn push(&mut self, segment: Segment, index: u16) -> Result<Vec<String>, Error> {
        match segment {
            Segment::Argument => self.push_indirect("ARG", index),
            Segment::Local => self.push_indirect("LCL", index),
            Segment::This => self.push_indirect("THIS", index),
            Segment::That => self.push_indirect("THAT", index),
            Segment::Constant => {
                self.emit(&format!("@{}", index));
                self.emit("D=A");
            }
            Segment::Static => {
                let addr = direct_addr(segment, STATIC_BASE, index)?;
                self.push_direct(addr);
            }
            Segment::Temp => {
                let addr = direct_addr(segment, TEMP_BASE, index)?;
                self.push_direct(addr);
            }
            Segment::Pointer => {
                let target = pointer_target(index)?;
                self.emit(&format!("@{}", target));
                self.emit("D=M");
            }
        }
        self.push_d();
        Ok(self.take())
    }

    pub fn pop(&mut self, segment: Segment, index: u16) -> Result<Vec<String>, Error> {
        match segment {
            Segment::Argument => self.pop_indirect("ARG", index),
            Segment::Local => self.pop_indirect("LCL", index),
            Segment::This => self.pop_indirect("THIS", index),
            Segment::That => self.pop_indirect("THAT", index),
            // constant is push-only
            Segment::Constant => return Err(Error::UnsupportedPop(segment)),
            Segment::Static => {
                let addr = direct_addr(segment, STATIC_BASE, index)?;
                self.pop_direct(addr);
            }
            Segment::Temp => {
                let addr = direct_addr(segment, TEMP_BASE, index)?;
                self.pop_direct(addr);
            }
            Segment::Pointer => {
                let target = pointer_target(index)?;
                self.pop_d();
                self.emit(&format!("@{}", target));
                self.emit("M=D");
            }
        }
        Ok(self.take())
    }

    pub fn arithmetic(&mut self, operator: Operator) -> Vec<String> {
        match operator {
            Operator::Add => self.binary("M=D+M"),
            Operator::Sub => self.binary("M=M-D"),
            Operator::And => self.binary("M=D&M"),
            Operator::Or => self.binary("M=D|M"),
            Operator::Neg => self.unary("M=-M"),
            Operator::Not => self.unary("M=!M"),
            Operator::Eq => self.compare("EQ", "JEQ"),
            Operator::Gt => self.compare("GT", "JGT"),
            Operator::Lt => self.compare("LT", "JLT"),
        }
        self.take()
    }

    /// Reads `*(base) + index` onto the stack.
    fn push_indirect(&mut self, base: &str, index: u16) {
        self.emit(&format!("@{}", index));
        self.emit("D=A");
        self.emit(&format!("@{}", base));
        self.emit("A=D+M");
        self.emit("D=M");
    }

    /// Reads a fixed address onto the stack.
    fn push_direct(&mut self, addr: u16) {
        self.emit(&format!("@{}", addr));
        self.emit("D=M");
    }

    /// Writes the popped value to `*(base) + index`. The target address is
    /// computed first and parked in R13 so the pop can route through D.
    fn pop_indirect(&mut self, base: &str, index: u16) {
        self.emit(&format!("@{}", index));
        self.emit("D=A");
        self.emit(&format!("@{}", base));
        self.emit("D=D+M");
        self.emit(&format!("@{}", TARGET));
        self.emit("M=D");
        self.pop_d();
        self.emit(&format!("@{}", TARGET));
        self.emit("A=M");
        self.emit("M=D");
    }

    /// Writes the popped value to a fixed address.
    fn pop_direct(&mut self, addr: u16) {
        self.pop_d();
        self.emit(&format!("@{}", addr));
        self.emit("M=D");
    }

    /// `*SP = D; SP += 1` -- the tail of every push.
    fn push_d(&mut self) {
        self.emit("@SP");
        self.emit("A=M");
        self.emit("M=D");
        self.emit("@SP");
        self.emit("M=M+1");
    }

    /// `SP -= 1; D = *SP` -- the head of every pop.
    fn pop_d(&mut self) {
        self.emit("@SP");
        self.emit("M=M-1");
        self.emit("A=M");
        self.emit("D=M");
    }

    /// Pops the right operand into D and combines it with the new stack
    /// top in place. Net stack depth -1.
    fn binary(&mut self, combine: &str) {
        self.pop_d();
        self.emit("@SP");
        self.emit("A=M-1");
        self.emit(combine);
    }

    /// Rewrites the current stack top in place. Net depth unchanged.
    fn unary(&mut self, transform: &str) {
        self.emit("@SP");
        self.emit("A=M-1");
        self.emit(transform);
    }

    /// Pops the right operand, computes left - right into D, writes false
    /// (0) into the result slot, then branches to a fresh true label on the
    /// jump condition; the true branch overwrites the slot with -1.
    fn compare(&mut self, name: &str, jump: &str) {
        let (true_label, end_label) = self.fresh_labels(name);
        self.pop_d();
        self.emit("@SP");
        self.emit("M=M-1");
        self.emit("A=M");
        self.emit("D=M-D");
        self.emit("@SP");
        self.emit("A=M");
        self.emit("M=0");
        self.emit(&format!("@{}", true_label));
        self.emit(&format!("D;{}", jump));
        self.emit(&format!("@{}", end_label));
        self.emit("0;JMP");
        self.emit(&format!("({})", true_label));
        self.emit("@SP");
        self.emit("A=M");
        self.emit("M=-1");
        self.emit(&format!("({})", end_label));
        self.emit("@SP");
        self.emit("M=M+1");
    }
}

/// A fixed-base slot must resolve inside the 15-bit address space.
fn direct_addr(segment: Segment, base: u16, index: u16) -> Result<u16, Error> {
    base.checked_add(index)
        .filter(|addr| *addr <= 0x7FFF)
        .ok_or(Error::SegmentIndex(segment, index))
}

/// The pointer segment has exactly two slots.
fn pointer_target(index: u16) -> Result<&'static str, Error> {
    match index {
        0 => Ok("THIS"),
        1 => Ok("THAT"),
        _ => Err(Error::PointerIndex(index)),
    }
}

impl Default for CodeGen {
    fn default() -> Self {
        Self::new()
    }
}
