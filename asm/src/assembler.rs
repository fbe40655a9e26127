use arch::code;
use arch::inst::{Inst, Operand};
use arch::symbols::SymbolTable;

use crate::error::Error;
use crate::parser::Line;

/// One encoded machine word and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Instruction address (position in the output, not the source).
    pub addr: u16,
    /// 16 characters of `0`/`1`.
    pub bits: String,
    /// 1-based source line number.
    pub line: usize,
}

/// Two-pass driver: pass 1 binds labels, pass 2 resolves and encodes.
pub struct Assembler {
    symbols: SymbolTable,
    next_addr: u16,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler {
            symbols: SymbolTable::new(),
            // first free slot after R0..R15
            next_addr: 16,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Pass 1. Labels bind to the address of the next real instruction;
    /// they consume no address slot themselves. Re-definitions keep the
    /// first binding.
    pub fn collect_labels(&mut self, lines: &[Line]) {
        let mut counter: u16 = 0;
        for line in lines {
            match line.stmt() {
                Some(Inst::Label(symbol)) => self.symbols.add_entry(symbol, counter),
                Some(Inst::Addr(_)) | Some(Inst::Comp { .. }) => counter += 1,
                None => {}
            }
        }
    }

    /// Pass 2. Unknown address symbols are bound to fresh variable slots in
    /// first-encountered order. Labels emit nothing; output order equals
    /// source order.
    pub fn encode(&mut self, lines: &[Line]) -> Result<Vec<Word>, Error> {
        let mut words = Vec::new();
        for line in lines {
            let bits = match line.stmt() {
                Some(Inst::Addr(operand)) => Some(self.encode_addr(operand)),
                Some(Inst::Comp { dest, comp, jump }) => {
                    Some(Self::encode_comp(dest, comp, jump)?)
                }
                Some(Inst::Label(_)) | None => None,
            };
            if let Some(bits) = bits {
                words.push(Word {
                    addr: words.len() as u16,
                    bits,
                    line: line.no(),
                });
            }
        }
        Ok(words)
    }

    /// Infallible: a symbol unknown after pass 1 is by definition a fresh
    /// variable and gets the next free slot.
    fn encode_addr(&mut self, operand: &Operand) -> String {
        let addr = match operand {
            Operand::Literal(value) => *value,
            Operand::Symbol(symbol) => match self.symbols.get_address(symbol) {
                Some(addr) => addr,
                None => {
                    let addr = self.next_addr;
                    self.symbols.add_entry(symbol, addr);
                    self.next_addr += 1;
                    addr
                }
            },
        };
        format!("0{:015b}", addr & 0x7FFF)
    }

    fn encode_comp(
        dest: &Option<String>,
        comp: &str,
        jump: &Option<String>,
    ) -> Result<String, Error> {
        let c = code::comp(comp).ok_or_else(|| Error::UnknownMnemonic(comp.to_string()))?;
        let d = match dest {
            Some(d) => code::dest(d).ok_or_else(|| Error::UnknownMnemonic(d.clone()))?,
            None => "000",
        };
        let j = match jump {
            Some(j) => code::jump(j).ok_or_else(|| Error::UnknownMnemonic(j.clone()))?,
            None => "000",
        };
        Ok(format!("111{}{}{}", c, d, j))
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
