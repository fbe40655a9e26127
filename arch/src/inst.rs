use crate::code;

/// Operand of an address instruction: `@123` or `@symbol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(u16),
    Symbol(String),
}

/// One classified assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// `@operand` -- load an address into the A register.
    Addr(Operand),
    /// `dest=comp;jump` -- comp is mandatory, dest and jump are optional.
    Comp {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
    /// `(SYMBOL)` -- binds the symbol to the address of the next instruction.
    Label(String),
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

impl Inst {
    /// Classifies one trimmed, comment-free, non-empty line.
    ///
    /// Checked in precedence order: label, address, compute. `None` means
    /// the line matches none of the three forms.
    pub fn classify(line: &str) -> Option<Inst> {
        if let Some(interior) = line.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            if !interior.is_empty() && interior.chars().all(is_symbol_char) {
                return Some(Inst::Label(interior.to_string()));
            }
            return None;
        }

        if let Some(operand) = line.strip_prefix('@') {
            if operand.is_empty() {
                return None;
            }
            if operand.chars().all(|c| c.is_ascii_digit()) {
                return operand
                    .parse::<u16>()
                    .ok()
                    .map(|v| Inst::Addr(Operand::Literal(v)));
            }
            if operand.chars().all(is_symbol_char) {
                return Some(Inst::Addr(Operand::Symbol(operand.to_string())));
            }
            return None;
        }

        let (dest, rest) = match line.split_once('=') {
            Some((d, r)) => (Some(d), r),
            None => (None, line),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((c, j)) => (c, Some(j)),
            None => (rest, None),
        };

        // An empty or unrecognized mnemonic in any field invalidates the line.
        code::comp(comp)?;
        if let Some(d) = dest {
            code::dest(d)?;
        }
        if let Some(j) = jump {
            code::jump(j)?;
        }

        Some(Inst::Comp {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        })
    }

    /// Interior of a label or the operand text of an address instruction.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Inst::Label(s) => Some(s),
            Inst::Addr(Operand::Symbol(s)) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(
            Inst::classify("(LOOP)"),
            Some(Inst::Label("LOOP".to_string()))
        );
        assert_eq!(
            Inst::classify("(ball.move$if_end0)"),
            Some(Inst::Label("ball.move$if_end0".to_string()))
        );
        assert_eq!(Inst::classify("()"), None);
        assert_eq!(Inst::classify("(BAD LABEL)"), None);
        assert_eq!(Inst::classify("(LOOP"), None);
    }

    #[test]
    fn addresses() {
        assert_eq!(Inst::classify("@2"), Some(Inst::Addr(Operand::Literal(2))));
        assert_eq!(
            Inst::classify("@16384"),
            Some(Inst::Addr(Operand::Literal(16384)))
        );
        assert_eq!(
            Inst::classify("@counter"),
            Some(Inst::Addr(Operand::Symbol("counter".to_string())))
        );
        assert_eq!(
            Inst::classify("@R13"),
            Some(Inst::Addr(Operand::Symbol("R13".to_string())))
        );
        assert_eq!(Inst::classify("@"), None);
        assert_eq!(Inst::classify("@no spaces"), None);
        // a digits-only operand above the word size is no instruction at all
        assert_eq!(Inst::classify("@99999"), None);
    }

    #[test]
    fn computes() {
        assert_eq!(
            Inst::classify("D=A"),
            Some(Inst::Comp {
                dest: Some("D".to_string()),
                comp: "A".to_string(),
                jump: None,
            })
        );
        assert_eq!(
            Inst::classify("0;JMP"),
            Some(Inst::Comp {
                dest: None,
                comp: "0".to_string(),
                jump: Some("JMP".to_string()),
            })
        );
        assert_eq!(
            Inst::classify("DM=M+1;JGT"),
            Some(Inst::Comp {
                dest: Some("DM".to_string()),
                comp: "M+1".to_string(),
                jump: Some("JGT".to_string()),
            })
        );
    }

    #[test]
    fn invalid_computes() {
        // comp is mandatory and strictly validated
        assert_eq!(Inst::classify("D=D+D"), None);
        assert_eq!(Inst::classify("D="), None);
        // dest present but empty or unrecognized
        assert_eq!(Inst::classify("=D+1"), None);
        assert_eq!(Inst::classify("X=D"), None);
        // jump present but empty or unrecognized
        assert_eq!(Inst::classify("D;"), None);
        assert_eq!(Inst::classify("D;JUMP"), None);
        // plain garbage
        assert_eq!(Inst::classify("hello world"), None);
    }

    #[test]
    fn symbol_accessor() {
        assert_eq!(Inst::classify("(END)").unwrap().symbol(), Some("END"));
        assert_eq!(Inst::classify("@sum").unwrap().symbol(), Some("sum"));
        assert_eq!(Inst::classify("@42").unwrap().symbol(), None);
        assert_eq!(Inst::classify("D=A").unwrap().symbol(), None);
    }
}
