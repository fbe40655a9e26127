use strum::{Display, EnumString};

/// The nine arithmetic-logic operator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

/// The eight memory segments, each with its own addressing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Segment {
    Argument,
    Local,
    This,
    That,
    Constant,
    Static,
    Pointer,
    Temp,
}

/// One classified VM command.
///
/// The branching and function commands are part of the grammar but carry no
/// generator behavior; the translator recognizes and skips them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Arithmetic(Operator),
    Push(Segment, u16),
    Pop(Segment, u16),
    Label(String),
    Goto(String),
    IfGoto(String),
    Function(String, u16),
    Call(String, u16),
    Return,
}

impl Command {
    /// Classifies one trimmed, comment-free, non-empty line by its first
    /// whitespace-separated token. `None` means the line is malformed.
    pub fn classify(line: &str) -> Option<Command> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (&head, args) = words.split_first()?;

        if let Ok(op) = head.parse::<Operator>() {
            return Some(Command::Arithmetic(op));
        }

        match head {
            "push" | "pop" => {
                let segment = args.first()?.parse::<Segment>().ok()?;
                let index = args.get(1)?.parse::<u16>().ok()?;
                Some(match head {
                    "push" => Command::Push(segment, index),
                    _ => Command::Pop(segment, index),
                })
            }
            "label" => Some(Command::Label(args.first()?.to_string())),
            "goto" => Some(Command::Goto(args.first()?.to_string())),
            "if-goto" => Some(Command::IfGoto(args.first()?.to_string())),
            "function" => Some(Command::Function(
                args.first()?.to_string(),
                args.get(1)?.parse::<u16>().ok()?,
            )),
            "call" => Some(Command::Call(
                args.first()?.to_string(),
                args.get(1)?.parse::<u16>().ok()?,
            )),
            "return" => Some(Command::Return),
            _ => None,
        }
    }

    /// Operator name; defined only for arithmetic commands.
    pub fn arg1(&self) -> Option<String> {
        match self {
            Command::Arithmetic(op) => Some(op.to_string()),
            _ => None,
        }
    }

    /// Segment index; defined only for push and pop.
    pub fn arg2(&self) -> Option<u16> {
        match self {
            Command::Push(_, index) | Command::Pop(_, index) => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_commands() {
        assert_eq!(
            Command::classify("add"),
            Some(Command::Arithmetic(Operator::Add))
        );
        assert_eq!(
            Command::classify("not"),
            Some(Command::Arithmetic(Operator::Not))
        );
        assert_eq!(
            Command::classify("lt"),
            Some(Command::Arithmetic(Operator::Lt))
        );
    }

    #[test]
    fn push_pop_commands() {
        assert_eq!(
            Command::classify("push constant 7"),
            Some(Command::Push(Segment::Constant, 7))
        );
        assert_eq!(
            Command::classify("pop local 3"),
            Some(Command::Pop(Segment::Local, 3))
        );
        assert_eq!(
            Command::classify("push  temp   2"),
            Some(Command::Push(Segment::Temp, 2))
        );
    }

    #[test]
    fn grammar_only_commands() {
        assert_eq!(
            Command::classify("label WHILE_TOP"),
            Some(Command::Label("WHILE_TOP".to_string()))
        );
        assert_eq!(
            Command::classify("if-goto WHILE_TOP"),
            Some(Command::IfGoto("WHILE_TOP".to_string()))
        );
        assert_eq!(
            Command::classify("function Main.main 2"),
            Some(Command::Function("Main.main".to_string(), 2))
        );
        assert_eq!(
            Command::classify("call Math.max 2"),
            Some(Command::Call("Math.max".to_string(), 2))
        );
        assert_eq!(Command::classify("return"), Some(Command::Return));
    }

    #[test]
    fn malformed_commands() {
        assert_eq!(Command::classify("frobnicate"), None);
        assert_eq!(Command::classify("push"), None);
        assert_eq!(Command::classify("push constant"), None);
        assert_eq!(Command::classify("push heap 3"), None);
        assert_eq!(Command::classify("pop local x"), None);
        assert_eq!(Command::classify("push constant -1"), None);
    }

    #[test]
    fn arg1_only_for_arithmetic() {
        assert_eq!(
            Command::classify("sub").unwrap().arg1(),
            Some("sub".to_string())
        );
        assert_eq!(Command::classify("push constant 7").unwrap().arg1(), None);
        assert_eq!(Command::classify("return").unwrap().arg1(), None);
    }

    #[test]
    fn arg2_only_for_push_pop() {
        assert_eq!(Command::classify("push constant 7").unwrap().arg2(), Some(7));
        assert_eq!(Command::classify("pop that 5").unwrap().arg2(), Some(5));
        assert_eq!(Command::classify("add").unwrap().arg2(), None);
        assert_eq!(Command::classify("label L").unwrap().arg2(), None);
    }
}
