//! IPPcode24 instruction set and operand signatures.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    CreateFrame,
    PushFrame,
    PopFrame,
    Return,
    Break,
    DefVar,
    Pops,
    Call,
    Label,
    Jump,
    Pushs,
    Write,
    Exit,
    DPrint,
    Move,
    StrLen,
    Type,
    Not,
    Read,
    Int2Char,
    Add,
    Sub,
    Mul,
    IDiv,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    Stri2Int,
    Concat,
    GetChar,
    SetChar,
    JumpIfEq,
    JumpIfNeq,
}

/// Operand kinds a signature can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Var,
    /// A variable or any constant.
    Symb,
    Label,
    Type,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var => write!(f, "var"),
            Self::Symb => write!(f, "symb"),
            Self::Label => write!(f, "label"),
            Self::Type => write!(f, "type"),
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub opcode: Opcode,
    pub name: &'static str,
    pub operands: &'static [OperandKind],
}

use OperandKind::{Label as L, Symb as S, Type as T, Var as V};

const fn rule(opcode: Opcode, name: &'static str, operands: &'static [OperandKind]) -> Rule {
    Rule {
        opcode,
        name,
        operands,
    }
}

/// Indexed by `Opcode as usize`.
pub static GRAMMAR: [Rule; 35] = [
    rule(Opcode::CreateFrame, "CREATEFRAME", &[]),
    rule(Opcode::PushFrame, "PUSHFRAME", &[]),
    rule(Opcode::PopFrame, "POPFRAME", &[]),
    rule(Opcode::Return, "RETURN", &[]),
    rule(Opcode::Break, "BREAK", &[]),
    rule(Opcode::DefVar, "DEFVAR", &[V]),
    rule(Opcode::Pops, "POPS", &[V]),
    rule(Opcode::Call, "CALL", &[L]),
    rule(Opcode::Label, "LABEL", &[L]),
    rule(Opcode::Jump, "JUMP", &[L]),
    rule(Opcode::Pushs, "PUSHS", &[S]),
    rule(Opcode::Write, "WRITE", &[S]),
    rule(Opcode::Exit, "EXIT", &[S]),
    rule(Opcode::DPrint, "DPRINT", &[S]),
    rule(Opcode::Move, "MOVE", &[V, S]),
    rule(Opcode::StrLen, "STRLEN", &[V, S]),
    rule(Opcode::Type, "TYPE", &[V, S]),
    rule(Opcode::Not, "NOT", &[V, S]),
    rule(Opcode::Read, "READ", &[V, T]),
    rule(Opcode::Int2Char, "INT2CHAR", &[V, S]),
    rule(Opcode::Add, "ADD", &[V, S, S]),
    rule(Opcode::Sub, "SUB", &[V, S, S]),
    rule(Opcode::Mul, "MUL", &[V, S, S]),
    rule(Opcode::IDiv, "IDIV", &[V, S, S]),
    rule(Opcode::Lt, "LT", &[V, S, S]),
    rule(Opcode::Gt, "GT", &[V, S, S]),
    rule(Opcode::Eq, "EQ", &[V, S, S]),
    rule(Opcode::And, "AND", &[V, S, S]),
    rule(Opcode::Or, "OR", &[V, S, S]),
    rule(Opcode::Stri2Int, "STRI2INT", &[V, S, S]),
    rule(Opcode::Concat, "CONCAT", &[V, S, S]),
    rule(Opcode::GetChar, "GETCHAR", &[V, S, S]),
    rule(Opcode::SetChar, "SETCHAR", &[V, S, S]),
    rule(Opcode::JumpIfEq, "JUMPIFEQ", &[L, S, S]),
    rule(Opcode::JumpIfNeq, "JUMPIFNEQ", &[L, S, S]),
];

impl Opcode {
    /// Case-insensitive lookup by instruction name.
    pub fn from_name(word: &str) -> Option<Self> {
        GRAMMAR
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(word))
            .map(|r| r.opcode)
    }

    pub fn rule(self) -> &'static Rule {
        &GRAMMAR[self as usize]
    }

    /// Canonical uppercase name.
    pub fn name(self) -> &'static str {
        self.rule().name
    }

    pub fn signature(self) -> &'static [OperandKind] {
        self.rule().operands
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
