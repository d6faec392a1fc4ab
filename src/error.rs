use std::io;

use thiserror::Error;

use crate::grammar::{OperandKind, Opcode};
use crate::lex::TokenKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("Error reading input: {0}")]
    Input(#[source] io::Error),

    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),

    #[error("Error: Missing or incorrect header.")]
    Header,

    #[error("Syntax error @ line {line}: {error}")]
    Syntax {
        line: usize,
        #[source]
        error: SyntaxError,
    },
}

/// Why a single instruction was rejected. `index` is 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("first token must be an opcode")]
    MissingOpcode,

    #[error("incorrect number of operands for {opcode}: expected {expected}, got {actual}")]
    OperandCount {
        opcode: Opcode,
        expected: usize,
        actual: usize,
    },

    #[error("opcode {opcode}: operand {index} expected {expected}, got {actual} ('{lexeme}')")]
    OperandKind {
        opcode: Opcode,
        index: usize,
        expected: OperandKind,
        actual: TokenKind,
        lexeme: String,
    },

    #[error("opcode {opcode}: operand {index} contains {ch:?}, which XML cannot represent")]
    InvalidChar {
        opcode: Opcode,
        index: usize,
        ch: char,
    },
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 10,
            Self::Input(_) => 11,
            Self::Output(_) => 12,
            Self::Header => 21,
            Self::Syntax { .. } => 23,
        }
    }
}
