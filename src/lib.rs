mod emit;
mod error;
mod grammar;
mod lex;
mod parse;
mod source;

pub mod cli;

use std::io::{BufRead, Write};

pub use emit::{render, LANGUAGE};
pub use error::{Error, Result, SyntaxError};
pub use grammar::{OperandKind, Opcode};
pub use lex::{tokenize, ConstKind, Token, TokenKind};
pub use parse::{validate, Instruction, Program};
pub use source::HEADER;

/// Reads and validates a whole IPPcode24 program.
pub fn make_program<R: BufRead>(reader: R) -> Result<Program> {
    let lines = source::read_source(reader)?;
    parse::parse(&lines)
}

/// Runs the whole pipeline. Nothing is written unless every instruction
/// is valid.
pub fn translate<R: BufRead, W: Write>(reader: R, writer: W) -> Result<()> {
    let program = make_program(reader)?;
    emit::write_document(&program, writer)
}
