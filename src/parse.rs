use tracing::debug;

use crate::emit;
use crate::error::{Error, Result, SyntaxError};
use crate::grammar::{OperandKind, Opcode};
use crate::lex::{self, Token, TokenKind};
use crate::source::Line;

/// An opcode whose operands matched its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<Token>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

fn accepts(expected: OperandKind, actual: TokenKind) -> bool {
    matches!(
        (expected, actual),
        (OperandKind::Symb, TokenKind::Variable | TokenKind::Constant(_))
            | (OperandKind::Var, TokenKind::Variable)
            | (OperandKind::Label, TokenKind::Label)
            | (OperandKind::Type, TokenKind::Type)
    )
}

/// Checks one tokenized line against the instruction grammar.
pub fn validate(tokens: Vec<Token>) -> std::result::Result<Instruction, SyntaxError> {
    let mut it = tokens.into_iter();

    let opcode = match it.next().map(|t| t.kind) {
        Some(TokenKind::Opcode(op)) => op,
        _ => return Err(SyntaxError::MissingOpcode),
    };

    let operands: Vec<Token> = it.collect();
    let expected = opcode.signature();

    if operands.len() != expected.len() {
        return Err(SyntaxError::OperandCount {
            opcode,
            expected: expected.len(),
            actual: operands.len(),
        });
    }

    for (idx, (operand, want)) in operands.iter().zip(expected).enumerate() {
        if !accepts(*want, operand.kind) {
            return Err(SyntaxError::OperandKind {
                opcode,
                index: idx + 1,
                expected: *want,
                actual: operand.kind,
                lexeme: operand.lexeme.clone(),
            });
        }

        // string constants take any text, the document cannot
        if let Some(ch) = operand.lexeme.chars().find(|ch| !emit::is_xml_char(*ch)) {
            return Err(SyntaxError::InvalidChar {
                opcode,
                index: idx + 1,
                ch,
            });
        }
    }

    Ok(Instruction { opcode, operands })
}

pub fn parse_line(line: &Line) -> Result<Instruction> {
    validate(lex::tokenize(&line.text)).map_err(|error| Error::Syntax {
        line: line.number,
        error,
    })
}

/// Validates every line; the first bad one aborts.
pub fn parse(lines: &[Line]) -> Result<Program> {
    let instructions = lines.iter().map(parse_line).collect::<Result<Vec<_>>>()?;
    debug!(count = instructions.len(), "program validated");

    Ok(Program { instructions })
}
