use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};
use crate::lex::{Token, TokenKind};
use crate::parse::{Instruction, Program};

pub const LANGUAGE: &str = "IPPcode24";

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "    ";

/// The XML 1.0 `Char` production. Anything else cannot appear in the
/// document, not even as a character reference.
pub(crate) fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{d7ff}' | '\u{e000}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}'
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            ch => out.push(ch),
        }
    }
    out
}

/// `type` attribute and element text of an operand.
fn operand(token: &Token) -> (&'static str, &str) {
    match token.kind {
        TokenKind::Variable => ("var", token.lexeme.as_str()),
        TokenKind::Constant(c) => (c.as_str(), token.value()),
        TokenKind::Type => ("type", token.value()),
        TokenKind::Label => ("label", token.value()),
        // never accepted by the validator
        TokenKind::Opcode(_) | TokenKind::Unknown => ("unknown", token.lexeme.as_str()),
    }
}

fn render_instruction(out: &mut String, order: usize, ins: &Instruction) {
    let open = format!(
        r#"{INDENT}<instruction order="{order}" opcode="{}""#,
        ins.opcode
    );

    if ins.operands.is_empty() {
        out.push_str(&open);
        out.push_str("/>\n");
        return;
    }

    out.push_str(&open);
    out.push_str(">\n");

    for (idx, token) in ins.operands.iter().enumerate() {
        let (ty, text) = operand(token);
        let tag = format!("arg{}", idx + 1);

        out.push_str(&format!(r#"{INDENT}{INDENT}<{tag} type="{ty}""#));
        if text.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push_str(&format!(">{}</{tag}>\n", escape(text)));
        }
    }

    out.push_str(INDENT);
    out.push_str("</instruction>\n");
}

/// Renders the whole program; `order` counts emitted instructions from 1.
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push('\n');

    let root = format!(r#"<program language="{LANGUAGE}""#);

    if program.instructions.is_empty() {
        out.push_str(&root);
        out.push_str("/>\n");
        return out;
    }

    out.push_str(&root);
    out.push_str(">\n");

    for (i, ins) in program.instructions.iter().enumerate() {
        render_instruction(&mut out, i + 1, ins);
    }

    out.push_str("</program>\n");
    out
}

pub fn write_document<W: Write>(program: &Program, mut writer: W) -> Result<()> {
    let document = render(program);

    writer
        .write_all(document.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(Error::Output)?;

    debug!(bytes = document.len(), "document written");
    Ok(())
}
