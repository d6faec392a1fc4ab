use std::fmt;

use tracing::trace;

use crate::grammar::Opcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstKind {
    Int,
    Bool,
    String,
    Nil,
}

impl ConstKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Nil => "nil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Opcode(Opcode),
    Variable,
    Constant(ConstKind),
    Type,
    Label,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opcode(_) => write!(f, "opcode"),
            Self::Variable => write!(f, "var"),
            Self::Constant(c) => f.write_str(c.as_str()),
            Self::Type => write!(f, "type"),
            Self::Label => write!(f, "label"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: &str) -> Self {
        let kind = classify(lexeme);
        trace!(lexeme, ?kind, "classified token");

        Self {
            lexeme: lexeme.to_owned(),
            kind,
        }
    }

    /// Text after the first `@`, or the whole lexeme when there is none.
    pub fn value(&self) -> &str {
        match self.lexeme.split_once('@') {
            Some((_, rest)) => rest,
            None => self.lexeme.as_str(),
        }
    }
}

fn is_symbol_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '$' | '&' | '%' | '*' | '!' | '?')
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_symbol_char)
}

fn is_variable(word: &str) -> bool {
    match word.split_once('@') {
        Some(("GF" | "LF" | "TF", name)) => is_identifier(name),
        _ => false,
    }
}

fn is_int_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// Rules are tried in order and the first one that matches wins; an opcode
/// name is never a label and `string@...` swallows anything after the `@`.
fn classify(word: &str) -> TokenKind {
    if let Some(opcode) = Opcode::from_name(word) {
        return TokenKind::Opcode(opcode);
    }

    if is_variable(word) {
        return TokenKind::Variable;
    }

    if let Some((prefix, value)) = word.split_once('@') {
        let constant = match prefix {
            "int" if is_int_literal(value) => Some(ConstKind::Int),
            "bool" if matches!(value, "true" | "false") => Some(ConstKind::Bool),
            "string" => Some(ConstKind::String),
            "nil" if value == "nil" => Some(ConstKind::Nil),
            _ => None,
        };

        return constant.map_or(TokenKind::Unknown, TokenKind::Constant);
    }

    match word {
        "int" | "bool" | "string" => TokenKind::Type,
        w if is_identifier(w) => TokenKind::Label,
        _ => TokenKind::Unknown,
    }
}

/// Splits a cleaned source line on whitespace and classifies every word.
pub fn tokenize(line: &str) -> Vec<Token> {
    line.split_whitespace().map(Token::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(source: &str) -> TokenKind {
        tokenize(source).remove(0).kind
    }

    #[test]
    fn tokenize_opcode() {
        assert_eq!(single("MOVE"), TokenKind::Opcode(Opcode::Move));
        assert_eq!(single("move"), TokenKind::Opcode(Opcode::Move));
        assert_eq!(single("CreateFrame"), TokenKind::Opcode(Opcode::CreateFrame));
        assert_eq!(single("jumpifneq"), TokenKind::Opcode(Opcode::JumpIfNeq));
    }

    #[test]
    fn tokenize_variable() {
        assert_eq!(single("GF@x"), TokenKind::Variable);
        assert_eq!(single("LF@_tmp-1"), TokenKind::Variable);
        assert_eq!(single("TF@$&%*!?"), TokenKind::Variable);
        assert_eq!(single("gf@x"), TokenKind::Unknown);
        assert_eq!(single("GF@"), TokenKind::Unknown);
        assert_eq!(single("XF@x"), TokenKind::Unknown);
        assert_eq!(single("GF@a.b"), TokenKind::Unknown);
    }

    #[test]
    fn tokenize_constant() {
        use ConstKind::*;

        assert_eq!(single("int@5"), TokenKind::Constant(Int));
        assert_eq!(single("int@-42"), TokenKind::Constant(Int));
        assert_eq!(single("int@+0"), TokenKind::Constant(Int));
        assert_eq!(single("bool@true"), TokenKind::Constant(Bool));
        assert_eq!(single("bool@false"), TokenKind::Constant(Bool));
        assert_eq!(single("string@"), TokenKind::Constant(String));
        assert_eq!(single("string@hello\\032world"), TokenKind::Constant(String));
        assert_eq!(single("string@a@b<c"), TokenKind::Constant(String));
        assert_eq!(single("nil@nil"), TokenKind::Constant(Nil));
    }

    #[test]
    fn tokenize_bad_constant() {
        assert_eq!(single("int@"), TokenKind::Unknown);
        assert_eq!(single("int@-"), TokenKind::Unknown);
        assert_eq!(single("int@0x1F"), TokenKind::Unknown);
        assert_eq!(single("bool@True"), TokenKind::Unknown);
        assert_eq!(single("nil@null"), TokenKind::Unknown);
        assert_eq!(single("float@1.0"), TokenKind::Unknown);
    }

    #[test]
    fn tokenize_type_and_label() {
        assert_eq!(single("int"), TokenKind::Type);
        assert_eq!(single("bool"), TokenKind::Type);
        assert_eq!(single("string"), TokenKind::Type);
        assert_eq!(single("nil"), TokenKind::Label);
        assert_eq!(single("Int"), TokenKind::Label);
        assert_eq!(single("loop_1"), TokenKind::Label);
        assert_eq!(single("$end!"), TokenKind::Label);
        assert_eq!(single("a.b"), TokenKind::Unknown);
    }

    #[test]
    fn opcode_names_win_over_labels() {
        assert_eq!(single("label"), TokenKind::Opcode(Opcode::Label));
        assert_eq!(single("type"), TokenKind::Opcode(Opcode::Type));
    }

    #[test]
    fn splits_on_whitespace_runs() {
        let tokens = tokenize("MOVE \t GF@x   int@5");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, ["MOVE", "GF@x", "int@5"]);
    }

    #[test]
    fn value_after_first_at() {
        assert_eq!(Token::new("string@a@b").value(), "a@b");
        assert_eq!(Token::new("int@5").value(), "5");
        assert_eq!(Token::new("loop").value(), "loop");
    }
}
