use crate::error::CompileError;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Ключевые слова
    Return,
    // Операторы
    Assign,       // =
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=
    // Скобки и разделители
    LParen,    // (
    RParen,    // )
    Semicolon, // ;
    // Идентификаторы и литералы
    Identifier(String),
    Number(i64),
    // Специальные
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Return => "return",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Number(value) => return write!(f, "{value}"),
            Self::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokens = Vec::new();
    let bytes = source.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];
        match ch {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
            }
            b'0'..=b'9' => {
                tokens.push(lex_number(source, &mut pos)?);
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                tokens.push(lex_identifier(source, &mut pos));
            }
            // Двухсимвольные операторы пробуем раньше односимвольных
            b'=' => {
                if bytes.get(pos + 1) == Some(&b'=') {
                    tokens.push(Token::new(TokenKind::Equal, pos, pos + 2));
                    pos += 2;
                } else {
                    tokens.push(Token::new(TokenKind::Assign, pos, pos + 1));
                    pos += 1;
                }
            }
            b'!' if bytes.get(pos + 1) == Some(&b'=') => {
                tokens.push(Token::new(TokenKind::NotEqual, pos, pos + 2));
                pos += 2;
            }
            b'<' => {
                if bytes.get(pos + 1) == Some(&b'=') {
                    tokens.push(Token::new(TokenKind::LessEqual, pos, pos + 2));
                    pos += 2;
                } else {
                    tokens.push(Token::new(TokenKind::Less, pos, pos + 1));
                    pos += 1;
                }
            }
            b'>' => {
                if bytes.get(pos + 1) == Some(&b'=') {
                    tokens.push(Token::new(TokenKind::GreaterEqual, pos, pos + 2));
                    pos += 2;
                } else {
                    tokens.push(Token::new(TokenKind::Greater, pos, pos + 1));
                    pos += 1;
                }
            }
            b'+' => {
                tokens.push(Token::new(TokenKind::Plus, pos, pos + 1));
                pos += 1;
            }
            b'-' => {
                tokens.push(Token::new(TokenKind::Minus, pos, pos + 1));
                pos += 1;
            }
            b'*' => {
                tokens.push(Token::new(TokenKind::Star, pos, pos + 1));
                pos += 1;
            }
            b'/' => {
                tokens.push(Token::new(TokenKind::Slash, pos, pos + 1));
                pos += 1;
            }
            b'(' => {
                tokens.push(Token::new(TokenKind::LParen, pos, pos + 1));
                pos += 1;
            }
            b')' => {
                tokens.push(Token::new(TokenKind::RParen, pos, pos + 1));
                pos += 1;
            }
            b';' => {
                tokens.push(Token::new(TokenKind::Semicolon, pos, pos + 1));
                pos += 1;
            }
            _ => {
                let offending = source[pos..].chars().next().unwrap_or('\0');
                return Err(CompileError::LexError {
                    message: format!("unrecognized character '{offending}'"),
                    offset: pos,
                });
            }
        }
    }

    tokens.push(Token::new(TokenKind::Eof, source.len(), source.len()));
    Ok(tokens)
}

fn lex_number(source: &str, pos: &mut usize) -> Result<Token, CompileError> {
    let start = *pos;
    let bytes = source.as_bytes();

    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }

    let text = &source[start..*pos];
    let value = text.parse::<i64>().map_err(|_| CompileError::LexError {
        message: format!("number literal '{text}' does not fit a 64-bit integer"),
        offset: start,
    })?;

    Ok(Token::new(TokenKind::Number(value), start, *pos))
}

fn lex_identifier(source: &str, pos: &mut usize) -> Token {
    let start = *pos;
    let bytes = source.as_bytes();

    while *pos < bytes.len() && (bytes[*pos].is_ascii_alphanumeric() || bytes[*pos] == b'_') {
        *pos += 1;
    }

    let text = &source[start..*pos];
    let kind = match text {
        "return" => TokenKind::Return,
        _ => TokenKind::Identifier(text.to_string()),
    };

    Token::new(kind, start, *pos)
}
