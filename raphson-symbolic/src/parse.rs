use std::str::FromStr;

use thiserror::Error;

use crate::expr::{Expr, Func};

/// Errors that can occur when parsing an expression.
///
/// Offsets are byte positions into the input string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unknown function {name:?} at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("expression nested deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

/// Maximum nesting of parentheses, calls, signs, and exponents.
const MAX_DEPTH: usize = 256;

/// Parses an expression from text.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };

    let expr = parser.expression()?;
    match parser.peek() {
        None => Ok(expr),
        Some((token, offset)) => Err(ParseError::UnexpectedToken {
            found: token.describe(),
            offset: *offset,
        }),
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {n}"),
            Token::Identifier(name) => format!("identifier {name:?}"),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
            Token::Star => "'*'".into(),
            Token::Slash => "'/'".into(),
            Token::Caret => "'^'".into(),
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
        }
    }
}

/// Splits the input into tokens paired with their byte offsets.
fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        let start = pos;

        if c.is_ascii_whitespace() {
            pos += 1;
        } else if c.is_ascii_digit() || c == b'.' {
            pos = scan_number(bytes, pos);
            let text = &input[start..pos];
            let value = text
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    text: text.to_owned(),
                    offset: start,
                })?;
            tokens.push((Token::Number(value), start));
        } else if c.is_ascii_alphabetic() || c == b'_' {
            while pos < bytes.len()
                && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
            {
                pos += 1;
            }
            tokens.push((Token::Identifier(input[start..pos].to_owned()), start));
        } else {
            let token = match c {
                b'+' => Token::Plus,
                b'-' => Token::Minus,
                b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                    pos += 1;
                    Token::Caret
                }
                b'*' => Token::Star,
                b'/' => Token::Slash,
                b'^' => Token::Caret,
                b'(' => Token::LParen,
                b')' => Token::RParen,
                _ => {
                    let ch = input[start..].chars().next().unwrap_or('\u{fffd}');
                    return Err(ParseError::UnexpectedChar { ch, offset: start });
                }
            };
            pos += 1;
            tokens.push((token, start));
        }
    }

    Ok(tokens)
}

/// Returns the end of the number starting at `pos`.
///
/// An exponent is only consumed when digits follow the `e`, so `2e` stops
/// before the `e`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            pos = exp;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }

    pos
}

/// Recursive-descent parser over a token list.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := ('-' | '+') unary | power
/// power      := primary ('^' unary)?
/// primary    := number | identifier | identifier '(' expression ')' | '(' expression ')'
/// ```
///
/// Every cycle through the grammar passes `unary`, which tracks the nesting
/// depth and fails past [`MAX_DEPTH`].
struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<(Token, usize), ParseError> {
        let item = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(item)
    }

    /// Consumes the next token if it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().is_some_and(|(token, _)| token == expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        let (token, offset) = self.next()?;
        if &token == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                found: token.describe(),
                offset,
            })
        }
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;
        loop {
            if self.eat(&Token::Plus) {
                left = left + self.term()?;
            } else if self.eat(&Token::Minus) {
                left = left - self.term()?;
            } else {
                return Ok(left);
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        loop {
            if self.eat(&Token::Star) {
                left = left * self.unary()?;
            } else if self.eat(&Token::Slash) {
                left = left / self.unary()?;
            } else {
                return Ok(left);
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.depth == MAX_DEPTH {
            let offset = self.peek().map_or(0, |(_, offset)| *offset);
            return Err(ParseError::TooDeep {
                limit: MAX_DEPTH,
                offset,
            });
        }

        self.depth += 1;
        let result = self.signed();
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            return Ok(-self.unary()?);
        }
        if self.eat(&Token::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.eat(&Token::Caret) {
            Ok(base.pow(self.unary()?))
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let (token, offset) = self.next()?;
        match token {
            Token::Number(value) => Ok(Expr::num(value)),
            Token::Identifier(name) => {
                if !self.eat(&Token::LParen) {
                    return Ok(Expr::var(name));
                }
                let func = Func::from_name(&name)
                    .ok_or(ParseError::UnknownFunction { name, offset })?;
                let arg = self.expression()?;
                self.expect(&Token::RParen)?;
                Ok(Expr::call(func, arg))
            }
            Token::LParen => {
                let inner = self.expression()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            other => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                offset,
            }),
        }
    }
}
