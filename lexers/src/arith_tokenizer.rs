#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

static OPERATORS: &str = "+-*/^()";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ArithToken {
    Number(f64),
    Op(char),
    Unknown(char),
}

impl fmt::Display for ArithToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArithToken::Number(n) => write!(f, "{}", n),
            ArithToken::Op(c) | ArithToken::Unknown(c) => write!(f, "{}", c),
        }
    }
}

/// A token tagged with the char index where it starts in the input.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spanned {
    pub token: ArithToken,
    pub pos: usize,
}

/// Splits plain arithmetic into integer literals, the `+-*/^()` operators
/// and single unknown chars. Whitespace only separates tokens.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<Spanned> {
        self.src.skip_ws();
        let pos = self.src.lexeme_start();
        let token = if self.src.skip_all(|c| c.is_ascii_digit()) {
            let value = self.src.extract().into_iter()
                .fold(0.0, |acc, d| acc * 10.0 + f64::from(d as u8 - b'0'));
            ArithToken::Number(value)
        } else if let Some(op) = self.src.accept_any_char(OPERATORS) {
            self.src.ignore();
            ArithToken::Op(op)
        } else if let Some(other) = self.src.next() {
            self.src.ignore();
            ArithToken::Unknown(other)
        } else {
            return None;
        };
        Some(Spanned{token, pos})
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = Spanned;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
