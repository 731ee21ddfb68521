use lexers::{ArithToken, ArithTokenizer, Spanned};
use log::trace;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown char at pos {position}: {character}")]
    SyntaxError { position: usize, character: char },
}

// Every operator is left associative, '^' included: an incoming operator
// pops anything stacked with the same or higher precedence, so 2^3^2 is
// (2^3)^2.
pub fn precedence(op: char) -> usize {
    match op {
        '(' => 1, // keep at bottom
        '+' | '-' => 2,
        '*' | '/' => 3,
        '^' => 4,
        _ => 0,
    }
}

/// An expression in postfix order, ready to be evaluated with one stack.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<ArithToken>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(ArithTokenizer::new(expr.chars()))
    }

    /// Unbalanced parens are not rejected here: a stray ')' drains the
    /// operator stack and an unclosed '(' is emitted like any operator, so
    /// both surface when the expression is evaluated.
    pub fn parse(lex: impl IntoIterator<Item = Spanned>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::<char>::new();

        for Spanned { token, pos } in lex {
            match token {
                ArithToken::Number(_) => out.push(token),
                ArithToken::Op('(') => stack.push('('),
                ArithToken::Op(')') => {
                    while let Some(top) = stack.pop() {
                        if top == '(' {
                            break;
                        }
                        out.push(ArithToken::Op(top));
                    }
                }
                ArithToken::Op(op) => {
                    let prec_rhs = precedence(op);
                    while let Some(&top) = stack.last() {
                        if precedence(top) < prec_rhs {
                            break;
                        }
                        out.push(ArithToken::Op(top));
                        stack.pop();
                    }
                    stack.push(op);
                }
                ArithToken::Unknown(character) => {
                    return Err(ParseError::SyntaxError { position: pos, character })
                }
            }
        }
        while let Some(top) = stack.pop() {
            out.push(ArithToken::Op(top));
        }
        let rpn = RPNExpr(out);
        trace!("postfix: {}", rpn);
        Ok(rpn)
    }
}
