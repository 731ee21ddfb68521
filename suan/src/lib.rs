pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::rpneval::EvalErr;

mod rpnprint;
pub mod rpneval;
#[cfg(test)]
mod rpneval_test;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

/// Parse `expression` into postfix form and reduce it to a number.
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let rpn = ShuntingParser::parse_str(expression)?;
    Ok(rpn.eval()?)
}
