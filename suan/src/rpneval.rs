use crate::parser::RPNExpr;
use lexers::ArithToken;
use log::debug;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErr {
    #[error("invalid syntax: operator is missing an operand")]
    InsufficientOperands,
    #[error("unknown operator: {0}")]
    UnknownOperator(char),
    #[error("invalid syntax: operands and operators don't balance")]
    MalformedExpression,
}

fn apply(op: char, l: f64, r: f64) -> Result<f64, EvalErr> {
    match op {
        '+' => Ok(l + r),
        '-' => Ok(l - r),
        '*' => Ok(l * r),
        '/' => Ok(l / r),
        '^' => Ok(l.powf(r)),
        _ => Err(EvalErr::UnknownOperator(op)),
    }
}

/// Reduce a postfix expression with a single value stack. Division by zero
/// follows IEEE-754 and yields inf or NaN.
pub fn eval(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    let mut operands = Vec::new();

    for token in rpn.0.iter() {
        match *token {
            ArithToken::Number(num) => operands.push(num),
            ArithToken::Op(op) => {
                if operands.len() < 2 {
                    return Err(EvalErr::InsufficientOperands);
                }
                let args = operands.split_off(operands.len() - 2);
                let (l, r) = (args[0], args[1]);
                let value = apply(op, l, r)?;
                debug!("{} {} {} = {}", l, op, r, value);
                operands.push(value);
            }
            ArithToken::Unknown(c) => return Err(EvalErr::UnknownOperator(c)),
        }
    }
    match operands[..] {
        [result] => Ok(result),
        _ => {
            debug!("{} values left on the stack", operands.len());
            Err(EvalErr::MalformedExpression)
        }
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        eval(self)
    }
}
