use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::{eval, EvalErr};
use crate::{evaluate, Error, ParseError};
use lexers::ArithToken;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) };
    ($lhs:expr, $rhs:expr, $eps:expr) => { assert!(($lhs - $rhs).abs() < $eps) };
}

fn eval_str(expr: &str) -> Result<f64, EvalErr> {
    ShuntingParser::parse_str(expr).unwrap().eval()
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval_str("(3 + 4) * 5 - 2 * (3 + 9)").unwrap(), 11.0);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval_str("(1 + 2)^3 * 4 - 5/(6 + 7) * 8^9").unwrap(), -51622095.07692308, 1.0e-6);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(eval_str("(3+4)*3").unwrap(), 21.0);
    fuzzy_eq!(eval_str("7/2").unwrap(), 3.5);
    fuzzy_eq!(eval_str("2^(1/2)").unwrap(), 1.4142135623730951);
    fuzzy_eq!(eval_str("2 * 3^2").unwrap(), 18.0);
}

#[test]
fn left_assoc() {
    fuzzy_eq!(eval_str("2^3^2").unwrap(), 64.0);
    fuzzy_eq!(eval_str("2^(3^2)").unwrap(), 512.0);
    fuzzy_eq!(eval_str("10 - 4 - 3").unwrap(), 3.0);
    fuzzy_eq!(eval_str("100 / 10 / 5").unwrap(), 2.0);
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_str("1/0"), Ok(f64::INFINITY));
    assert_eq!(eval_str("(0-1)/0"), Ok(f64::NEG_INFINITY));
    assert!(eval_str("0/0").unwrap().is_nan());
}

#[test]
fn insufficient_operands() {
    assert_eq!(eval_str("1 +"), Err(EvalErr::InsufficientOperands));
    assert_eq!(eval_str("* 2"), Err(EvalErr::InsufficientOperands));
    assert_eq!(eval_str("(1 + 2"), Err(EvalErr::InsufficientOperands));
    let rpn = RPNExpr(vec![ArithToken::Number(1.0), ArithToken::Op('+'), ArithToken::Number(2.0)]);
    assert_eq!(eval(&rpn), Err(EvalErr::InsufficientOperands));
    // the operand count is checked before the symbol
    let rpn = RPNExpr(vec![ArithToken::Number(1.0), ArithToken::Op('%')]);
    assert_eq!(eval(&rpn), Err(EvalErr::InsufficientOperands));
    assert_eq!(eval_str("((1+2)"), Err(EvalErr::InsufficientOperands));
}

#[test]
fn malformed_expression() {
    assert_eq!(eval_str("1 2"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval_str(""), Err(EvalErr::MalformedExpression));
    assert_eq!(eval_str("  ()  "), Err(EvalErr::MalformedExpression));
    assert_eq!(eval_str("(1)(2)"), Err(EvalErr::MalformedExpression));
}

#[test]
fn unknown_operator() {
    assert_eq!(eval_str("(1 + 2) * (3"), Err(EvalErr::UnknownOperator('(')));
    let rpn = RPNExpr(vec![ArithToken::Number(1.0), ArithToken::Number(2.0), ArithToken::Op('%')]);
    assert_eq!(eval(&rpn), Err(EvalErr::UnknownOperator('%')));
    let rpn = RPNExpr(vec![ArithToken::Unknown('?')]);
    assert_eq!(eval(&rpn), Err(EvalErr::UnknownOperator('?')));
}

#[test]
fn evaluate_boundary() {
    fuzzy_eq!(evaluate("1 + 2 * 3").unwrap(), 7.0);
    assert_eq!(
        evaluate("(1 + 2) * abc"),
        Err(Error::Syntax(ParseError::SyntaxError { position: 10, character: 'a' }))
    );
    assert_eq!(evaluate("1 2"), Err(Error::Eval(EvalErr::MalformedExpression)));
    assert_eq!(evaluate("3 3 3 +").unwrap_err().to_string(),
               "invalid syntax: operands and operators don't balance");
}
