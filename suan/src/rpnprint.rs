use crate::parser::{precedence, RPNExpr};
use lexers::ArithToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST {
    Leaf(f64),
    Node(char, Box<AST>, Box<AST>),
}

impl RPNExpr {
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match *token {
                ArithToken::Number(n) => ops.push(AST::Leaf(n)),
                ArithToken::Op(op) if precedence(op) > precedence('(') => {
                    let rhs = ops.pop()?;
                    let lhs = ops.pop()?;
                    ops.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                _ => return None,
            }
        }
        match (ops.pop(), ops.is_empty()) {
            (Some(root), true) => Some(root),
            _ => None,
        }
    }

    /// Render back to infix with only the parens the grouping needs.
    /// None if the expression wouldn't evaluate to a single value.
    pub fn to_infix(&self) -> Option<String> {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(n) => (format!("{}", n), usize::MAX),
                AST::Node(op, lhs, rhs) => {
                    let prec = precedence(*op);
                    let (lhs, lprec) = printer(lhs);
                    let (rhs, rprec) = printer(rhs);
                    // left assoc: only the rhs needs parens on a tie
                    let lh = if lprec < prec { format!("({})", lhs) } else { lhs };
                    let rh = if rprec <= prec { format!("({})", rhs) } else { rhs };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }
        self.build_ast().map(|root| printer(&root).0)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        for token in tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
