use keylex::{CalcToken, CalcTokenizer};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyInput,
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("operand without an operator")]
    DanglingOperand,
    #[error("bad token: {0}")]
    BadToken(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOp {
    Neg,
    Factorial,
    Percent,
}

/// Typed expression tree. Evaluation is structural recursion over this,
/// never substitution on the input text.
#[derive(Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Const(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(String, Box<Expr>),
}

#[derive(PartialEq, Debug)]
enum Assoc {
    Left,
    Right,
}

// The unary minus shares precedence with '^' and resolves by
// associativity: -2^3 is -(2^3) while 2^-3 is 2^(-3).
fn precedence(token: &CalcToken) -> (usize, Assoc) {
    match *token {
        CalcToken::OParen => (1, Assoc::Left), // keep at bottom
        CalcToken::BOp(ref o) if o == "+" => (2, Assoc::Left),
        CalcToken::BOp(ref o) if o == "-" => (2, Assoc::Left),
        CalcToken::BOp(ref o) if o == "*" => (3, Assoc::Left),
        CalcToken::BOp(ref o) if o == "/" => (3, Assoc::Left),
        CalcToken::UOp(ref o) if o == "-" => (5, Assoc::Right), // unary minus
        CalcToken::BOp(ref o) if o == "^" => (5, Assoc::Right),
        CalcToken::UOp(_) => (6, Assoc::Left), // postfix ! and %
        CalcToken::Func(_) => (7, Assoc::Left),
        _ => (99, Assoc::Left),
    }
}

// pop one pending operator off the stack and build its tree node
fn reduce(out: &mut Vec<Expr>, token: CalcToken) -> Result<(), ParseError> {
    match token {
        CalcToken::BOp(op) => {
            let rhs = out.pop().ok_or(ParseError::MissingOperand)?;
            let lhs = out.pop().ok_or(ParseError::MissingOperand)?;
            let op = match op.as_str() {
                "+" => BinOp::Add,
                "-" => BinOp::Sub,
                "*" => BinOp::Mul,
                "/" => BinOp::Div,
                "^" => BinOp::Pow,
                _ => return Err(ParseError::BadToken(op)),
            };
            out.push(Expr::Binary(op, Box::new(lhs), Box::new(rhs)));
        }
        CalcToken::UOp(op) => {
            let inner = out.pop().ok_or(ParseError::MissingOperand)?;
            let op = match op.as_str() {
                "-" => UnaryOp::Neg,
                "!" => UnaryOp::Factorial,
                "%" => UnaryOp::Percent,
                _ => return Err(ParseError::BadToken(op)),
            };
            out.push(Expr::Unary(op, Box::new(inner)));
        }
        CalcToken::Func(name) => {
            let arg = out.pop().ok_or(ParseError::MissingOperand)?;
            out.push(Expr::Call(name, Box::new(arg)));
        }
        other => return Err(ParseError::BadToken(format!("{:?}", other))),
    }
    Ok(())
}

pub fn parse_str(expr: &str) -> Result<Expr, ParseError> {
    parse(&mut CalcTokenizer::new(expr.chars()))
}

pub fn parse(lex: &mut impl Iterator<Item = CalcToken>) -> Result<Expr, ParseError> {
    let mut out = Vec::new();
    let mut stack = Vec::new();

    while let Some(token) = lex.next() {
        match token {
            CalcToken::Number(n) => out.push(Expr::Num(n)),
            CalcToken::Const(name) => out.push(Expr::Const(name)),
            CalcToken::OParen => stack.push(token),
            CalcToken::Func(_) => stack.push(token),
            CalcToken::CParen => {
                while !stack.is_empty() && stack.last() != Some(&CalcToken::OParen) {
                    let top = stack.pop().unwrap();
                    reduce(&mut out, top)?;
                }
                if stack.pop().is_none() {
                    return Err(ParseError::MissingOParen);
                }
                // end of grouping: apply the function this paren belonged to
                if let Some(CalcToken::Func(_)) = stack.last() {
                    let func = stack.pop().unwrap();
                    reduce(&mut out, func)?;
                }
            }
            CalcToken::UOp(_) | CalcToken::BOp(_) => {
                let (prec_rhs, assoc_rhs) = precedence(&token);
                while let Some(top) = stack.last() {
                    let (prec_lhs, _) = precedence(top);
                    if prec_lhs < prec_rhs {
                        break;
                    } else if prec_lhs > prec_rhs {
                        let top = stack.pop().unwrap();
                        reduce(&mut out, top)?;
                    } else {
                        match assoc_rhs {
                            Assoc::Left => {
                                let top = stack.pop().unwrap();
                                reduce(&mut out, top)?;
                            }
                            Assoc::Right => break,
                        }
                    }
                }
                stack.push(token);
            }
            CalcToken::Unknown(lexeme) => return Err(ParseError::BadToken(lexeme)),
        }
    }
    while let Some(top) = stack.pop() {
        if top == CalcToken::OParen {
            return Err(ParseError::MissingCParen);
        }
        reduce(&mut out, top)?;
    }
    match out.len() {
        0 => Err(ParseError::EmptyInput),
        1 => Ok(out.pop().unwrap()),
        _ => Err(ParseError::DanglingOperand),
    }
}
