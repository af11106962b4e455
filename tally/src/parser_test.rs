use crate::parser::{parse_str, BinOp, Expr, ParseError, UnaryOp};

fn num(n: f64) -> Box<Expr> {
    Box::new(Expr::Num(n))
}

#[test]
fn multiplication_binds_tighter() {
    let tree = parse_str("3+4×2").unwrap();
    let expect = Expr::Binary(
        BinOp::Add,
        num(3.0),
        Box::new(Expr::Binary(BinOp::Mul, num(4.0), num(2.0))),
    );
    assert_eq!(tree, expect);
}

#[test]
fn parens_override_precedence() {
    let tree = parse_str("(3+4)×2").unwrap();
    let expect = Expr::Binary(
        BinOp::Mul,
        Box::new(Expr::Binary(BinOp::Add, num(3.0), num(4.0))),
        num(2.0),
    );
    assert_eq!(tree, expect);
}

#[test]
fn power_is_right_associative() {
    let tree = parse_str("2^3^2").unwrap();
    let expect = Expr::Binary(
        BinOp::Pow,
        num(2.0),
        Box::new(Expr::Binary(BinOp::Pow, num(3.0), num(2.0))),
    );
    assert_eq!(tree, expect);
}

#[test]
fn unary_minus_against_power() {
    // -2^3 negates the power, 2^-3 raises to the negation
    let tree = parse_str("−2^3").unwrap();
    let expect = Expr::Unary(
        UnaryOp::Neg,
        Box::new(Expr::Binary(BinOp::Pow, num(2.0), num(3.0))),
    );
    assert_eq!(tree, expect);

    let tree = parse_str("2^−3").unwrap();
    let expect = Expr::Binary(
        BinOp::Pow,
        num(2.0),
        Box::new(Expr::Unary(UnaryOp::Neg, num(3.0))),
    );
    assert_eq!(tree, expect);
}

#[test]
fn postfix_operators() {
    let tree = parse_str("3!").unwrap();
    assert_eq!(tree, Expr::Unary(UnaryOp::Factorial, num(3.0)));

    let tree = parse_str("50%").unwrap();
    assert_eq!(tree, Expr::Unary(UnaryOp::Percent, num(50.0)));

    // postfix binds tighter than the sum: 3!+1 is (3!)+1
    let tree = parse_str("3!+1").unwrap();
    let expect = Expr::Binary(
        BinOp::Add,
        Box::new(Expr::Unary(UnaryOp::Factorial, num(3.0))),
        num(1.0),
    );
    assert_eq!(tree, expect);
}

#[test]
fn factorial_of_grouping_still_parses() {
    // the tree is built; the evaluator is what rejects it
    let tree = parse_str("(2+3)!").unwrap();
    let expect = Expr::Unary(
        UnaryOp::Factorial,
        Box::new(Expr::Binary(BinOp::Add, num(2.0), num(3.0))),
    );
    assert_eq!(tree, expect);
}

#[test]
fn function_calls() {
    let tree = parse_str("sin(0)").unwrap();
    assert_eq!(tree, Expr::Call("sin".to_string(), num(0.0)));

    let tree = parse_str("√(16)").unwrap();
    assert_eq!(tree, Expr::Call("sqrt".to_string(), num(16.0)));

    // function of a sub-expression keeps the argument scoped
    let tree = parse_str("log(10×100)").unwrap();
    let expect = Expr::Call(
        "log".to_string(),
        Box::new(Expr::Binary(BinOp::Mul, num(10.0), num(100.0))),
    );
    assert_eq!(tree, expect);
}

#[test]
fn implicit_multiplication() {
    let tree = parse_str("5(2)").unwrap();
    assert_eq!(tree, Expr::Binary(BinOp::Mul, num(5.0), num(2.0)));

    let tree = parse_str("3π").unwrap();
    let expect = Expr::Binary(
        BinOp::Mul,
        num(3.0),
        Box::new(Expr::Const("pi".to_string())),
    );
    assert_eq!(tree, expect);
}

#[test]
fn bad_parse() {
    assert_eq!(parse_str("(1+2"), Err(ParseError::MissingCParen));
    assert_eq!(parse_str("1+2)"), Err(ParseError::MissingOParen));
    assert_eq!(parse_str("5+"), Err(ParseError::MissingOperand));
    assert_eq!(parse_str("×5"), Err(ParseError::MissingOperand));
    assert_eq!(parse_str(""), Err(ParseError::EmptyInput));
    assert_eq!(parse_str("2 3"), Err(ParseError::DanglingOperand));
    assert_eq!(parse_str("#"), Err(ParseError::BadToken("#".to_string())));
}
