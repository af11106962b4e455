#![deny(warnings)]

use crate::helpers;
use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Unknown(String),
    Number(f64),
    Const(String),  // pi, e, rand
    Func(String),   // canonical name, always unary: sin, sqrt, ...
    UOp(String),    // prefix -, postfix !, postfix %
    BOp(String),    // canonical + - * / ^
    OParen,
    CParen,
}

pub struct CalcTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    prev: Option<CalcToken>,
    pending: Option<CalcToken>,
}

impl<I: Iterator<Item = char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer { src: Scanner::new(source), prev: None, pending: None }
    }

    // when would a minus be unary? we need to know the prev token;
    // postfix ops leave a value behind, so minus after them is binary
    fn makes_unary(prev: &Option<CalcToken>) -> bool {
        match *prev {
            Some(CalcToken::Number(_)) => false,
            Some(CalcToken::Const(_)) => false,
            Some(CalcToken::CParen) => false,
            Some(CalcToken::UOp(ref op)) if op == "!" || op == "%" => false,
            _ => true,
        }
    }

    // adjacency that reads as multiplication on the keypad,
    // eg: 5(2), (2)(3), 3π, 2sin(1), (2)5
    fn implicit_mul(prev: &Option<CalcToken>, next: &CalcToken) -> bool {
        match *prev {
            Some(CalcToken::Number(_)) | Some(CalcToken::Const(_)) => matches!(
                *next,
                CalcToken::OParen | CalcToken::Func(_) | CalcToken::Const(_)
            ),
            Some(CalcToken::CParen) => matches!(
                *next,
                CalcToken::OParen
                    | CalcToken::Func(_)
                    | CalcToken::Const(_)
                    | CalcToken::Number(_)
            ),
            _ => false,
        }
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        self.src.ignore_ws(); // discard whatever came before + any spaces
        if let Some(glyph) = self.src.accept_any("√∛π") {
            self.src.ignore();
            match glyph {
                '√' => Some(CalcToken::Func("sqrt".to_string())),
                '∛' => Some(CalcToken::Func("cbrt".to_string())),
                _ => Some(CalcToken::Const("pi".to_string())),
            }
        } else if let Some(op) = helpers::scan_calc_op(&mut self.src) {
            match op.as_ref() {
                "(" => Some(CalcToken::OParen),
                ")" => Some(CalcToken::CParen),
                "!" | "%" => Some(CalcToken::UOp(op)),
                "×" => Some(CalcToken::BOp("*".to_string())),
                "÷" => Some(CalcToken::BOp("/".to_string())),
                "−" | "-" => {
                    if Self::makes_unary(&self.prev) {
                        Some(CalcToken::UOp("-".to_string()))
                    } else {
                        Some(CalcToken::BOp("-".to_string()))
                    }
                }
                _ => Some(CalcToken::BOp(op)),
            }
        } else if let Some(id) = helpers::scan_identifier(&mut self.src) {
            match self.src.peek() {
                Some('(') => Some(CalcToken::Func(id)),
                _ => Some(CalcToken::Const(id)),
            }
        } else if let Some(num) = helpers::scan_number(&mut self.src) {
            use std::str::FromStr;
            Some(CalcToken::Number(f64::from_str(&num).unwrap()))
        } else if self.src.next().is_some() {
            Some(CalcToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.pending.take() {
            Some(stashed) => Some(stashed),
            None => match self.get_token() {
                Some(token) if Self::implicit_mul(&self.prev, &token) => {
                    self.pending = Some(token);
                    Some(CalcToken::BOp("*".to_string()))
                }
                other => other,
            },
        };
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CalcToken, CalcTokenizer};

    fn tokens(input: &str) -> Vec<CalcToken> {
        CalcTokenizer::new(input.chars()).collect()
    }

    #[test]
    fn basic_ops() {
        let expect = [
            CalcToken::Number(3.0),
            CalcToken::BOp("+".to_string()),
            CalcToken::Number(4.0),
            CalcToken::BOp("*".to_string()),
            CalcToken::Number(2.0),
            CalcToken::BOp("/".to_string()),
            CalcToken::UOp("-".to_string()),
            CalcToken::OParen,
            CalcToken::Number(1.0),
            CalcToken::BOp("-".to_string()),
            CalcToken::Number(5.0),
            CalcToken::CParen,
            CalcToken::BOp("^".to_string()),
            CalcToken::Number(2.0),
        ];
        assert_eq!(tokens("3+4×2÷−(1−5)^2"), expect);
        // ascii spellings tokenize the same
        assert_eq!(tokens("3+4*2/-(1-5)^2"), expect);
    }

    #[test]
    fn postfix_ops() {
        let expect = [
            CalcToken::Number(7.0),
            CalcToken::UOp("!".to_string()),
            CalcToken::BOp("-".to_string()),
            CalcToken::Number(50.0),
            CalcToken::UOp("%".to_string()),
        ];
        assert_eq!(tokens("7!−50%"), expect);
    }

    #[test]
    fn functions_and_constants() {
        let expect = [
            CalcToken::Func("sin".to_string()),
            CalcToken::OParen,
            CalcToken::Const("pi".to_string()),
            CalcToken::BOp("/".to_string()),
            CalcToken::Number(2.0),
            CalcToken::CParen,
            CalcToken::BOp("+".to_string()),
            CalcToken::Const("rand".to_string()),
        ];
        assert_eq!(tokens("sin(π÷2)+rand"), expect);
    }

    #[test]
    fn root_glyphs() {
        let expect = [
            CalcToken::Func("sqrt".to_string()),
            CalcToken::OParen,
            CalcToken::Number(16.0),
            CalcToken::CParen,
            CalcToken::BOp("+".to_string()),
            CalcToken::Func("cbrt".to_string()),
            CalcToken::OParen,
            CalcToken::Number(27.0),
            CalcToken::CParen,
        ];
        assert_eq!(tokens("√(16)+∛(27)"), expect);
        assert_eq!(tokens("sqrt(16)+cbrt(27)"), expect);
    }

    #[test]
    fn implicit_multiplication() {
        let expect = [
            CalcToken::Number(5.0),
            CalcToken::BOp("*".to_string()),
            CalcToken::OParen,
            CalcToken::Number(2.0),
            CalcToken::CParen,
        ];
        assert_eq!(tokens("5(2)"), expect);

        let expect = [
            CalcToken::Number(3.0),
            CalcToken::BOp("*".to_string()),
            CalcToken::Const("pi".to_string()),
        ];
        assert_eq!(tokens("3π"), expect);

        let expect = [
            CalcToken::OParen,
            CalcToken::Number(2.0),
            CalcToken::CParen,
            CalcToken::BOp("*".to_string()),
            CalcToken::OParen,
            CalcToken::Number(3.0),
            CalcToken::CParen,
        ];
        assert_eq!(tokens("(2)(3)"), expect);

        let expect = [
            CalcToken::OParen,
            CalcToken::Number(2.0),
            CalcToken::CParen,
            CalcToken::BOp("*".to_string()),
            CalcToken::Number(5.0),
        ];
        assert_eq!(tokens("(2)5"), expect);

        let expect = [
            CalcToken::Number(2.0),
            CalcToken::BOp("*".to_string()),
            CalcToken::Func("sin".to_string()),
            CalcToken::OParen,
            CalcToken::Number(1.0),
            CalcToken::CParen,
        ];
        assert_eq!(tokens("2sin(1)"), expect);
    }

    #[test]
    fn no_implicit_mul_after_constant_number() {
        // π2 stays adjacent tokens; the parser rejects it
        let expect = [
            CalcToken::Const("pi".to_string()),
            CalcToken::Number(2.0),
        ];
        assert_eq!(tokens("π2"), expect);
    }

    #[test]
    fn unary_minus_chains() {
        let expect = [
            CalcToken::Number(5.0),
            CalcToken::BOp("-".to_string()),
            CalcToken::UOp("-".to_string()),
            CalcToken::UOp("-".to_string()),
            CalcToken::Number(3.0),
        ];
        assert_eq!(tokens("5−−−3"), expect);
    }

    #[test]
    fn minus_after_postfix_is_binary() {
        let expect = [
            CalcToken::Number(3.0),
            CalcToken::UOp("!".to_string()),
            CalcToken::BOp("-".to_string()),
            CalcToken::Number(2.0),
        ];
        assert_eq!(tokens("3!−2"), expect);
    }

    #[test]
    fn identifier_without_paren_is_a_constant() {
        let expect = [
            CalcToken::Const("e".to_string()),
            CalcToken::BOp("^".to_string()),
            CalcToken::Number(2.0),
        ];
        assert_eq!(tokens("e^2"), expect);
    }

    #[test]
    fn unknown_glyphs_surface() {
        assert_eq!(tokens("#"), [CalcToken::Unknown("#".to_string())]);
    }
}
