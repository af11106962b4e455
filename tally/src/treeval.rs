use crate::parser::{BinOp, Expr, UnaryOp};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown constant: {0}")]
    UnknownConst(String),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("factorial needs a plain non-negative integer")]
    BadFactorial,
    #[error("result is not a finite number")]
    NotFinite,
}

/// Unit for trig arguments. Radians unless explicitly switched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AngleMode {
    Radians,
    Degrees,
}

pub struct MathContext {
    consts: HashMap<String, f64>,
    pub angle_mode: AngleMode,
}

impl MathContext {
    pub fn new() -> MathContext {
        use std::f64::consts;
        let mut cx = HashMap::new();
        cx.insert("pi".to_string(), consts::PI);
        cx.insert("e".to_string(), consts::E);
        MathContext { consts: cx, angle_mode: AngleMode::Radians }
    }

    pub fn with_angle_mode(angle_mode: AngleMode) -> MathContext {
        MathContext { angle_mode, ..Self::new() }
    }

    pub fn eval(&self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Num(n) => Ok(*n),
            // a fresh sample per visit: two rands in one expression differ
            Expr::Const(name) if name == "rand" => Ok(rand::random::<f64>()),
            Expr::Const(name) => match self.consts.get(name) {
                Some(value) => Ok(*value),
                None => Err(EvalError::UnknownConst(name.clone())),
            },
            Expr::Unary(UnaryOp::Neg, inner) => Ok(-self.eval(inner)?),
            Expr::Unary(UnaryOp::Percent, inner) => Ok(self.eval(inner)? / 100.0),
            Expr::Unary(UnaryOp::Factorial, inner) => factorial(inner),
            Expr::Binary(op, lhs, rhs) => {
                let l = self.eval(lhs)?;
                let r = self.eval(rhs)?;
                match op {
                    BinOp::Add => Ok(l + r),
                    BinOp::Sub => Ok(l - r),
                    BinOp::Mul => Ok(l * r),
                    BinOp::Div if r == 0.0 => Err(EvalError::DivisionByZero),
                    BinOp::Div => Ok(l / r),
                    BinOp::Pow => Ok(l.powf(r)),
                }
            }
            Expr::Call(name, arg) => {
                let arg = self.eval(arg)?;
                self.eval_fn(name, arg)
            }
        }
    }

    fn eval_fn(&self, fname: &str, arg: f64) -> Result<f64, EvalError> {
        match fname {
            "sin" => Ok(self.to_radians(arg).sin()),
            "cos" => Ok(self.to_radians(arg).cos()),
            "tan" => Ok(self.to_radians(arg).tan()),
            "log" => Ok(arg.log10()),
            "ln" => Ok(arg.ln()),
            "abs" => Ok(arg.abs()),
            "sqrt" => Ok(arg.sqrt()),
            "cbrt" => Ok(arg.cbrt()),
            _ => Err(EvalError::UnknownFunction(fname.to_string())),
        }
    }

    fn to_radians(&self, angle: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle.to_radians(),
        }
    }
}

// The postfix '!' only applies to a literal non-negative integer;
// 3.5! and (2+3)! are evaluation errors, not gamma extensions.
fn factorial(operand: &Expr) -> Result<f64, EvalError> {
    let n = match operand {
        Expr::Num(n) if *n >= 0.0 && n.fract() == 0.0 => *n as u64,
        _ => return Err(EvalError::BadFactorial),
    };
    if n > 170 {
        return Ok(f64::INFINITY); // anything past 170! overflows f64
    }
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    Ok(result)
}
