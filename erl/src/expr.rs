use crate::{Env, EvalError, Float, Result};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// An arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinOp {
    fn precedence(&self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// A comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `<>`
    Ne,
}

impl CmpOp {
    fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Eq => "==",
            CmpOp::Ne => "<>",
        }
    }
}

/// A numeric expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number
    Num(Float),

    /// A variable: a global variable, a sensor, an actuator or
    /// a built-in (e.g., `DayOfYear`, `ZoneTimeStep`)
    Var(String),

    /// An arithmetic operation
    Binary {
        /// The operator
        op: BinOp,
        /// Left-hand side
        left: Box<Expr>,
        /// Right-hand side
        right: Box<Expr>,
    },
}

impl Expr {
    /// A literal number
    pub fn num(v: Float) -> Self {
        Expr::Num(v)
    }

    /// A variable
    pub fn var<S: Into<String>>(name: S) -> Self {
        Expr::Var(name.into())
    }

    fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn compare(self, op: CmpOp, other: Expr) -> Cond {
        Cond::Cmp {
            op,
            left: self,
            right: other,
        }
    }

    /// `self < other`
    pub fn lt(self, other: Expr) -> Cond {
        self.compare(CmpOp::Lt, other)
    }

    /// `self <= other`
    pub fn le(self, other: Expr) -> Cond {
        self.compare(CmpOp::Le, other)
    }

    /// `self > other`
    pub fn gt(self, other: Expr) -> Cond {
        self.compare(CmpOp::Gt, other)
    }

    /// `self >= other`
    pub fn ge(self, other: Expr) -> Cond {
        self.compare(CmpOp::Ge, other)
    }

    /// `self == other`
    pub fn equals(self, other: Expr) -> Cond {
        self.compare(CmpOp::Eq, other)
    }

    /// `self <> other`
    pub fn not_equals(self, other: Expr) -> Cond {
        self.compare(CmpOp::Ne, other)
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            _ => u8::MAX,
        }
    }

    /// Evaluates the expression
    pub fn eval(&self, env: &Env) -> Result<Float> {
        match self {
            Expr::Num(v) => Ok(*v),
            Expr::Var(name) => env
                .get(name)
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            Expr::Binary { op, left, right } => {
                let a = left.eval(env)?;
                let b = right.eval(env)?;
                match op {
                    BinOp::Add => Ok(a + b),
                    BinOp::Sub => Ok(a - b),
                    BinOp::Mul => Ok(a * b),
                    BinOp::Div => {
                        if b == 0.0 {
                            Err(EvalError::DivisionByZero(self.to_string()))
                        } else {
                            Ok(a / b)
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v) => write!(f, "{}", v),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Binary { op, left, right } => {
                let p = op.precedence();
                if left.precedence() < p {
                    write!(f, "({})", left)?;
                } else {
                    write!(f, "{}", left)?;
                }
                write!(f, "{}", op.symbol())?;

                // a-(b-c) and a/(b*c) need their parentheses
                let rp = right.precedence();
                let same_level_matters = matches!(op, BinOp::Sub | BinOp::Div);
                if rp < p || (rp == p && same_level_matters) {
                    write!(f, "({})", right)
                } else {
                    write!(f, "{}", right)
                }
            }
        }
    }
}

impl Add for Expr {
    type Output = Expr;
    fn add(self, other: Expr) -> Expr {
        Expr::binary(BinOp::Add, self, other)
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, other: Expr) -> Expr {
        Expr::binary(BinOp::Sub, self, other)
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, other: Expr) -> Expr {
        Expr::binary(BinOp::Mul, self, other)
    }
}

impl Div for Expr {
    type Output = Expr;
    fn div(self, other: Expr) -> Expr {
        Expr::binary(BinOp::Div, self, other)
    }
}

/// A boolean condition, as used by `if` and `elseif`
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// A comparison between two expressions
    Cmp {
        /// The operator
        op: CmpOp,
        /// Left-hand side
        left: Expr,
        /// Right-hand side
        right: Expr,
    },

    /// Both conditions hold
    And(Box<Cond>, Box<Cond>),

    /// At least one of the conditions holds
    Or(Box<Cond>, Box<Cond>),
}

impl Cond {
    /// `self && other`
    pub fn and(self, other: Cond) -> Cond {
        Cond::And(Box::new(self), Box::new(other))
    }

    /// `self || other`
    pub fn or(self, other: Cond) -> Cond {
        Cond::Or(Box::new(self), Box::new(other))
    }

    /// Evaluates the condition
    pub fn eval(&self, env: &Env) -> Result<bool> {
        match self {
            Cond::Cmp { op, left, right } => {
                let a = left.eval(env)?;
                let b = right.eval(env)?;
                Ok(match op {
                    CmpOp::Lt => a < b,
                    CmpOp::Le => a <= b,
                    CmpOp::Gt => a > b,
                    CmpOp::Ge => a >= b,
                    CmpOp::Eq => a == b,
                    CmpOp::Ne => a != b,
                })
            }
            Cond::And(a, b) => Ok(a.eval(env)? && b.eval(env)?),
            Cond::Or(a, b) => Ok(a.eval(env)? || b.eval(env)?),
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cond::Cmp { op, left, right } => write!(f, "{} {} {}", left, op.symbol(), right),
            Cond::And(a, b) => {
                a.fmt_operand(f)?;
                write!(f, " && ")?;
                b.fmt_operand(f)
            }
            Cond::Or(a, b) => {
                a.fmt_operand(f)?;
                write!(f, " || ")?;
                b.fmt_operand(f)
            }
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_render_precedence() {
        let a = || Expr::var("a");
        let b = || Expr::var("b");
        let c = || Expr::var("c");

        assert_eq!((a() + b() * c()).to_string(), "a+b*c");
        assert_eq!(((a() + b()) * c()).to_string(), "(a+b)*c");
        assert_eq!((a() - (b() - c())).to_string(), "a-(b-c)");
        assert_eq!((a() - b() - c()).to_string(), "a-b-c");
        assert_eq!((a() / (b() * c())).to_string(), "a/(b*c)");
        assert_eq!((a() * b() / c()).to_string(), "a*b/c");
        assert_eq!((Expr::num(1.) * Expr::var("ZoneTimeStep")).to_string(), "1*ZoneTimeStep");
        assert_eq!(Expr::num(-100.).to_string(), "-100");
        assert_eq!(Expr::num(0.293).to_string(), "0.293");
    }

    #[test]
    fn test_render_conditions() {
        let c = Expr::var("DayOfYear")
            .ge(Expr::var("CoolSeasonStart"))
            .and(Expr::var("DayOfYear").lt(Expr::var("CoolSeasonEnd")));
        assert_eq!(
            c.to_string(),
            "(DayOfYear >= CoolSeasonStart) && (DayOfYear < CoolSeasonEnd)"
        );

        let c = Expr::var("CoolingSeason").equals(Expr::num(1.));
        assert_eq!(c.to_string(), "CoolingSeason == 1");
    }

    #[test]
    fn test_eval() -> Result<()> {
        let mut env = Env::new();
        env.set("a", 2.);
        env.set("b", 4.);

        let e = Expr::var("a") + Expr::var("b") * Expr::num(0.5);
        assert!((e.eval(&env)? - 4.).abs() < 1e-9);

        let c = Expr::var("a").lt(Expr::var("b")).or(Expr::var("a").gt(Expr::num(100.)));
        assert!(c.eval(&env)?);

        let c = Expr::var("a").lt(Expr::var("b")).and(Expr::var("a").gt(Expr::num(100.)));
        assert!(!c.eval(&env)?);
        Ok(())
    }

    #[test]
    fn test_eval_errors() {
        let env = Env::new();
        let e = Expr::var("nope") + Expr::num(1.);
        assert_eq!(
            e.eval(&env),
            Err(EvalError::UndefinedVariable("nope".to_string()))
        );

        let e = Expr::num(1.) / Expr::num(0.);
        assert!(matches!(e.eval(&env), Err(EvalError::DivisionByZero(_))));
    }
}
