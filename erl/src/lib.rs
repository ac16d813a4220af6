#![deny(missing_docs)]

//! A small, typed representation of EnergyPlus Runtime Language (Erl)
//! programs: the language in which `EnergyManagementSystem:Program` objects
//! are written.
//!
//! Programs are built as data ([`Expr`], [`Cond`], [`Statement`], [`Program`]),
//! rendered into Erl lines only when they are written into a model, and can
//! be executed against an [`Env`] in order to check what they would do
//! during a simulation.
//!
//! ```
//! use erl::{Env, Expr, Program, Statement};
//!
//! let program = Program::new(
//!     "monitor",
//!     vec![Statement::set(
//!         "aPMV",
//!         Expr::var("PMV") / (Expr::num(1.) + Expr::var("lambda") * Expr::var("PMV")),
//!     )],
//! );
//! assert_eq!(program.lines(), vec!["set aPMV = PMV/(1+lambda*PMV)".to_string()]);
//!
//! let mut env = Env::new();
//! env.set("PMV", 1.0);
//! env.set("lambda", 1.0);
//! program.run(&mut env).unwrap();
//! assert!((env.get("aPMV").unwrap() - 0.5).abs() < 1e-9);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

mod error;
pub use crate::error::{EvalError, Result};

mod expr;
pub use crate::expr::{BinOp, CmpOp, Cond, Expr};

mod program;
pub use crate::program::{Program, Statement};

mod env;
pub use crate::env::Env;
