use thiserror::Error;

/// The result of evaluating a program
pub type Result<T> = std::result::Result<T, EvalError>;

/// Everything that can go wrong when running a program
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A variable is read before being assigned
    #[error("variable '{0}' is not defined")]
    UndefinedVariable(String),

    /// An expression divides by zero
    #[error("division by zero in '{0}'")]
    DivisionByZero(String),
}
