use crate::{Cond, Env, Expr, Result};

/// A line (or block of lines) of an Erl program
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `set <var> = <value>`
    Set {
        /// The variable being assigned
        var: String,
        /// The value
        value: Expr,
    },

    /// An `if` / `elseif` / `else` / `endif` block
    If {
        /// The `if` and `elseif` conditions with their bodies, in order
        branches: Vec<(Cond, Vec<Statement>)>,
        /// The body of the `else`, which may be empty
        otherwise: Vec<Statement>,
    },
}

impl Statement {
    /// `set <var> = <value>`
    pub fn set<S: Into<String>>(var: S, value: Expr) -> Self {
        Statement::Set {
            var: var.into(),
            value,
        }
    }

    /// An `if` block with an `else`
    pub fn if_else(cond: Cond, then: Vec<Statement>, otherwise: Vec<Statement>) -> Self {
        Statement::If {
            branches: vec![(cond, then)],
            otherwise,
        }
    }

    fn render(&self, lines: &mut Vec<String>) {
        match self {
            Statement::Set { var, value } => lines.push(format!("set {} = {}", var, value)),
            Statement::If {
                branches,
                otherwise,
            } => {
                for (i, (cond, body)) in branches.iter().enumerate() {
                    let keyword = if i == 0 { "if" } else { "elseif" };
                    lines.push(format!("{} {}", keyword, cond));
                    for s in body {
                        s.render(lines);
                    }
                }
                if !otherwise.is_empty() {
                    lines.push("else".to_string());
                    for s in otherwise {
                        s.render(lines);
                    }
                }
                lines.push("endif".to_string());
            }
        }
    }

    fn run(&self, env: &mut Env) -> Result<()> {
        match self {
            Statement::Set { var, value } => {
                let v = value.eval(env)?;
                env.set(var, v);
            }
            Statement::If {
                branches,
                otherwise,
            } => {
                for (cond, body) in branches {
                    if cond.eval(env)? {
                        for s in body {
                            s.run(env)?;
                        }
                        return Ok(());
                    }
                }
                for s in otherwise {
                    s.run(env)?;
                }
            }
        }
        Ok(())
    }
}

/// A named Erl program, as stored in an `EnergyManagementSystem:Program`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The name of the program
    pub name: String,

    /// Its statements
    pub body: Vec<Statement>,
}

impl Program {
    /// Creates a new [`Program`]
    pub fn new<S: Into<String>>(name: S, body: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Renders the program into Erl lines, one per `Program_Line_#` field
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for s in &self.body {
            s.render(&mut lines);
        }
        lines
    }

    /// Runs the program, reading and writing variables from and to `env`
    pub fn run(&self, env: &mut Env) -> Result<()> {
        for s in &self.body {
            s.run(env)?;
        }
        Ok(())
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn clamp_program() -> Program {
        Program::new(
            "clamp",
            vec![Statement::if_else(
                Expr::var("x").lt(Expr::num(0.)),
                vec![Statement::set("y", Expr::var("x"))],
                vec![Statement::set("y", Expr::num(0.))],
            )],
        )
    }

    #[test]
    fn test_render_if_else() {
        assert_eq!(
            clamp_program().lines(),
            vec!["if x < 0", "set y = x", "else", "set y = 0", "endif"]
        );
    }

    #[test]
    fn test_render_elseif_without_else() {
        let p = Program::new(
            "season",
            vec![Statement::If {
                branches: vec![
                    (
                        Expr::var("s").equals(Expr::num(1.)),
                        vec![Statement::set("a", Expr::var("b"))],
                    ),
                    (
                        Expr::var("s").equals(Expr::num(0.)),
                        vec![Statement::set("a", Expr::var("c"))],
                    ),
                ],
                otherwise: vec![],
            }],
        );
        assert_eq!(
            p.lines(),
            vec![
                "if s == 1",
                "set a = b",
                "elseif s == 0",
                "set a = c",
                "endif"
            ]
        );
    }

    #[test]
    fn test_run() -> Result<()> {
        let p = clamp_program();

        let mut env = Env::new();
        env.set("x", -2.);
        p.run(&mut env)?;
        assert_eq!(env.get("y"), Some(-2.));

        env.set("x", 3.);
        p.run(&mut env)?;
        assert_eq!(env.get("y"), Some(0.));
        Ok(())
    }

    #[test]
    fn test_first_matching_branch_wins() -> Result<()> {
        let p = Program::new(
            "bins",
            vec![Statement::If {
                branches: vec![
                    (
                        Expr::var("x").gt(Expr::num(0.)),
                        vec![Statement::set("bin", Expr::num(1.))],
                    ),
                    (
                        Expr::var("x").gt(Expr::num(-10.)),
                        vec![Statement::set("bin", Expr::num(2.))],
                    ),
                ],
                otherwise: vec![Statement::set("bin", Expr::num(3.))],
            }],
        );
        let mut env = Env::new();
        for (x, bin) in [(5., 1.), (-5., 2.), (-50., 3.)] {
            env.set("x", x);
            p.run(&mut env)?;
            assert_eq!(env.get("bin"), Some(bin));
        }
        Ok(())
    }
}
