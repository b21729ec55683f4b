use std::fmt;

use crate::{Combinator, Node, Program};

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Combinator::K => "k",
            Combinator::S => "s",
            Combinator::C => "c",
            Combinator::Inc => "+",
        })
    }
}

/// Prints the program back in backtick syntax.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return Ok(());
        };
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            match self.node(id) {
                Node::Apply(fun, arg) => {
                    f.write_str("`")?;
                    stack.push(arg);
                    stack.push(fun);
                }
                Node::Comb(c) => write!(f, "{}", c)?,
                Node::Num(1) => f.write_str("i")?,
                Node::Num(n) => write!(f, "[{}]", n)?,
            }
        }
        Ok(())
    }
}
