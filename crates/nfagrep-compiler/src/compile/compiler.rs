//! Expression lowering.

use nfagrep_table::{Next, StateKind, StateTable};

use super::builder::{Builder, Fragment, Hole};
use crate::parser::{Expr, Quantifier};

/// Compiler state for Thompson construction.
pub struct Compiler {
    builder: Builder,
}

impl Compiler {
    /// Compile a parsed pattern.
    ///
    /// State 0 is a start branch pointing at the pattern's entry. The last
    /// state is the terminal branch whose successors are both `Final`; every
    /// open exit ends there.
    pub fn compile(expr: &Expr) -> StateTable {
        let mut compiler = Compiler {
            builder: Builder::new(),
        };

        let start = compiler.builder.join();
        let body = compiler.lower(expr);
        compiler.builder.patch(Hole::Both(start), body.entry);

        let terminal = compiler.builder.branch(Next::Final, Some(Next::Final));
        compiler.builder.patch(body.hole, terminal);

        compiler.builder.finish(terminal)
    }

    fn lower(&mut self, expr: &Expr) -> Fragment {
        match expr {
            Expr::Literal { ch, .. } => self.builder.consuming(StateKind::Literal(*ch)),
            Expr::Wildcard { .. } => self.builder.consuming(StateKind::Wildcard),
            Expr::Group { inner, .. } => self.lower(inner),
            Expr::Concat(items) => self.lower_concat(items),
            Expr::Alt(items) => self.lower_alt(items),
            Expr::Repeat {
                inner, quantifier, ..
            } => self.lower_repeat(inner, *quantifier),
        }
    }

    /// Chain fragments left to right; the last one's exit is the term's exit.
    fn lower_concat(&mut self, items: &[Expr]) -> Fragment {
        let mut iter = items.iter();
        let first = self.lower(iter.next().expect("concatenation is never empty"));
        let mut hole = first.hole;

        for item in iter {
            let next = self.lower(item);
            self.builder.patch(hole, next.entry);
            hole = next.hole;
        }

        Fragment {
            entry: first.entry,
            hole,
        }
    }

    /// All alternatives exit through one shared join state. Entry is a
    /// cascade of branches: `B(a, B(b, c))` for `a|b|c`.
    fn lower_alt(&mut self, items: &[Expr]) -> Fragment {
        let fragments: Vec<Fragment> = items.iter().map(|item| self.lower(item)).collect();

        let join = self.builder.join();
        for fragment in &fragments {
            self.builder.patch(fragment.hole, join);
        }

        let (last, rest) = fragments.split_last().expect("alternation is never empty");
        let entry = rest.iter().rev().fold(last.entry, |acc, fragment| {
            self.builder.branch(fragment.entry, Some(acc.into()))
        });

        Fragment {
            entry,
            hole: Hole::Both(join),
        }
    }

    fn lower_repeat(&mut self, inner: &Expr, quantifier: Quantifier) -> Fragment {
        let body = self.lower(inner);

        match quantifier {
            // B(body, exit), body -> B
            Quantifier::ZeroOrMore => {
                let branch = self.builder.branch(body.entry, None);
                self.builder.patch(body.hole, branch);
                Fragment {
                    entry: branch,
                    hole: Hole::Second(branch),
                }
            }
            // body -> B(body, exit), entered through body
            Quantifier::OneOrMore => {
                let branch = self.builder.branch(body.entry, None);
                self.builder.patch(body.hole, branch);
                Fragment {
                    entry: body.entry,
                    hole: Hole::Second(branch),
                }
            }
            // B(body, J), body -> J
            Quantifier::Optional => {
                let join = self.builder.join();
                self.builder.patch(body.hole, join);
                let branch = self.builder.branch(body.entry, Some(join.into()));
                Fragment {
                    entry: branch,
                    hole: Hole::Both(join),
                }
            }
        }
    }
}
