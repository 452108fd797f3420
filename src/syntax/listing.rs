//! Program listing for display
//!
//! Programs arrive as ASTs, so there is no source text to show. [`Listing`]
//! pretty-prints a command tree into numbered lines and remembers which line
//! each command node starts on, so the viewer can highlight the command that
//! is about to execute.
//!
//! Commands are keyed by node identity ([`node_key`]). The program tree is
//! never mutated while it runs, and procedure bodies are shared with their
//! closures through `Rc`, so a body command executed from a call has the same
//! key as its line in the listing.

use super::ast::{Com, Decl};
use rustc_hash::FxHashMap;

/// Identity of a command node within a running program
pub type NodeKey = usize;

/// Identity key of a command node
#[inline]
pub fn node_key(com: &Com) -> NodeKey {
    com as *const Com as usize
}

const INDENT: &str = "  ";

/// A pretty-printed program with a command → line index
#[derive(Debug, Clone, Default)]
pub struct Listing {
    lines: Vec<String>,
    line_of: FxHashMap<NodeKey, usize>,
}

impl Listing {
    pub fn new(program: &Com) -> Self {
        let mut listing = Listing::default();
        listing.push_command(program, 0);
        listing
    }

    /// All lines, without indentation markers or line numbers
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Zero-based line on which a command node starts
    pub fn line_of(&self, key: NodeKey) -> Option<usize> {
        self.line_of.get(&key).copied()
    }

    fn push_line(&mut self, depth: usize, text: String) -> usize {
        self.lines.push(format!("{}{}", INDENT.repeat(depth), text));
        self.lines.len() - 1
    }

    fn push_decl(&mut self, decl: &Decl, depth: usize) {
        self.push_line(depth, format!("var {} = {}", decl.name, decl.init));
    }

    fn push_command(&mut self, com: &Com, depth: usize) {
        let line = self.push_line(depth, com.headline());
        self.line_of.insert(node_key(com), line);

        match com {
            Com::While(_, body) => {
                self.push_command(body, depth + 1);
            }
            Com::If(_, then_branch, else_branch) => {
                self.push_command(then_branch, depth + 1);
                self.push_line(depth, "else".to_string());
                self.push_command(else_branch, depth + 1);
            }
            Com::Procedure { body, .. } => {
                for c in body.iter() {
                    self.push_command(c, depth + 1);
                }
                self.push_line(depth, "end".to_string());
            }
            Com::Block(decls, commands) => {
                for d in decls {
                    self.push_decl(d, depth + 1);
                }
                for c in commands {
                    self.push_command(c, depth + 1);
                }
                self.push_line(depth, "end".to_string());
            }
            _ => {}
        }
    }
}

impl Com {
    /// One-line summary of a command, without its nested commands
    pub fn headline(&self) -> String {
        match self {
            Com::Assign(name, e) => format!("{} := {}", name, e),
            Com::While(c, _) => format!("while {} do", c),
            Com::If(c, _, _) => format!("if {} then", c),
            Com::Procedure { name, params, .. } => format!("proc {}({})", name, params.join(", ")),
            Com::Call(name, args) => {
                let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                format!("call {}({})", name, args.join(", "))
            }
            Com::NewPointer(name, e) => format!("new {} := {}", name, e),
            Com::DestroyPointer(name) => format!("free {}", name),
            Com::UpdatePointerVal(name, e) => format!("*{} := {}", name, e),
            Com::Block(..) => "begin".to_string(),
            Com::Show(e) => format!("show {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ast::Exp;

    #[test]
    fn test_listing_layout() {
        let program = Com::block(
            vec![Decl::new("y", Exp::int(2))],
            vec![
                Com::new_pointer("x", Exp::int(10)),
                Com::if_else(
                    Exp::bool(true),
                    Com::show(Exp::deref("x")),
                    Com::destroy_pointer("x"),
                ),
            ],
        );
        let listing = Listing::new(&program);
        assert_eq!(
            listing.lines(),
            &[
                "begin",
                "  var y = 2",
                "  new x := 10",
                "  if true then",
                "    show *x",
                "  else",
                "    free x",
                "end",
            ]
        );
    }

    #[test]
    fn test_line_lookup_by_node() {
        let program = Com::block(
            vec![],
            vec![Com::procedure("p", ["z"], vec![Com::show(Exp::val("z"))])],
        );
        let listing = Listing::new(&program);
        assert_eq!(listing.line_of(node_key(&program)), Some(0));

        let Com::Block(_, commands) = &program else {
            unreachable!()
        };
        let Com::Procedure { body, .. } = &commands[0] else {
            unreachable!()
        };
        assert_eq!(listing.line_of(node_key(&commands[0])), Some(1));
        assert_eq!(listing.line_of(node_key(&body[0])), Some(2));
    }
}
