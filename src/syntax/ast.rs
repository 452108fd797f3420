// AST definitions for the block-structured language

use std::fmt;
use std::rc::Rc;

/// Identifier (variable, pointer or procedure name)
pub type Ide = String;

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Exp {
    Int(i64),
    Bool(bool),
    Plus(Box<Exp>, Box<Exp>),
    Mult(Box<Exp>, Box<Exp>),
    Minus(Box<Exp>), // Arithmetic negation
    And(Box<Exp>, Box<Exp>),
    Or(Box<Exp>, Box<Exp>),
    Not(Box<Exp>),
    Equal(Box<Exp>, Box<Exp>),
    If(Box<Exp>, Box<Exp>, Box<Exp>),
    Deref(Ide), // Value of the heap cell a pointer variable refers to
    Val(Ide),   // Value held by a plain variable
}

/// Commands
#[derive(Debug, Clone, PartialEq)]
pub enum Com {
    Assign(Ide, Exp),
    While(Exp, Box<Com>),
    If(Exp, Box<Com>, Box<Com>),
    /// Procedure declaration. Parameters and body are reference counted so a
    /// closure shares the exact nodes of the declaring program.
    Procedure {
        name: Ide,
        params: Rc<[Ide]>,
        body: Rc<[Com]>,
    },
    Call(Ide, Vec<Exp>),
    NewPointer(Ide, Exp),
    DestroyPointer(Ide),
    UpdatePointerVal(Ide, Exp),
    Block(Vec<Decl>, Vec<Com>),
    Show(Exp),
}

/// Variable declaration at the head of a block
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub name: Ide,
    pub init: Exp,
}

impl Decl {
    pub fn new(name: impl Into<Ide>, init: Exp) -> Self {
        Decl {
            name: name.into(),
            init,
        }
    }
}

// Builders. Clients assemble programs directly from these since there is no
// concrete syntax.
impl Exp {
    pub fn int(n: i64) -> Self {
        Exp::Int(n)
    }

    pub fn bool(b: bool) -> Self {
        Exp::Bool(b)
    }

    pub fn plus(left: Exp, right: Exp) -> Self {
        Exp::Plus(Box::new(left), Box::new(right))
    }

    pub fn mult(left: Exp, right: Exp) -> Self {
        Exp::Mult(Box::new(left), Box::new(right))
    }

    pub fn minus(operand: Exp) -> Self {
        Exp::Minus(Box::new(operand))
    }

    pub fn and(left: Exp, right: Exp) -> Self {
        Exp::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Exp, right: Exp) -> Self {
        Exp::Or(Box::new(left), Box::new(right))
    }

    pub fn not(operand: Exp) -> Self {
        Exp::Not(Box::new(operand))
    }

    pub fn equal(left: Exp, right: Exp) -> Self {
        Exp::Equal(Box::new(left), Box::new(right))
    }

    pub fn cond(condition: Exp, then_exp: Exp, else_exp: Exp) -> Self {
        Exp::If(Box::new(condition), Box::new(then_exp), Box::new(else_exp))
    }

    pub fn deref(name: impl Into<Ide>) -> Self {
        Exp::Deref(name.into())
    }

    pub fn val(name: impl Into<Ide>) -> Self {
        Exp::Val(name.into())
    }

    /// Whether this node prints as an infix or conditional form and needs
    /// parentheses when nested inside another operator.
    fn is_compound(&self) -> bool {
        matches!(
            self,
            Exp::Plus(..) | Exp::Mult(..) | Exp::And(..) | Exp::Or(..) | Exp::Equal(..) | Exp::If(..)
        )
    }
}

impl Com {
    pub fn assign(name: impl Into<Ide>, value: Exp) -> Self {
        Com::Assign(name.into(), value)
    }

    pub fn while_do(condition: Exp, body: Com) -> Self {
        Com::While(condition, Box::new(body))
    }

    pub fn if_else(condition: Exp, then_branch: Com, else_branch: Com) -> Self {
        Com::If(condition, Box::new(then_branch), Box::new(else_branch))
    }

    pub fn procedure<I, S>(name: impl Into<Ide>, params: I, body: Vec<Com>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ide>,
    {
        Com::Procedure {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body: body.into(),
        }
    }

    pub fn call(name: impl Into<Ide>, args: Vec<Exp>) -> Self {
        Com::Call(name.into(), args)
    }

    pub fn new_pointer(name: impl Into<Ide>, init: Exp) -> Self {
        Com::NewPointer(name.into(), init)
    }

    pub fn destroy_pointer(name: impl Into<Ide>) -> Self {
        Com::DestroyPointer(name.into())
    }

    pub fn update_pointer(name: impl Into<Ide>, value: Exp) -> Self {
        Com::UpdatePointerVal(name.into(), value)
    }

    pub fn block(decls: Vec<Decl>, commands: Vec<Com>) -> Self {
        Com::Block(decls, commands)
    }

    pub fn show(value: Exp) -> Self {
        Com::Show(value)
    }
}

struct Operand<'a>(&'a Exp);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_compound() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Int(n) => write!(f, "{}", n),
            Exp::Bool(b) => write!(f, "{}", b),
            Exp::Plus(l, r) => write!(f, "{} + {}", Operand(l), Operand(r)),
            Exp::Mult(l, r) => write!(f, "{} * {}", Operand(l), Operand(r)),
            Exp::Minus(e) => write!(f, "-{}", Operand(e)),
            Exp::And(l, r) => write!(f, "{} && {}", Operand(l), Operand(r)),
            Exp::Or(l, r) => write!(f, "{} || {}", Operand(l), Operand(r)),
            Exp::Not(e) => write!(f, "!{}", Operand(e)),
            Exp::Equal(l, r) => write!(f, "{} == {}", Operand(l), Operand(r)),
            Exp::If(c, t, e) => write!(f, "if {} then {} else {}", c, Operand(t), Operand(e)),
            Exp::Deref(name) => write!(f, "*{}", name),
            Exp::Val(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_operators() {
        let e = Exp::not(Exp::equal(Exp::deref("z"), Exp::deref("x")));
        assert_eq!(e.to_string(), "!(*z == *x)");

        let e = Exp::mult(Exp::plus(Exp::int(1), Exp::val("y")), Exp::minus(Exp::int(3)));
        assert_eq!(e.to_string(), "(1 + y) * -3");
    }

    #[test]
    fn test_procedure_builder_shares_body() {
        let proc = Com::procedure("p", ["a", "b"], vec![Com::show(Exp::val("a"))]);
        match proc {
            Com::Procedure { name, params, body } => {
                assert_eq!(name, "p");
                assert_eq!(&*params, &["a".to_string(), "b".to_string()]);
                let shared = Rc::clone(&body);
                assert!(std::ptr::eq(&body[0], &shared[0]));
            }
            other => panic!("expected procedure, got {:?}", other),
        }
    }
}
