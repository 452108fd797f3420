//! Bundled demo programs
//!
//! These are built directly as ASTs. The binary runs them by name, and the
//! integration tests use them as end-to-end fixtures.

use super::ast::{Com, Decl, Exp};

/// A named program builder
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    pub build: fn() -> Com,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "counter",
        summary: "procedure counts a shared heap cell up to another (prints 1..10, then 10)",
        build: counter,
    },
    Demo {
        name: "pointers",
        summary: "allocate, update and free a heap cell (prints 10, 15)",
        build: pointers,
    },
    Demo {
        name: "scalars",
        summary: "plain variables only (prints 42, true)",
        build: scalars,
    },
    Demo {
        name: "scoping",
        summary: "free identifiers resolve through the static link (prints 1)",
        build: scoping,
    },
    Demo {
        name: "by_value",
        summary: "parameters are copies unless they carry a pointer (prints 6, 5)",
        build: by_value,
    },
    Demo {
        name: "exhaustion",
        summary: "allocates without freeing until the heap overflows",
        build: exhaustion,
    },
];

/// Names of all bundled programs, in display order
pub fn names() -> impl Iterator<Item = &'static str> {
    DEMOS.iter().map(|d| d.name)
}

/// Build a bundled program by name
pub fn by_name(name: &str) -> Option<Com> {
    DEMOS.iter().find(|d| d.name == name).map(|d| (d.build)())
}

pub fn counter() -> Com {
    Com::block(
        vec![Decl::new("y", Exp::int(2))],
        vec![
            Com::new_pointer("x", Exp::int(10)),
            Com::new_pointer("w", Exp::int(0)),
            Com::procedure(
                "p",
                ["z"],
                vec![Com::while_do(
                    Exp::not(Exp::equal(Exp::deref("z"), Exp::deref("x"))),
                    Com::block(
                        vec![Decl::new("y", Exp::int(1))],
                        vec![
                            Com::update_pointer("z", Exp::plus(Exp::deref("z"), Exp::val("y"))),
                            Com::show(Exp::deref("z")),
                        ],
                    ),
                )],
            ),
            Com::call("p", vec![Exp::val("w")]),
            Com::show(Exp::deref("w")),
        ],
    )
}

pub fn pointers() -> Com {
    Com::block(
        vec![Decl::new("a", Exp::int(5))],
        vec![
            Com::new_pointer("p", Exp::int(10)),
            Com::show(Exp::deref("p")),
            Com::update_pointer("p", Exp::plus(Exp::deref("p"), Exp::val("a"))),
            Com::show(Exp::deref("p")),
            Com::destroy_pointer("p"),
        ],
    )
}

pub fn scalars() -> Com {
    Com::block(
        vec![Decl::new("x", Exp::int(42)), Decl::new("flag", Exp::bool(true))],
        vec![Com::show(Exp::val("x")), Com::show(Exp::val("flag"))],
    )
}

pub fn scoping() -> Com {
    Com::block(
        vec![Decl::new("y", Exp::int(1))],
        vec![
            Com::procedure("p", Vec::<&str>::new(), vec![Com::show(Exp::val("y"))]),
            Com::block(
                vec![Decl::new("y", Exp::int(2))],
                vec![Com::call("p", vec![])],
            ),
        ],
    )
}

pub fn by_value() -> Com {
    Com::block(
        vec![Decl::new("a", Exp::int(5))],
        vec![
            Com::procedure(
                "inc",
                ["n"],
                vec![
                    Com::assign("n", Exp::plus(Exp::val("n"), Exp::int(1))),
                    Com::show(Exp::val("n")),
                ],
            ),
            Com::call("inc", vec![Exp::val("a")]),
            Com::show(Exp::val("a")),
        ],
    )
}

pub fn exhaustion() -> Com {
    Com::block(
        vec![Decl::new("i", Exp::int(0))],
        vec![Com::while_do(
            Exp::bool(true),
            Com::block(
                vec![],
                vec![
                    Com::new_pointer("cell", Exp::val("i")),
                    Com::assign("i", Exp::plus(Exp::val("i"), Exp::int(1))),
                    Com::show(Exp::val("i")),
                ],
            ),
        )],
    )
}
