//! Property-based tests for the scope dump encoding.
//!
//! Generates random function bodies and checks that rendering is deterministic and
//! that slot indices obey the parameter/local numbering rules.

use proptest::prelude::*;
use semfix::encode::scope_dump::{self, GLOBAL_END, SCOPE_BEGIN, SCOPE_END};
use semfix::scope::{ScopeBuilder, ScopeTree};
use semfix::types::Type;

/// A generated body statement: a local declaration or a nested block.
#[derive(Debug, Clone)]
enum Stmt {
    Local(Type),
    Block(Vec<Stmt>),
}

#[derive(Debug, Clone)]
struct Func {
    params: Vec<Type>,
    ret: Type,
    body: Vec<Stmt>,
}

fn arb_value_type() -> impl Strategy<Value = Type> {
    prop_oneof![Just(Type::Int), Just(Type::Byte), Just(Type::Bool), Just(Type::String)]
}

fn arb_ret_type() -> impl Strategy<Value = Type> {
    prop_oneof![Just(Type::Void), arb_value_type()]
}

fn arb_stmt() -> impl Strategy<Value = Stmt> {
    let leaf = arb_value_type().prop_map(Stmt::Local);
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            arb_value_type().prop_map(Stmt::Local),
            prop::collection::vec(inner, 0..4).prop_map(Stmt::Block),
        ]
    })
}

fn arb_func() -> impl Strategy<Value = Func> {
    (
        prop::collection::vec(arb_value_type(), 0..5),
        arb_ret_type(),
        prop::collection::vec(arb_stmt(), 0..6),
    )
        .prop_map(|(params, ret, body)| Func { params, ret, body })
}

fn build_stmts(s: &mut ScopeBuilder<'_>, stmts: &[Stmt], counter: &mut usize) {
    for stmt in stmts {
        match stmt {
            Stmt::Local(ty) => {
                let name = format!("v{counter}");
                *counter += 1;
                s.local(&name, *ty);
            }
            Stmt::Block(inner) => {
                s.block(|s| build_stmts(s, inner, counter));
            }
        }
    }
}

fn build_tree(funcs: &[Func]) -> ScopeTree {
    let mut tree = ScopeTree::new();
    for (i, func) in funcs.iter().enumerate() {
        let names: Vec<String> = (0..func.params.len()).map(|p| format!("p{p}")).collect();
        let params: Vec<(&str, Type)> =
            names.iter().map(String::as_str).zip(func.params.iter().copied()).collect();
        let mut counter = 0;
        tree.define(&format!("f{i}"), &params, func.ret, |s| {
            build_stmts(s, &func.body, &mut counter)
        });
    }
    tree
}

/// Split the rendered dump into per-function slot lists.
fn slots_per_function(text: &str) -> Vec<Vec<i32>> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed == SCOPE_BEGIN {
            if depth == 0 {
                out.push(Vec::new());
            }
            depth += 1;
        } else if trimmed == SCOPE_END {
            depth -= 1;
        } else if depth > 0 {
            let slot = trimmed.rsplit(' ').next().unwrap().parse::<i32>().unwrap();
            out.last_mut().unwrap().push(slot);
        }
    }
    out
}

proptest! {
    #[test]
    fn render_is_deterministic(funcs in prop::collection::vec(arb_func(), 0..4)) {
        let a = scope_dump::render(&build_tree(&funcs));
        let b = scope_dump::render(&build_tree(&funcs));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn dump_is_framed(funcs in prop::collection::vec(arb_func(), 0..4)) {
        let text = scope_dump::render(&build_tree(&funcs));
        prop_assert!(text.starts_with("---begin global scope---\nprint (string) -> void\nprinti (int) -> void\n"));
        prop_assert!(text.ends_with(GLOBAL_END));
        prop_assert_eq!(text.lines().count(), text.lines().filter(|l| !l.is_empty()).count());
    }

    #[test]
    fn slot_indices_follow_numbering(funcs in prop::collection::vec(arb_func(), 1..4)) {
        let text = scope_dump::render(&build_tree(&funcs));
        let per_fn = slots_per_function(&text);
        prop_assert_eq!(per_fn.len(), funcs.len());
        for (func, slots) in funcs.iter().zip(&per_fn) {
            let (params, locals): (Vec<i32>, Vec<i32>) = slots.iter().copied().partition(|s| *s < 0);
            let expected_params: Vec<i32> = (1..=func.params.len() as i32).map(|i| -i).collect();
            prop_assert_eq!(params, expected_params);
            let expected_locals: Vec<i32> = (0..locals.len() as i32).collect();
            prop_assert_eq!(locals, expected_locals);
        }
    }

    #[test]
    fn indentation_tracks_depth(funcs in prop::collection::vec(arb_func(), 1..3)) {
        let text = scope_dump::render(&build_tree(&funcs));
        let mut depth = 0usize;
        for line in text.lines() {
            let indent = line.len() - line.trim_start().len();
            let trimmed = line.trim_start();
            if trimmed == SCOPE_BEGIN {
                depth += 1;
                prop_assert_eq!(indent, depth * 2);
            } else if trimmed == SCOPE_END {
                prop_assert_eq!(indent, depth * 2);
                depth -= 1;
            } else if depth > 0 {
                prop_assert_eq!(indent, depth * 2);
            } else {
                prop_assert_eq!(indent, 0);
            }
        }
    }
}
