//! Scope tree model for the success-case dump.
//!
//! Slot indices are assigned by the builders rather than written by hand: parameters
//! count down from -1 in declaration order, locals count up from 0 across the whole
//! function body, nested blocks included.
//!
//! ```rust
//! use semfix::scope::ScopeTree;
//! use semfix::types::Type;
//!
//! let mut tree = ScopeTree::new();
//! tree.define("foo", &[("a", Type::Int)], Type::Void, |body| {
//!     body.local("d", Type::Int);
//! });
//! assert_eq!(tree.signatures()[0].to_string(), "foo (int) -> void");
//! let foo = &tree.bodies()[0];
//! assert_eq!(foo.bindings().map(|b| b.slot).collect::<Vec<_>>(), vec![-1, 0]);
//! ```

use serde::Serialize;

use crate::types::{Type, join_types};

/// A function's prototype: ordered parameter types plus return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<Type>,
    pub ret: Type,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, params: &[Type], ret: Type) -> Self {
        Self { name: name.into(), params: params.to_vec(), ret }
    }
}

impl std::fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.name, join_types(&self.params), self.ret)
    }
}

/// One `identifier type slot` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub name: String,
    pub ty: Type,
    pub slot: i32,
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.ty, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScopeItem {
    Binding(Binding),
    Nested(Scope),
}

/// A `---begin scope---` / `---end scope---` block. Bindings and nested scopes keep
/// their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub items: Vec<ScopeItem>,
}

impl Scope {
    /// Bindings of this scope and every nested scope, depth-first in source order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> + '_ {
        let mut out = Vec::new();
        collect_bindings(self, &mut out);
        out.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn collect_bindings<'a>(scope: &'a Scope, out: &mut Vec<&'a Binding>) {
    for item in &scope.items {
        match item {
            ScopeItem::Binding(b) => out.push(b),
            ScopeItem::Nested(inner) => collect_bindings(inner, out),
        }
    }
}

/// Builds one scope of a function body. Nested builders share the function's local
/// slot counter.
pub struct ScopeBuilder<'f> {
    next_local: &'f mut i32,
    items: Vec<ScopeItem>,
}

impl<'f> ScopeBuilder<'f> {
    fn new(next_local: &'f mut i32) -> Self {
        Self { next_local, items: Vec::new() }
    }

    /// Declare a local in the current scope, taking the next non-negative slot.
    pub fn local(&mut self, name: &str, ty: Type) -> &mut Self {
        let slot = *self.next_local;
        *self.next_local += 1;
        self.items.push(ScopeItem::Binding(Binding { name: name.to_string(), ty, slot }));
        self
    }

    /// Open a nested block scope (an `if`/`while` statement scope or a `{ }` block).
    pub fn block(&mut self, f: impl FnOnce(&mut ScopeBuilder<'_>)) -> &mut Self {
        let mut inner = ScopeBuilder::new(&mut *self.next_local);
        f(&mut inner);
        let scope = inner.finish();
        self.items.push(ScopeItem::Nested(scope));
        self
    }

    fn finish(self) -> Scope {
        Scope { items: self.items }
    }
}

/// Build a function body scope: parameters first, with negative slots, then whatever
/// `f` declares.
pub fn function_body(params: &[(&str, Type)], f: impl FnOnce(&mut ScopeBuilder<'_>)) -> Scope {
    let mut next_local = 0;
    let mut builder = ScopeBuilder::new(&mut next_local);
    for (i, (name, ty)) in params.iter().enumerate() {
        builder.items.push(ScopeItem::Binding(Binding {
            name: name.to_string(),
            ty: *ty,
            slot: -(i as i32) - 1,
        }));
    }
    f(&mut builder);
    builder.finish()
}

/// Whole-program scope dump content: the user functions' signatures in first-declaration
/// order, and their body scopes in definition order. The predeclared `print`/`printi`
/// bindings are implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeTree {
    signatures: Vec<FunctionSignature>,
    bodies: Vec<Scope>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a bodiless (forward) declaration. Contributes a signature line only.
    pub fn declare(&mut self, sig: FunctionSignature) -> &mut Self {
        if !self.is_declared(&sig.name) {
            self.signatures.push(sig);
        }
        self
    }

    /// Record a function definition. The signature is derived from `params`, so the
    /// signature line and the parameter bindings always agree.
    pub fn define(
        &mut self,
        name: &str,
        params: &[(&str, Type)],
        ret: Type,
        f: impl FnOnce(&mut ScopeBuilder<'_>),
    ) -> &mut Self {
        let types: Vec<Type> = params.iter().map(|(_, ty)| *ty).collect();
        let body = function_body(params, f);
        self.declare(FunctionSignature::new(name, &types, ret));
        self.bodies.push(body);
        self
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.signatures.iter().any(|s| s.name == name)
    }

    pub fn signatures(&self) -> &[FunctionSignature] {
        &self.signatures
    }

    pub fn bodies(&self) -> &[Scope] {
        &self.bodies
    }
}
