use crate::diagnostics::FixtureError;
use crate::scope::ScopeTree;
use crate::types::Type;

use super::Catalogue;

pub(super) fn register(cat: &mut Catalogue) -> Result<(), FixtureError> {
    // ── Basic sanity ─────────────────────────────────────────────────

    let mut tree = ScopeTree::new();
    tree.define("main", &[], Type::Void, |s| {
        s.local("x", Type::Int);
    });
    cat.define(
        "test_success_basic",
        r#"
void main() {
    int x = 5;
    printi(x);
}
"#,
        tree,
    )?;

    // ── Explicit narrowing cast, implicit widening ───────────────────

    let mut tree = ScopeTree::new();
    tree.define("main", &[], Type::Void, |s| {
        s.local("i", Type::Int).local("b", Type::Byte).local("j", Type::Int);
    });
    cat.define(
        "test_success_casting",
        "
void main() {
    int i = 200;
    byte b = (byte)i;
    int j = b;\x20
}
",
        tree,
    )?;

    // ── Call before definition ───────────────────────────────────────

    let mut tree = ScopeTree::new();
    tree.define("main", &[], Type::Void, |_| {});
    tree.define("foo", &[], Type::Void, |_| {});
    cat.define(
        "test_success_forward",
        r#"
void main() {
    foo();
}
void foo() {
    print("bar");
}
"#,
        tree,
    )?;

    // ── Nested scopes: each `if` opens a statement scope and a block scope

    let mut tree = ScopeTree::new();
    tree.define("main", &[], Type::Void, |s| {
        s.local("a", Type::Int);
        s.block(|s| {
            s.block(|s| {
                s.local("b", Type::Bool);
                s.block(|s| {
                    s.block(|s| {
                        s.local("c", Type::Int);
                    });
                });
            });
        });
    });
    cat.define(
        "test_success_nested",
        r#"
void main() {
    int a = 1;
    if (true) {
        bool b = true;
        if (b) {
            int c = 3;
        }
    }
}
"#,
        tree,
    )?;

    // ── Parameter offsets ────────────────────────────────────────────

    let mut tree = ScopeTree::new();
    tree.define("foo", &[("a", Type::Int), ("b", Type::Bool), ("c", Type::Byte)], Type::Void, |s| {
        s.local("d", Type::Int);
    });
    tree.define("main", &[], Type::Void, |_| {});
    cat.define(
        "test_success_params",
        r#"
void foo(int a, bool b, byte c) {
    int d = a;
}
void main() {
    foo(1, true, 10b);
}
"#,
        tree,
    )?;

    Ok(())
}
