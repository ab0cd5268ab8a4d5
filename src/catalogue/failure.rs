use crate::encode::diagnostic::{Diagnostic, SymbolKind};
use crate::diagnostics::FixtureError;
use crate::types::Type;

use super::Catalogue;

/// Line numbers count from the first non-blank line of each snippet.
pub(super) fn register(cat: &mut Catalogue) -> Result<(), FixtureError> {
    // ── Name resolution ──────────────────────────────────────────────

    cat.define(
        "test_fail_undef_var",
        r#"
void main() {
    x = 5;
}
"#,
        Diagnostic::undefined_variable(2, "x")?,
    )?;

    cat.define(
        "test_fail_undef_func",
        r#"
void main() {
    foo();
}
"#,
        Diagnostic::undefined_function(2, "foo")?,
    )?;

    // ── Redefinition ─────────────────────────────────────────────────

    cat.define(
        "test_fail_redef_var",
        r#"
void main() {
    int x;
    bool x;
}
"#,
        Diagnostic::duplicate_symbol(3, "x")?,
    )?;

    cat.define(
        "test_fail_shadow_param",
        r#"
void foo(int x) {
    int x = 5;
}
void main() {
    return;
}
"#,
        Diagnostic::duplicate_symbol(2, "x")?,
    )?;

    cat.define(
        "test_fail_nested_shadowing",
        r#"
void main() {
    int x = 5;
    if (true) {
        int x = 10;
    }
}
"#,
        Diagnostic::duplicate_symbol(4, "x")?,
    )?;

    cat.define(
        "test_fail_redef_func",
        r#"
void foo() { return; }
int foo() { return 1; }
void main() { return; }
"#,
        Diagnostic::duplicate_symbol(2, "foo")?,
    )?;

    // ── Type checking ────────────────────────────────────────────────

    cat.define(
        "test_fail_assign_types",
        r#"
void main() {
    int x = true;
}
"#,
        Diagnostic::type_mismatch(2)?,
    )?;

    cat.define(
        "test_fail_int_to_byte",
        r#"
void main() {
    int x = 5;
    byte b = x;
}
"#,
        Diagnostic::type_mismatch(3)?,
    )?;

    cat.define(
        "test_fail_if_cond",
        r#"
void main() {
    if (5) {
        print("error");
    }
}
"#,
        Diagnostic::type_mismatch(2)?,
    )?;

    cat.define(
        "test_fail_while_cond",
        r#"
void main() {
    int x = 0;
    while (x) {
        x = x - 1;
    }
}
"#,
        Diagnostic::type_mismatch(3)?,
    )?;

    cat.define(
        "test_fail_byte_large",
        r#"
void main() {
    byte b = 300b;
}
"#,
        Diagnostic::literal_out_of_range(2, Type::Byte, 300)?,
    )?;

    // ── Loop control ─────────────────────────────────────────────────

    cat.define(
        "test_fail_break",
        r#"
void main() {
    if (true) {
        break;
    }
}
"#,
        Diagnostic::unexpected_break(3)?,
    )?;

    cat.define(
        "test_fail_continue",
        r#"
void main() {
    continue;
}
"#,
        Diagnostic::unexpected_continue(2)?,
    )?;

    // ── Returns ──────────────────────────────────────────────────────

    cat.define(
        "test_fail_return_val_in_void",
        r#"
void main() {
    return 5;
}
"#,
        Diagnostic::type_mismatch(2)?,
    )?;

    cat.define(
        "test_fail_return_void_in_int",
        r#"
int foo() {
    return;
}
void main() {
    return;
}
"#,
        Diagnostic::type_mismatch(2)?,
    )?;

    // ── Calls ────────────────────────────────────────────────────────

    cat.define(
        "test_fail_arg_count",
        r#"
void foo(int a) { return; }
void main() {
    foo(1, 2);
}
"#,
        Diagnostic::prototype_mismatch(3, "foo", &[Type::Int])?,
    )?;

    cat.define(
        "test_fail_arg_type",
        r#"
void foo(int a) { return; }
void main() {
    foo(true);
}
"#,
        Diagnostic::prototype_mismatch(3, "foo", &[Type::Int])?,
    )?;

    cat.define(
        "test_fail_var_as_func",
        r#"
void main() {
    int x = 5;
    x();
}
"#,
        Diagnostic::symbol_is(3, "x", SymbolKind::Variable)?,
    )?;

    cat.define(
        "test_fail_func_as_var",
        r#"
void foo() { return; }
void main() {
    int x = foo;
}
"#,
        Diagnostic::symbol_is(3, "foo", SymbolKind::Function)?,
    )?;

    // ── Entry point ──────────────────────────────────────────────────

    cat.define(
        "test_fail_no_main",
        r#"
void foo() { return; }
"#,
        Diagnostic::missing_main(),
    )?;

    cat.define(
        "test_fail_main_args",
        r#"
void main(int x) {
    return;
}
"#,
        Diagnostic::missing_main(),
    )?;

    cat.define(
        "test_fail_main_ret",
        r#"
int main() {
    return 0;
}
"#,
        Diagnostic::missing_main(),
    )?;

    Ok(())
}
