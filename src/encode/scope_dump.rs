use crate::scope::{FunctionSignature, Scope, ScopeItem, ScopeTree};
use crate::types::Type;

pub const GLOBAL_BEGIN: &str = "---begin global scope---";
pub const GLOBAL_END: &str = "---end global scope---";
pub const SCOPE_BEGIN: &str = "---begin scope---";
pub const SCOPE_END: &str = "---end scope---";

/// Library functions every program sees before its own declarations.
pub fn predeclared() -> [FunctionSignature; 2] {
    [
        FunctionSignature::new("print", &[Type::String], Type::Void),
        FunctionSignature::new("printi", &[Type::Int], Type::Void),
    ]
}

/// Render the success-case dump. The result has no trailing newline; the global end
/// marker is the last line.
pub fn render(tree: &ScopeTree) -> String {
    let mut printer = DumpPrinter::new();
    printer.emit_tree(tree);
    printer.buf
}

struct DumpPrinter {
    buf: String,
    indent: usize,
}

impl DumpPrinter {
    fn new() -> Self {
        Self { buf: String::new(), indent: 0 }
    }

    fn line(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.buf.push_str("  ");
        }
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    fn emit_tree(&mut self, tree: &ScopeTree) {
        self.line(GLOBAL_BEGIN);
        for sig in predeclared().iter().chain(tree.signatures()) {
            self.line(&sig.to_string());
        }

        // Function scopes sit one level in from the signature lines.
        self.indent += 1;
        for body in tree.bodies() {
            self.emit_scope(body);
        }
        self.indent -= 1;

        self.buf.push_str(GLOBAL_END);
    }

    fn emit_scope(&mut self, scope: &Scope) {
        self.line(SCOPE_BEGIN);
        for item in &scope.items {
            match item {
                ScopeItem::Binding(b) => self.line(&b.to_string()),
                ScopeItem::Nested(inner) => {
                    self.indent += 1;
                    self.emit_scope(inner);
                    self.indent -= 1;
                }
            }
        }
        self.line(SCOPE_END);
    }
}
