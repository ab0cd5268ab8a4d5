use serde::Serialize;

/// Value types of the analyzed language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Int,
    Byte,
    Bool,
    String,
    Void,
}

/// Whether a conversion is written out in source as `(T)expr` or happens implicitly
/// (initialization, assignment, argument binding, return).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    Implicit,
    Explicit,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Byte => "byte",
            Type::Bool => "bool",
            Type::String => "string",
            Type::Void => "void",
        }
    }

    /// Inclusive range of literal values representable by this type, if it has literals
    /// that are range-checked.
    pub fn literal_range(self) -> Option<(i64, i64)> {
        match self {
            Type::Int => Some((i32::MIN as i64, i32::MAX as i64)),
            Type::Byte => Some((0, u8::MAX as i64)),
            _ => None,
        }
    }

    /// Literal range check: `300b` does not fit in a byte.
    pub fn literal_fits(self, value: i64) -> bool {
        match self.literal_range() {
            Some((lo, hi)) => (lo..=hi).contains(&value),
            None => false,
        }
    }

    /// Whether a value of type `self` may be stored into a slot of type `target`.
    ///
    /// Widening byte -> int is implicit. Narrowing int -> byte needs an explicit cast.
    /// Nothing converts to or from `bool`, `string` or `void` other than itself.
    pub fn coerces_to(self, target: Type, cast: Cast) -> bool {
        if self == target {
            return self != Type::Void;
        }
        match (self, target) {
            (Type::Byte, Type::Int) => true,
            (Type::Int, Type::Byte) => cast == Cast::Explicit,
            _ => false,
        }
    }

    /// Argument binding for a call: every argument must implicitly coerce to its
    /// parameter, and the counts must agree.
    pub fn arguments_bind(params: &[Type], args: &[Type]) -> bool {
        params.len() == args.len()
            && params
                .iter()
                .zip(args)
                .all(|(param, arg)| arg.coerces_to(*param, Cast::Implicit))
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Comma-joined type list with no spaces, as used by signatures and prototype messages.
pub fn join_types(types: &[Type]) -> String {
    types.iter().map(|t| t.name()).collect::<Vec<_>>().join(",")
}
