//! Type name resolution.
//!
//! Two projections of the same declaration graph: the C spelling used in
//! wrapper signatures, and the Static Hermes spelling used in extern
//! declarations. Both are pure; types outside the classified set come out
//! as marker strings instead of errors.

use ffigen_schema::{DeclGraph, TypeKind};

/// Marker for types the generators cannot classify.
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";

/// Marker for fundamental types without a managed equivalent.
pub const UNSUPPORTED_PRIMITIVE: &str = "UNSUPPORTED_PRIMITIVE";

/// Managed opaque pointer type.
pub const OPAQUE_POINTER: &str = "c_ptr";

/// Managed type used for enumerations.
pub const ENUM_INTEGER: &str = "c_int";

/// Managed "no value" return type.
pub const NO_VALUE: &str = "void";

/// C spellings castxml reports and their managed names.
const PRIMITIVES: [(&str, &str); 15] = [
    ("char", "c_char"),
    ("signed char", "c_schar"),
    ("unsigned char", "c_uchar"),
    ("short int", "c_short"),
    ("short unsigned int", "c_ushort"),
    ("int", "c_int"),
    ("unsigned int", "c_uint"),
    ("long int", "c_long"),
    ("long unsigned int", "c_ulong"),
    ("long long int", "c_longlong"),
    ("long long unsigned int", "c_ulonglong"),
    ("bool", "c_bool"),
    ("float", "c_float"),
    ("double", "c_double"),
    ("void", "void"),
];

/// Returns the managed name for a C fundamental type spelling.
#[must_use]
pub fn managed_primitive(spelling: &str) -> Option<&'static str> {
    PRIMITIVES
        .iter()
        .find(|(c_name, _)| *c_name == spelling)
        .map(|&(_, managed)| managed)
}

/// Resolves type identifiers against a declaration graph.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    graph: &'a DeclGraph,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver over a graph.
    #[must_use]
    pub fn new(graph: &'a DeclGraph) -> Self {
        Self { graph }
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &'a DeclGraph {
        self.graph
    }

    /// Returns the kind of a type identifier.
    #[must_use]
    pub fn kind_of(&self, id: &str) -> Option<&'a TypeKind> {
        self.graph.kind_of(id)
    }

    /// Returns the C spelling of a type.
    ///
    /// Pointers and arrays append one `*` per level to their base type.
    #[must_use]
    pub fn native_name(&self, id: &str) -> String {
        let mut levels = 0;
        let mut kind = self.kind_of(id);

        while let Some(TypeKind::Pointer { pointee: next } | TypeKind::Array { element: next }) =
            kind
        {
            levels += 1;
            kind = self.kind_of(next);
        }

        let base = kind.and_then(TypeKind::name).unwrap_or(UNKNOWN_TYPE);

        let mut name = String::with_capacity(base.len() + levels);
        name.push_str(base);
        name.extend(std::iter::repeat_n('*', levels));
        name
    }

    /// Returns the Static Hermes spelling of a type.
    #[must_use]
    pub fn managed_name(&self, id: &str) -> &'static str {
        match self.kind_of(id) {
            Some(TypeKind::Fundamental { name }) => {
                managed_primitive(name).unwrap_or(UNSUPPORTED_PRIMITIVE)
            }
            Some(TypeKind::Enumeration { .. }) => ENUM_INTEGER,
            Some(
                TypeKind::Pointer { .. }
                | TypeKind::Array { .. }
                | TypeKind::Struct { .. }
                | TypeKind::Union { .. },
            ) => OPAQUE_POINTER,
            Some(TypeKind::Unclassified { .. }) | None => UNKNOWN_TYPE,
        }
    }
}

/// Returns true if a resolved name carries one of the diagnostic markers.
#[must_use]
pub fn is_marker(name: &str) -> bool {
    name.starts_with(UNKNOWN_TYPE) || name == UNSUPPORTED_PRIMITIVE
}
