//! Declaration type definitions.
//!
//! This module contains the data structures read out of a castxml dump:
//! type descriptors, typedef-like aliases, and function signatures.

/// Kind of a type descriptor, with kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// Built-in C type such as `int` or `long unsigned int`.
    Fundamental {
        /// Native spelling as reported by castxml.
        name: String,
    },
    /// Enumeration with its members.
    Enumeration {
        /// Declared name (empty for anonymous enums).
        name: String,
        /// Members in declaration order.
        members: Vec<EnumMember>,
    },
    /// Pointer to another type.
    Pointer {
        /// Identifier of the pointed-to type.
        pointee: String,
    },
    /// Array of another type.
    Array {
        /// Identifier of the element type.
        element: String,
    },
    /// Struct type.
    Struct {
        /// Declared name.
        name: String,
    },
    /// Union type.
    Union {
        /// Declared name.
        name: String,
    },
    /// Any identifier-bearing element outside the classified set
    /// (function types, references, classes, ...).
    Unclassified {
        /// castxml element tag.
        tag: String,
    },
}

impl TypeKind {
    /// Returns the declared name for named kinds.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Fundamental { name }
            | Self::Enumeration { name, .. }
            | Self::Struct { name }
            | Self::Union { name } => Some(name),
            _ => None,
        }
    }

    /// Returns the identifier this kind refers to (pointee or element).
    #[must_use]
    pub fn referenced(&self) -> Option<&str> {
        match self {
            Self::Pointer { pointee } => Some(pointee),
            Self::Array { element } => Some(element),
            _ => None,
        }
    }

    /// Returns true for struct and union kinds.
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Struct { .. } | Self::Union { .. })
    }

    /// Short label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Fundamental { .. } => "FundamentalType",
            Self::Enumeration { .. } => "Enumeration",
            Self::Pointer { .. } => "PointerType",
            Self::Array { .. } => "ArrayType",
            Self::Struct { .. } => "Struct",
            Self::Union { .. } => "Union",
            Self::Unclassified { tag } => tag,
        }
    }
}

/// One distinct type occurring in the declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Identifier, unique within a run.
    pub id: String,
    /// Kind and payload.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Creates a new type descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// Enumeration member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Literal initializer, kept verbatim.
    pub init: String,
}

impl EnumMember {
    /// Creates a new enumeration member.
    #[must_use]
    pub fn new(name: impl Into<String>, init: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init: init.into(),
        }
    }
}

/// Element kinds that only rename another type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasKind {
    /// `typedef`.
    Typedef,
    /// `const`/`volatile` qualified type.
    CvQualified,
    /// Elaborated type specifier (`struct Foo` spelled out).
    Elaborated,
}

impl AliasKind {
    /// Maps a castxml element tag to an alias kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Typedef" => Some(Self::Typedef),
            "CvQualifiedType" => Some(Self::CvQualified),
            "ElaboratedType" => Some(Self::Elaborated),
            _ => None,
        }
    }
}

/// Identifier that resolves to another identifier's descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Alias identifier.
    pub id: String,
    /// Identifier of the aliased type.
    pub target: String,
    /// Alias kind.
    pub kind: AliasKind,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Declared name, if the declaration named it.
    pub name: Option<String>,
    /// Type identifier.
    pub type_id: String,
}

impl Param {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: Option<String>, type_id: impl Into<String>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            type_id: type_id.into(),
        }
    }
}

/// Native function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Function name.
    pub name: String,
    /// Return type identifier.
    pub returns: String,
    /// Parameters in order.
    pub params: Vec<Param>,
    /// Whether the declaration ends in `...`.
    pub variadic: bool,
}

impl FunctionDecl {
    /// Creates a function without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: returns.into(),
            params: Vec::new(),
            variadic: false,
        }
    }

    /// Appends a parameter.
    pub fn add_param(&mut self, param: Param) {
        self.params.push(param);
    }
}

/// Raw declarations read from a dump, before alias collapsing.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    /// Type descriptors in document order.
    pub types: Vec<TypeDescriptor>,
    /// Typedef-like aliases in document order.
    pub aliases: Vec<Alias>,
    /// Functions in document order.
    pub functions: Vec<FunctionDecl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_and_reference() {
        let st = TypeKind::Struct {
            name: "Point".to_string(),
        };
        assert_eq!(st.name(), Some("Point"));
        assert!(st.referenced().is_none());
        assert!(st.is_aggregate());

        let ptr = TypeKind::Pointer {
            pointee: "_3".to_string(),
        };
        assert_eq!(ptr.name(), None);
        assert_eq!(ptr.referenced(), Some("_3"));
        assert!(!ptr.is_aggregate());
    }

    #[test]
    fn test_unclassified_label_is_tag() {
        let kind = TypeKind::Unclassified {
            tag: "FunctionType".to_string(),
        };
        assert_eq!(kind.label(), "FunctionType");
        assert!(!kind.is_aggregate());
    }

    #[test]
    fn test_alias_kind_from_tag() {
        assert_eq!(AliasKind::from_tag("Typedef"), Some(AliasKind::Typedef));
        assert_eq!(
            AliasKind::from_tag("CvQualifiedType"),
            Some(AliasKind::CvQualified)
        );
        assert_eq!(AliasKind::from_tag("Struct"), None);
    }

    #[test]
    fn test_param_empty_name_is_unnamed() {
        let param = Param::new(Some(String::new()), "_1");
        assert!(param.name.is_none());
    }
}
