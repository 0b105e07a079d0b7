//! Symbol references carried alongside candidate keys
//!
//! The engine never interprets a symbol beyond what is needed for usage
//! filtering, deduplication, and the well-known-name check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a candidate name refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymbolRef {
    /// A method or function, keyed by its declaring container
    Method {
        name: String,
        container: String,
    },
    Property {
        name: String,
        container: String,
    },
    Field {
        name: String,
        container: String,
    },
    /// A local variable, optionally qualified by its enclosing function
    Local {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scope: Option<String>,
    },
    Parameter {
        name: String,
        function: String,
    },
    EnumMember {
        name: String,
        enum_type: String,
    },
    /// A named type
    Type(TypeSymbol),
    /// A namespace, module, or package path
    Namespace { path: String },
    /// A bare name with no symbol information
    RawName { name: String },
}

/// Declared type information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSymbol {
    pub name: String,

    /// Containing namespace (empty for the global namespace)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(rename = "type_kind")]
    pub kind: TypeKind,

    /// Every ancestor type, nearest first, as recorded by the caller
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<String>,

    /// Number of generic parameters
    #[serde(default, skip_serializing_if = "is_zero")]
    pub arity: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Kinds of named types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Record,
}

impl TypeSymbol {
    /// Create a non-generic type symbol
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            bases: Vec::new(),
            arity: 0,
        }
    }

    /// Attach the ancestor chain
    pub fn with_bases<I, S>(mut self, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bases = bases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the generic arity
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Namespace-qualified name, with a `` `N `` suffix for generic types.
    pub fn qualified_name(&self) -> String {
        let mut qualified = if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        };
        if self.arity > 0 {
            qualified.push('`');
            qualified.push_str(&self.arity.to_string());
        }
        qualified
    }

    /// True if `base` appears in the ancestor chain, by qualified or simple name.
    pub fn derives_from(&self, base: &str) -> bool {
        self.bases
            .iter()
            .any(|b| b == base || b.rsplit('.').next() == Some(base))
    }
}

impl SymbolRef {
    /// Shorthand for a raw name
    pub fn raw(name: impl Into<String>) -> Self {
        Self::RawName { name: name.into() }
    }

    /// Shorthand for an unscoped local
    pub fn local(name: impl Into<String>) -> Self {
        Self::Local {
            name: name.into(),
            scope: None,
        }
    }

    /// Canonical string used to recognize the same entity surfaced twice.
    pub fn identity_key(&self) -> String {
        match self {
            Self::Method { name, container }
            | Self::Property { name, container }
            | Self::Field { name, container } => format!("{}.{}", container, name),
            Self::Local { name, scope } => match scope {
                Some(scope) => format!("{}.{}", scope, name),
                None => name.clone(),
            },
            Self::Parameter { name, function } => format!("{}.{}", function, name),
            Self::EnumMember { name, enum_type } => format!("{}.{}", enum_type, name),
            Self::Type(ty) => ty.qualified_name(),
            Self::Namespace { path } => path.clone(),
            Self::RawName { name } => name.clone(),
        }
    }

    /// The unqualified name.
    pub fn short_name(&self) -> &str {
        match self {
            Self::Method { name, .. }
            | Self::Property { name, .. }
            | Self::Field { name, .. }
            | Self::Local { name, .. }
            | Self::Parameter { name, .. }
            | Self::EnumMember { name, .. }
            | Self::RawName { name } => name,
            Self::Type(ty) => &ty.name,
            Self::Namespace { path } => last_segment(path),
        }
    }

    /// The name a user would type to refer to this symbol: the full path for
    /// namespaces, the short name otherwise.
    pub fn lookup_key(&self) -> &str {
        match self {
            Self::Namespace { path } => path,
            _ => self.short_name(),
        }
    }

    /// Lowercase kind label for display.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Method { .. } => "method",
            Self::Property { .. } => "property",
            Self::Field { .. } => "field",
            Self::Local { .. } => "local",
            Self::Parameter { .. } => "parameter",
            Self::EnumMember { .. } => "enum member",
            Self::Type(ty) => ty.kind.label(),
            Self::Namespace { .. } => "namespace",
            Self::RawName { .. } => "name",
        }
    }

    /// Type information when this is a type symbol.
    pub fn as_type(&self) -> Option<&TypeSymbol> {
        match self {
            Self::Type(ty) => Some(ty),
            _ => None,
        }
    }
}

impl TypeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind_label(), self.identity_key())
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit(['.', ':'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}
