//! Declaration graph consumed by the analyzer.
//!
//! A language front-end fills this model in from its own syntax tree. It is
//! a small tagged structure: nesting is explicit via [`Declaration::nested`]
//! and [`MethodBody::nested`], and consumers recurse over those fields
//! rather than walking a parser-specific AST.

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// A concrete or abstract class.
    Class,
    /// An interface.
    Interface,
}

/// A type declaration (class or interface) with its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Kind of declaration.
    pub kind: DeclKind,
    /// Identifier name.
    pub name: String,
    /// 1-based start line; 0 when the front-end could not resolve one.
    pub line: usize,
    /// Whether the declaration carries an explicit `abstract` modifier.
    pub is_abstract: bool,
    /// Names of extended types.
    pub extends: Vec<String>,
    /// Names of implemented types.
    pub implements: Vec<String>,
    /// Methods declared directly on this type.
    pub methods: Vec<Method>,
    /// Member types declared directly inside this type's body.
    pub nested: Vec<Declaration>,
}

impl Declaration {
    /// Creates a declaration with no modifiers, supertypes, or members.
    #[must_use]
    pub fn new(kind: DeclKind, name: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
            is_abstract: false,
            extends: Vec::new(),
            implements: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Marks the declaration as `abstract`.
    #[must_use]
    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Adds an extended type name.
    #[must_use]
    pub fn with_extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    /// Adds an implemented type name.
    #[must_use]
    pub fn with_implements(mut self, name: impl Into<String>) -> Self {
        self.implements.push(name.into());
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a member type.
    #[must_use]
    pub fn with_nested(mut self, decl: Declaration) -> Self {
        self.nested.push(decl);
        self
    }

    /// True when this declaration is an interface.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }
}

/// A method declaration belonging to exactly one [`Declaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Identifier name.
    pub name: String,
    /// 1-based start line; 0 when unresolvable.
    pub line: usize,
    /// Whether the method carries an explicit `public` modifier.
    pub is_public: bool,
    /// Method body, absent for abstract and interface method signatures.
    pub body: Option<MethodBody>,
}

impl Method {
    /// Creates a non-public, bodiless method.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            is_public: false,
            body: None,
        }
    }

    /// Marks the method as `public`.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Attaches a body.
    #[must_use]
    pub fn with_body(mut self, body: MethodBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// A method body: its source text plus the local types declared inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBody {
    /// Body source text, searchable for literal markers.
    pub text: String,
    /// Type declarations found inside the body.
    pub nested: Vec<Declaration>,
}

impl MethodBody {
    /// Creates a body with no local type declarations.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            nested: Vec::new(),
        }
    }

    /// Adds a local type declaration.
    #[must_use]
    pub fn with_nested(mut self, decl: Declaration) -> Self {
        self.nested.push(decl);
        self
    }

    /// True when any type declared inside this body's subtree, at any
    /// depth, is not an interface.
    #[must_use]
    pub fn contains_concrete_type(&self) -> bool {
        any_concrete(&self.nested)
    }
}

fn any_concrete(decls: &[Declaration]) -> bool {
    decls.iter().any(|d| {
        !d.is_interface()
            || any_concrete(&d.nested)
            || d.methods
                .iter()
                .any(|m| m.body.as_ref().is_some_and(MethodBody::contains_concrete_type))
    })
}

/// Root of the declaration graph for one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTree {
    /// Top-level type declarations in source order.
    pub types: Vec<Declaration>,
}

impl SourceTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
