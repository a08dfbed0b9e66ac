//! Class-level LSP check: classes outside any substitution hierarchy.
//!
//! # Rationale
//!
//! A class that neither extends nor implements anything cannot stand in
//! for any abstraction, so nothing can substitute it either. Interfaces
//! are exempt: they are the abstraction.

use solid_lint_core::{ClassRule, Declaration, Finding, Principle};

/// Rule name for not-substitutable.
pub const NAME: &str = "not-substitutable";

const MESSAGE: &str = "Not substitutable.";

/// Flags classes with no extended and no implemented types.
#[derive(Debug, Clone, Default)]
pub struct NotSubstitutable;

impl NotSubstitutable {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClassRule for NotSubstitutable {
    fn principle(&self) -> Principle {
        Principle::Lsp
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags classes with no extended and no implemented types"
    }

    fn check(&self, decl: &Declaration) -> Option<Finding> {
        (!decl.is_interface() && decl.extends.is_empty() && decl.implements.is_empty())
            .then(|| Finding::new(Principle::Lsp, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_lint_core::DeclKind;

    #[test]
    fn standalone_class_triggers() {
        let decl = Declaration::new(DeclKind::Class, "Island", 1);
        let finding = NotSubstitutable::new().check(&decl).expect("finding");
        assert_eq!(finding.message, MESSAGE);
        assert_eq!(finding.principle, Principle::Lsp);
    }

    #[test]
    fn extending_class_is_exempt() {
        let decl = Declaration::new(DeclKind::Class, "Child", 1).with_extends("Base");
        assert!(NotSubstitutable::new().check(&decl).is_none());
    }

    #[test]
    fn implementing_class_is_exempt() {
        let decl = Declaration::new(DeclKind::Class, "Impl", 1).with_implements("Api");
        assert!(NotSubstitutable::new().check(&decl).is_none());
    }

    #[test]
    fn interface_is_exempt() {
        let decl = Declaration::new(DeclKind::Interface, "Api", 1);
        assert!(NotSubstitutable::new().check(&decl).is_none());
    }
}
