//! Class-level OCP check: no public methods to extend against.
//!
//! # Rationale
//!
//! A non-abstract type with no public methods offers callers nothing to
//! build on, so any change forces edits to the type itself. Visibility is
//! taken from explicit modifiers only; implicit interface visibility is
//! deliberately not inferred.

use solid_lint_core::{ClassRule, Declaration, Finding, Principle};

/// Rule name for no-public-surface.
pub const NAME: &str = "no-public-surface";

const MESSAGE: &str = "No public methods for extensibility.";

/// Flags non-abstract types without a single public method.
#[derive(Debug, Clone, Default)]
pub struct NoPublicSurface;

impl NoPublicSurface {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClassRule for NoPublicSurface {
    fn principle(&self) -> Principle {
        Principle::Ocp
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags non-abstract types without a single public method"
    }

    fn check(&self, decl: &Declaration) -> Option<Finding> {
        (!decl.is_abstract && !decl.methods.iter().any(|m| m.is_public))
            .then(|| Finding::new(Principle::Ocp, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_lint_core::{DeclKind, Method};

    #[test]
    fn private_only_class_triggers() {
        let decl =
            Declaration::new(DeclKind::Class, "Closed", 1).with_method(Method::new("helper", 2));
        let finding = NoPublicSurface::new().check(&decl).expect("finding");
        assert_eq!(finding.message, MESSAGE);
    }

    #[test]
    fn methodless_class_triggers() {
        let decl = Declaration::new(DeclKind::Class, "Empty", 1);
        assert!(NoPublicSurface::new().check(&decl).is_some());
    }

    #[test]
    fn public_method_suppresses() {
        let decl =
            Declaration::new(DeclKind::Class, "Open", 1).with_method(Method::new("api", 2).public());
        assert!(NoPublicSurface::new().check(&decl).is_none());
    }

    #[test]
    fn abstract_class_is_exempt() {
        let decl = Declaration::new(DeclKind::Class, "Base", 1).with_abstract();
        assert!(NoPublicSurface::new().check(&decl).is_none());
    }

    #[test]
    fn interface_without_explicit_public_methods_triggers() {
        // visibility is explicit-modifier only, so this applies to
        // interfaces exactly like classes
        let decl =
            Declaration::new(DeclKind::Interface, "Api", 1).with_method(Method::new("op", 2));
        assert!(NoPublicSurface::new().check(&decl).is_some());
    }
}
