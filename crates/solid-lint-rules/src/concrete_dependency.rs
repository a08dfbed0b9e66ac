//! Class-level DIP check: method bodies declaring concrete local types.
//!
//! # Rationale
//!
//! A non-interface type declared inside a method body is a stand-in for
//! depending on (and usually constructing) a concrete class right where an
//! abstraction should be injected. The check is structural only: it never
//! resolves what the body actually references.

use solid_lint_core::{ClassRule, Declaration, Finding, MethodBody, Principle};

/// Rule name for concrete-dependency.
pub const NAME: &str = "concrete-dependency";

const MESSAGE: &str = "Depends on concrete classes.";

/// Flags types whose method bodies declare a non-interface local type.
#[derive(Debug, Clone, Default)]
pub struct ConcreteDependency;

impl ConcreteDependency {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClassRule for ConcreteDependency {
    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags types whose method bodies declare a non-interface local type"
    }

    fn check(&self, decl: &Declaration) -> Option<Finding> {
        decl.methods
            .iter()
            .any(|m| {
                m.body
                    .as_ref()
                    .map_or(false, MethodBody::contains_concrete_type)
            })
            .then(|| Finding::new(Principle::Dip, MESSAGE))
    }
}
