//! Class-level ISP check: interfaces with too many methods.
//!
//! # Rationale
//!
//! An interface past a certain width forces every implementor to carry
//! methods most clients never call. The threshold is strict: an interface
//! triggers only when it declares MORE than `max_methods` methods.
//!
//! # Configuration
//!
//! - `max_methods`: widest allowed interface (default: 10)

use solid_lint_core::{ClassRule, Declaration, Finding, Principle};

/// Rule name for fat-interface.
pub const NAME: &str = "fat-interface";

const MESSAGE: &str = "Too many methods in interface.";

/// Flags interfaces declaring more than `max_methods` methods.
#[derive(Debug, Clone)]
pub struct FatInterface {
    /// Widest allowed interface; the check triggers strictly above this.
    pub max_methods: usize,
}

impl Default for FatInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl FatInterface {
    /// Creates the check with the default threshold of 10.
    #[must_use]
    pub fn new() -> Self {
        Self { max_methods: 10 }
    }

    /// Sets the threshold.
    #[must_use]
    pub fn max_methods(mut self, max: usize) -> Self {
        self.max_methods = max;
        self
    }
}

impl ClassRule for FatInterface {
    fn principle(&self) -> Principle {
        Principle::Isp
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags interfaces declaring more than the allowed number of methods"
    }

    fn check(&self, decl: &Declaration) -> Option<Finding> {
        (decl.is_interface() && decl.methods.len() > self.max_methods)
            .then(|| Finding::new(Principle::Isp, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_lint_core::{DeclKind, Method};

    fn interface_with(method_count: usize) -> Declaration {
        (0..method_count).fold(
            Declaration::new(DeclKind::Interface, "Wide", 1),
            |decl, i| decl.with_method(Method::new(format!("op{i}"), i + 2)),
        )
    }

    #[test]
    fn eleven_methods_trigger() {
        let finding = FatInterface::new().check(&interface_with(11)).expect("finding");
        assert_eq!(finding.message, MESSAGE);
    }

    #[test]
    fn exactly_ten_methods_do_not_trigger() {
        assert!(FatInterface::new().check(&interface_with(10)).is_none());
    }

    #[test]
    fn classes_are_exempt() {
        let mut decl = Declaration::new(DeclKind::Class, "Big", 1);
        for i in 0..20 {
            decl = decl.with_method(Method::new(format!("op{i}"), i + 2));
        }
        assert!(FatInterface::new().check(&decl).is_none());
    }

    #[test]
    fn threshold_is_configurable() {
        let rule = FatInterface::new().max_methods(2);
        assert!(rule.check(&interface_with(3)).is_some());
        assert!(rule.check(&interface_with(2)).is_none());
    }
}
