//! Method-level DIP check: bodies constructing objects directly.
//!
//! # Rationale
//!
//! A body containing the instantiation marker is coupling itself to a
//! concrete class instead of receiving an abstraction. The marker is a
//! literal substring match over the body text (for Java, `"new "`), which
//! accepts false positives in strings and comments.
//!
//! # Configuration
//!
//! - `marker`: instantiation substring to look for (default: `"new "`)

use solid_lint_core::{Finding, Method, MethodRule, Principle};

/// Rule name for direct-instantiation.
pub const NAME: &str = "direct-instantiation";

const MESSAGE: &str = "Instantiates concrete classes directly.";

/// Flags methods whose body text contains the instantiation marker.
#[derive(Debug, Clone)]
pub struct DirectInstantiation {
    /// Literal substring signalling object construction.
    pub marker: String,
}

impl Default for DirectInstantiation {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectInstantiation {
    /// Creates the check with the default `"new "` marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: "new ".to_string(),
        }
    }

    /// Sets the instantiation marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

impl MethodRule for DirectInstantiation {
    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags methods whose body contains the instantiation marker"
    }

    fn check(&self, method: &Method) -> Option<Finding> {
        method
            .body
            .as_ref()
            .map_or(false, |body| body.text.contains(&self.marker))
            .then(|| Finding::new(Principle::Dip, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_lint_core::MethodBody;

    fn method_with_body(text: &str) -> Method {
        Method::new("build", 2).with_body(MethodBody::new(text))
    }

    #[test]
    fn body_with_marker_triggers() {
        let method = method_with_body("{ return new Widget(); }");
        let finding = DirectInstantiation::new().check(&method).expect("finding");
        assert_eq!(finding.message, MESSAGE);
    }

    #[test]
    fn body_without_marker_does_not_trigger() {
        assert!(DirectInstantiation::new()
            .check(&method_with_body("{ return cached; }"))
            .is_none());
    }

    #[test]
    fn marker_requires_the_trailing_space() {
        assert!(DirectInstantiation::new()
            .check(&method_with_body("{ return newest; }"))
            .is_none());
    }

    #[test]
    fn bodiless_method_does_not_trigger() {
        assert!(DirectInstantiation::new().check(&Method::new("sig", 2)).is_none());
    }

    #[test]
    fn configured_marker_is_honored() {
        let rule = DirectInstantiation::new().marker("create(");
        assert!(rule.check(&method_with_body("{ return create(1); }")).is_some());
        assert!(rule.check(&method_with_body("{ return new Widget(); }")).is_none());
    }
}
