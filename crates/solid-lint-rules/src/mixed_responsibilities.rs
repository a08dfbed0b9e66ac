//! Class-level SRP check: one type owning both logging and database setup.
//!
//! # Rationale
//!
//! A type that declares both a `logEvent` and a `connectDB` method has
//! wired at least two unrelated responsibilities into one place. Matching
//! exact method names keeps the check cheap and predictable.
//!
//! # Configuration
//!
//! - `log_method`: logging method name (default: `logEvent`)
//! - `db_method`: database method name (default: `connectDB`)

use solid_lint_core::{ClassRule, Declaration, Finding, Principle};

/// Rule name for mixed-responsibilities.
pub const NAME: &str = "mixed-responsibilities";

const MESSAGE: &str = "Combines database, logging, and user operations.";

/// Flags types that declare both a logging and a database method.
#[derive(Debug, Clone)]
pub struct MixedResponsibilities {
    /// Logging method name, matched case-insensitively.
    pub log_method: String,
    /// Database method name, matched case-insensitively.
    pub db_method: String,
}

impl Default for MixedResponsibilities {
    fn default() -> Self {
        Self::new()
    }
}

impl MixedResponsibilities {
    /// Creates the check with its default method-name pair.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_method: "logEvent".to_string(),
            db_method: "connectDB".to_string(),
        }
    }

    /// Sets the logging method name.
    #[must_use]
    pub fn log_method(mut self, name: impl Into<String>) -> Self {
        self.log_method = name.into();
        self
    }

    /// Sets the database method name.
    #[must_use]
    pub fn db_method(mut self, name: impl Into<String>) -> Self {
        self.db_method = name.into();
        self
    }
}

impl ClassRule for MixedResponsibilities {
    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags types declaring both a logging and a database method"
    }

    fn check(&self, decl: &Declaration) -> Option<Finding> {
        let has_log = decl
            .methods
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(&self.log_method));
        let has_db = decl
            .methods
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(&self.db_method));

        (has_log && has_db).then(|| Finding::new(Principle::Srp, MESSAGE))
    }
}
