//! Method-level SRP check: one method name mixing two vocabularies.
//!
//! # Rationale
//!
//! A method whose name speaks both logging and database language (such as
//! `logEventFromDb`) is usually doing both jobs. The check matches the two
//! tokens anywhere in the lowercased name.
//!
//! # Configuration
//!
//! - `log_token`: logging vocabulary substring (default: `log`)
//! - `db_token`: database vocabulary substring (default: `db`)

use solid_lint_core::{Finding, Method, MethodRule, Principle};

/// Rule name for mixed-method-concerns.
pub const NAME: &str = "mixed-method-concerns";

const MESSAGE: &str = "Combines logging and database operations.";

/// Flags methods whose name contains both configured tokens.
#[derive(Debug, Clone)]
pub struct MixedMethodConcerns {
    /// Logging token, matched against the lowercased method name.
    pub log_token: String,
    /// Database token, matched against the lowercased method name.
    pub db_token: String,
}

impl Default for MixedMethodConcerns {
    fn default() -> Self {
        Self::new()
    }
}

impl MixedMethodConcerns {
    /// Creates the check with its default token pair.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_token: "log".to_string(),
            db_token: "db".to_string(),
        }
    }

    /// Sets the logging token (stored lowercased).
    #[must_use]
    pub fn log_token(mut self, token: impl Into<String>) -> Self {
        self.log_token = token.into().to_lowercase();
        self
    }

    /// Sets the database token (stored lowercased).
    #[must_use]
    pub fn db_token(mut self, token: impl Into<String>) -> Self {
        self.db_token = token.into().to_lowercase();
        self
    }
}

impl MethodRule for MixedMethodConcerns {
    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags methods whose name mixes logging and database vocabulary"
    }

    fn check(&self, method: &Method) -> Option<Finding> {
        let name = method.name.to_lowercase();
        (name.contains(&self.log_token) && name.contains(&self.db_token))
            .then(|| Finding::new(Principle::Srp, MESSAGE))
    }
}
