//! Core types for analyzed lines and principle findings.

use serde::{Deserialize, Serialize};

/// The five SOLID design principles the built-in checks approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    /// Single Responsibility Principle.
    Srp,
    /// Open/Closed Principle.
    Ocp,
    /// Liskov Substitution Principle.
    Lsp,
    /// Interface Segregation Principle.
    Isp,
    /// Dependency Inversion Principle.
    Dip,
}

impl Principle {
    /// Stable uppercase tag used in rendered notes (e.g., `"SRP"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Srp => "SRP",
            Self::Ocp => "OCP",
            Self::Lsp => "LSP",
            Self::Isp => "ISP",
            Self::Dip => "DIP",
        }
    }

    /// One-line statement of the principle.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Srp => "Single Responsibility: a type should have one reason to change",
            Self::Ocp => "Open/Closed: open for extension, closed for modification",
            Self::Lsp => "Liskov Substitution: subtypes must be usable through their base type",
            Self::Isp => "Interface Segregation: no client should depend on methods it does not use",
            Self::Dip => "Dependency Inversion: depend on abstractions, not concretions",
        }
    }
}

impl std::fmt::Display for Principle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single heuristic verdict against one declaration or method.
///
/// Findings are transient: the analyzer renders each one into the note of
/// the line where the offending declaration starts and drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Principle this finding approximates.
    pub principle: Principle,
    /// Human-readable explanation.
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(principle: Principle, message: impl Into<String>) -> Self {
        Self {
            principle,
            message: message.into(),
        }
    }

    /// Renders the finding as one `\n`-terminated note line.
    #[must_use]
    pub fn render(&self) -> String {
        format!("// {}: {}\n", self.principle.tag(), self.message)
    }
}

/// One physical source line with its analysis annotation.
///
/// `flagged` and `note` start out `false`/empty; the analyzer marks a line
/// when a declaration or method starting on it produces findings. The note
/// only ever grows within one analysis pass, so findings from a class and
/// a method sharing a start line both survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedLine {
    /// Raw line content, exactly as split from the input.
    pub content: String,
    /// Whether any finding attached to this line.
    pub flagged: bool,
    /// Concatenated findings for declarations and methods starting here.
    pub note: String,
}

impl AnalyzedLine {
    /// Creates an unannotated line record.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            flagged: false,
            note: String::new(),
        }
    }

    /// Creates the synthetic record appended when parsing fails.
    #[must_use]
    pub fn parse_failure(message: &str) -> Self {
        Self {
            content: format!("Error parsing code: {message}"),
            flagged: true,
            note: "Parsing Error".to_string(),
        }
    }
}
