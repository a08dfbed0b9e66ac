//! # solid-lint-rules
//!
//! Built-in principle checks for solid-lint.
//!
//! Each check is a cheap syntactic proxy for one SOLID principle. The
//! heuristics are intentionally imprecise: they surface hints from the
//! declaration graph alone, with no type resolution or flow analysis.
//!
//! ## Class-level checks
//!
//! | Principle | Name | Description |
//! |-----------|------|-------------|
//! | SRP | `mixed-responsibilities` | Type declares both a logging and a database method |
//! | DIP | `concrete-dependency` | A method body declares a non-interface local type |
//! | OCP | `no-public-surface` | Non-abstract type with no public methods |
//! | LSP | `not-substitutable` | Class with no extends and no implements |
//! | ISP | `fat-interface` | Interface with more than 10 methods |
//!
//! ## Method-level checks
//!
//! | Principle | Name | Description |
//! |-----------|------|-------------|
//! | SRP | `mixed-method-concerns` | Method name mixes logging and database vocabulary |
//! | DIP | `direct-instantiation` | Method body contains the instantiation marker |
//!
//! ## Usage
//!
//! ```ignore
//! use solid_lint_core::SolidAnalyzer;
//! use solid_lint_rules::{class_rules, method_rules};
//!
//! let mut builder = SolidAnalyzer::builder().parser(JavaExtractor::new());
//! for rule in class_rules() {
//!     builder = builder.class_rule_box(rule);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod concrete_dependency;
mod direct_instantiation;
mod fat_interface;
mod mixed_method_concerns;
mod mixed_responsibilities;
mod no_public_surface;
mod not_substitutable;
mod presets;

pub use concrete_dependency::ConcreteDependency;
pub use direct_instantiation::DirectInstantiation;
pub use fat_interface::FatInterface;
pub use mixed_method_concerns::MixedMethodConcerns;
pub use mixed_responsibilities::MixedResponsibilities;
pub use no_public_surface::NoPublicSurface;
pub use not_substitutable::NotSubstitutable;
pub use presets::{class_rules, class_rules_from, method_rules, method_rules_from};

/// Re-export core types for convenience.
pub use solid_lint_core::{ClassRule, Finding, MethodRule, Principle};
