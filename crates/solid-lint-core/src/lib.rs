//! # solid-lint-core
//!
//! Core framework for heuristic SOLID-principle linting.
//!
//! This crate provides the foundational traits and types for building
//! principle linters over a parsed declaration graph. It includes:
//!
//! - [`SourceParser`] trait for pluggable language front-ends
//! - [`ClassRule`] and [`MethodRule`] traits for principle checks
//! - [`SolidAnalyzer`] for orchestrating one analysis pass
//! - [`AnalyzedLine`] for the annotated per-line output
//!
//! ## Example
//!
//! ```ignore
//! use solid_lint_core::SolidAnalyzer;
//!
//! let analyzer = SolidAnalyzer::builder()
//!     .parser(JavaExtractor::new())
//!     .class_rule(NotSubstitutable::new())
//!     .build()?;
//!
//! let lines = analyzer.analyze(source);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod decl;
mod lines;
mod parser;
mod rule;
mod types;

pub use analyzer::{BuildError, SolidAnalyzer, SolidAnalyzerBuilder};
pub use config::{Config, ConfigError, RuleConfig};
pub use decl::{DeclKind, Declaration, Method, MethodBody, SourceTree};
pub use lines::materialize;
pub use parser::{ParseError, ParserBox, SourceParser};
pub use rule::{ClassRule, ClassRuleBox, MethodRule, MethodRuleBox};
pub use types::{AnalyzedLine, Finding, Principle};
