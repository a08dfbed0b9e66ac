//! # solid-lint-java
//!
//! Tree-sitter based Java front-end for solid-lint.
//!
//! [`JavaExtractor`] implements the `SourceParser` contract from
//! `solid-lint-core`: it parses Java source with the Tree-sitter grammar
//! and walks the concrete syntax tree into the language-neutral
//! declaration graph the analyzer consumes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod java;

pub use java::JavaExtractor;
