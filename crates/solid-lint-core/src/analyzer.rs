//! Core analyzer for orchestrating one analysis pass.

use crate::decl::Declaration;
use crate::lines::materialize;
use crate::parser::{ParserBox, SourceParser};
use crate::rule::{ClassRule, ClassRuleBox, MethodRule, MethodRuleBox};
use crate::types::AnalyzedLine;

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while assembling an analyzer.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No source parser was configured.
    #[error("no source parser configured")]
    MissingParser,
}

/// Builder for configuring a [`SolidAnalyzer`].
#[derive(Default)]
pub struct SolidAnalyzerBuilder {
    parser: Option<ParserBox>,
    class_rules: Vec<ClassRuleBox>,
    method_rules: Vec<MethodRuleBox>,
}

impl SolidAnalyzerBuilder {
    /// Creates a new builder with no parser and no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language front-end.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Sets a boxed language front-end.
    #[must_use]
    pub fn parser_box(mut self, parser: ParserBox) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Adds a class-level check. Checks run in registration order.
    #[must_use]
    pub fn class_rule<R: ClassRule + 'static>(mut self, rule: R) -> Self {
        self.class_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed class-level check.
    #[must_use]
    pub fn class_rule_box(mut self, rule: ClassRuleBox) -> Self {
        self.class_rules.push(rule);
        self
    }

    /// Adds a method-level check. Checks run in registration order.
    #[must_use]
    pub fn method_rule<R: MethodRule + 'static>(mut self, rule: R) -> Self {
        self.method_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed method-level check.
    #[must_use]
    pub fn method_rule_box(mut self, rule: MethodRuleBox) -> Self {
        self.method_rules.push(rule);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingParser`] when no front-end was set.
    pub fn build(self) -> Result<SolidAnalyzer, BuildError> {
        let parser = self.parser.ok_or(BuildError::MissingParser)?;
        Ok(SolidAnalyzer {
            parser,
            class_rules: self.class_rules,
            method_rules: self.method_rules,
        })
    }
}

/// The analyzer: materializes lines, parses, and applies principle checks.
///
/// Use [`SolidAnalyzer::builder()`] to construct an instance. Each
/// [`analyze`](SolidAnalyzer::analyze) call allocates its own line sequence
/// and declaration graph; the analyzer itself holds no per-call state, so
/// one instance can serve concurrent callers.
pub struct SolidAnalyzer {
    parser: ParserBox,
    class_rules: Vec<ClassRuleBox>,
    method_rules: Vec<MethodRuleBox>,
}

impl SolidAnalyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> SolidAnalyzerBuilder {
        SolidAnalyzerBuilder::new()
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.class_rules.len() + self.method_rules.len()
    }

    /// Analyzes one source text into an annotated line sequence.
    ///
    /// Never fails: a parse failure is reported as a single synthetic
    /// flagged record appended after the unannotated lines, and a finding
    /// whose declaration has no usable start line is dropped.
    #[must_use]
    pub fn analyze(&self, source: &str) -> Vec<AnalyzedLine> {
        let mut lines = materialize(source);

        let tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                info!("{} parse failed: {e}", self.parser.language_id());
                lines.push(AnalyzedLine::parse_failure(&e.to_string()));
                return lines;
            }
        };

        debug!(
            "checking {} top-level declaration(s) against {} rule(s)",
            tree.types.len(),
            self.rule_count()
        );

        for decl in &tree.types {
            self.visit_declaration(decl, &mut lines);
        }

        lines
    }

    /// Runs all checks against one declaration and its methods, then
    /// recurses into member types and the local types declared inside
    /// method bodies.
    fn visit_declaration(&self, decl: &Declaration, lines: &mut [AnalyzedLine]) {
        let mut note = String::new();
        for rule in &self.class_rules {
            if let Some(finding) = rule.check(decl) {
                note.push_str(&finding.render());
            }
        }
        if !note.is_empty() {
            annotate(lines, decl.line, &note);
        }

        for method in &decl.methods {
            let mut note = String::new();
            for rule in &self.method_rules {
                if let Some(finding) = rule.check(method) {
                    note.push_str(&finding.render());
                }
            }
            if !note.is_empty() {
                annotate(lines, method.line, &note);
            }
        }

        for nested in &decl.nested {
            self.visit_declaration(nested, lines);
        }
        for method in &decl.methods {
            if let Some(body) = &method.body {
                for local in &body.nested {
                    self.visit_declaration(local, lines);
                }
            }
        }
    }
}

/// Applies a rendered note at a 1-based line, appending to whatever is
/// already attached there. An unresolvable position drops the note.
fn annotate(lines: &mut [AnalyzedLine], line: usize, note: &str) {
    if line == 0 || line > lines.len() {
        debug!("dropping finding with unresolvable line {line}");
        return;
    }
    let record = &mut lines[line - 1];
    record.flagged = true;
    record.note.push_str(note);
}
