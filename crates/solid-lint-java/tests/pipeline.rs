//! End-to-end pipeline tests: Java front-end plus the full built-in
//! check set, asserting the annotated-line output contract.

use solid_lint_core::{AnalyzedLine, SolidAnalyzer};
use solid_lint_java::JavaExtractor;
use solid_lint_rules::{class_rules, method_rules};

fn analyzer() -> SolidAnalyzer {
    let mut builder = SolidAnalyzer::builder().parser(JavaExtractor::new());
    for rule in class_rules() {
        builder = builder.class_rule_box(rule);
    }
    for rule in method_rules() {
        builder = builder.method_rule_box(rule);
    }
    builder.build().expect("parser is set")
}

fn analyze(source: &str) -> Vec<AnalyzedLine> {
    analyzer().analyze(source)
}

fn interface_with(method_count: usize) -> String {
    let mut src = String::from("interface Wide {\n");
    for i in 0..method_count {
        src.push_str(&format!("    public void op{i}();\n"));
    }
    src.push_str("}\n");
    src
}

#[test]
fn output_covers_every_input_line() {
    let src = "class Service extends Base {\n    public void run() {}\n}\n";
    let lines = analyze(src);
    assert_eq!(lines.len(), src.split('\n').count());
    for (record, content) in lines.iter().zip(src.split('\n')) {
        assert_eq!(record.content, content);
    }
}

#[test]
fn analysis_is_idempotent() {
    let src = "class Island {\n    void logEventFromDb() { new Object(); }\n}\n";
    assert_eq!(analyze(src), analyze(src));
}

#[test]
fn parse_failure_appends_exactly_one_flagged_record() {
    let src = "class Broken {\n    void oops( {\n";
    let lines = analyze(src);

    assert_eq!(lines.len(), src.split('\n').count() + 1);
    let last = lines.last().expect("non-empty");
    assert!(last.flagged);
    assert_eq!(last.note, "Parsing Error");
    assert!(last.content.starts_with("Error parsing code: "));
    // the materialized lines themselves stay unannotated
    for record in &lines[..lines.len() - 1] {
        assert!(!record.flagged);
    }
}

#[test]
fn log_and_db_methods_flag_the_class_line() {
    let src = "class UserManager extends Base {\n    public void logEvent() {}\n    public void connectDB() {}\n}\n";
    let lines = analyze(src);

    assert!(lines[0].flagged);
    assert_eq!(
        lines[0].note,
        "// SRP: Combines database, logging, and user operations.\n"
    );
}

#[test]
fn eleven_interface_methods_trigger_isp_but_ten_do_not() {
    let lines = analyze(&interface_with(11));
    assert!(lines[0].flagged);
    assert!(lines[0].note.contains("Too many methods in interface."));

    let lines = analyze(&interface_with(10));
    assert!(!lines[0].note.contains("Too many methods in interface."));
    assert!(!lines[0].flagged);
}

#[test]
fn standalone_class_triggers_only_lsp() {
    let src = "class Standalone {\n    public void run() {}\n}\n";
    let lines = analyze(src);

    assert!(lines[0].flagged);
    assert_eq!(lines[0].note, "// LSP: Not substitutable.\n");
    assert!(lines.iter().skip(1).all(|l| !l.flagged));
}

#[test]
fn single_line_class_accumulates_class_and_method_findings() {
    let lines = analyze("class Foo { void logEventFromDb() {} }");

    assert_eq!(lines.len(), 1);
    let record = &lines[0];
    assert!(record.flagged);
    assert!(record
        .note
        .contains("// SRP: Combines logging and database operations.\n"));
    assert!(!record
        .note
        .contains("Combines database, logging, and user operations."));
    // class findings come first, then the method's
    assert_eq!(
        record.note,
        "// OCP: No public methods for extensibility.\n\
         // LSP: Not substitutable.\n\
         // SRP: Combines logging and database operations.\n"
    );
}

#[test]
fn empty_input_yields_one_unflagged_record() {
    let lines = analyze("");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content, "");
    assert!(!lines[0].flagged);
    assert!(lines[0].note.is_empty());
}

#[test]
fn instantiation_in_body_flags_the_method_line() {
    let src = "class Factory extends Base {\n    public Widget build() {\n        return new Widget();\n    }\n}\n";
    let lines = analyze(src);

    assert!(!lines[0].flagged);
    assert!(lines[1].flagged);
    assert_eq!(
        lines[1].note,
        "// DIP: Instantiates concrete classes directly.\n"
    );
}

#[test]
fn local_class_flags_the_enclosing_type_and_itself() {
    let src = "class Outer extends Base {\n    public void helper() {\n        class Local {}\n    }\n}\n";
    let lines = analyze(src);

    // enclosing type depends on a concrete local class
    assert!(lines[0].flagged);
    assert_eq!(lines[0].note, "// DIP: Depends on concrete classes.\n");

    // the local class is itself visited as a declaration
    assert!(lines[2].flagged);
    assert!(lines[2].note.contains("// OCP: No public methods for extensibility.\n"));
    assert!(lines[2].note.contains("// LSP: Not substitutable.\n"));

    // the method body contains no instantiation marker
    assert!(!lines[1].flagged);
}

#[test]
fn findings_keep_the_class_check_order() {
    // triggers SRP, OCP, and LSP together on one line
    let src = "class Everything {\n    void logEvent() {}\n    void connectDB() {}\n}\n";
    let lines = analyze(src);

    assert_eq!(
        lines[0].note,
        "// SRP: Combines database, logging, and user operations.\n\
         // OCP: No public methods for extensibility.\n\
         // LSP: Not substitutable.\n"
    );
}
